use crate::core::{
    Application, ApplicationRecord, ApplicationRepository, Gender, Master, Result, Service,
    SessionProvider, UserApplication,
};
use crate::utils::error::BookingError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

// Master and service come back in the same statement. LEFT JOIN keeps rows whose
// references are broken so they surface as DanglingReference instead of vanishing.
macro_rules! select_applications {
    () => {
        r#"
        SELECT a.id, a.user_id, a.client_name, a.appointment_date, a.appointment_time,
               a.gender, a.master_id, m.master_name, a.service_id, s.service_name
        FROM applications a
        LEFT JOIN masters m ON m.id = a.master_id
        LEFT JOIN services s ON s.id = a.service_id
        "#
    };
}

const SELECT_BY_USER: &str = concat!(select_applications!(), "WHERE a.user_id = ? ORDER BY a.id");
const SELECT_ALL: &str = concat!(select_applications!(), "ORDER BY a.id");

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    user_id: i64,
    client_name: String,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
    gender: Gender,
    master_id: i64,
    master_name: Option<String>,
    service_id: i64,
    service_name: Option<String>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = BookingError;

    fn try_from(row: ApplicationRow) -> Result<Self> {
        let master_name = row.master_name.ok_or(BookingError::DanglingReference {
            application_id: row.id,
            relation: "master",
        })?;
        let service_name = row.service_name.ok_or(BookingError::DanglingReference {
            application_id: row.id,
            relation: "service",
        })?;

        Ok(Application {
            id: row.id,
            user_id: row.user_id,
            client_name: row.client_name,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            gender: row.gender,
            master: Master {
                id: row.master_id,
                master_name,
            },
            service: Service {
                id: row.service_id,
                service_name,
            },
        })
    }
}

/// Read-only access to booking applications.
///
/// Every call takes its own session from the provider and drops it before
/// returning, on success and on failure alike. Failures are logged once here
/// and handed back as `Err`; an empty `Vec` always means "no matching rows".
pub struct ApplicationDao<P: SessionProvider> {
    sessions: P,
}

impl<P: SessionProvider> ApplicationDao<P> {
    pub fn new(sessions: P) -> Self {
        Self { sessions }
    }

    async fn load_by_user(&self, user_id: i64) -> Result<Vec<Application>> {
        let mut session = self.sessions.session().await?;
        let rows: Vec<ApplicationRow> = sqlx::query_as(SELECT_BY_USER)
            .bind(user_id)
            .fetch_all(&mut *session)
            .await?;
        rows.into_iter().map(Application::try_from).collect()
    }

    async fn load_all(&self) -> Result<Vec<Application>> {
        let mut session = self.sessions.session().await?;
        let rows: Vec<ApplicationRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&mut *session)
            .await?;
        rows.into_iter().map(Application::try_from).collect()
    }
}

#[async_trait]
impl<P: SessionProvider> ApplicationRepository for ApplicationDao<P> {
    async fn applications_by_user(&self, user_id: i64) -> Result<Vec<UserApplication>> {
        match self.load_by_user(user_id).await {
            Ok(applications) => {
                tracing::debug!(
                    "Fetched {} applications for user {}",
                    applications.len(),
                    user_id
                );
                Ok(applications.into_iter().map(UserApplication::from).collect())
            }
            Err(e) => {
                tracing::error!("Error while fetching applications for user {}: {}", user_id, e);
                Err(e)
            }
        }
    }

    async fn all_applications(&self) -> Result<Vec<ApplicationRecord>> {
        match self.load_all().await {
            Ok(applications) => {
                tracing::debug!("Fetched {} applications", applications.len());
                Ok(applications
                    .into_iter()
                    .map(ApplicationRecord::from)
                    .collect())
            }
            Err(e) => {
                tracing::error!("Error while fetching all applications: {}", e);
                Err(e)
            }
        }
    }
}
