use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Client gender as stored in the `applications.gender` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Master {
    pub id: i64,
    pub master_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: i64,
    pub service_name: String,
}

/// A booking with its master and service already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub client_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub gender: Gender,
    pub master: Master,
    pub service: Service,
}

/// Record returned when listing one user's applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserApplication {
    pub application_id: i64,
    pub service_name: String,
    pub master_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub gender: String,
}

/// Record returned when listing every application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: i64,
    pub user_id: i64,
    pub service_name: String,
    pub master_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub client_name: String,
    pub gender: String,
}

impl From<Application> for UserApplication {
    fn from(app: Application) -> Self {
        Self {
            application_id: app.id,
            service_name: app.service.service_name,
            master_name: app.master.master_name,
            appointment_date: app.appointment_date,
            appointment_time: app.appointment_time,
            gender: app.gender.as_str().to_string(),
        }
    }
}

impl From<Application> for ApplicationRecord {
    fn from(app: Application) -> Self {
        Self {
            application_id: app.id,
            user_id: app.user_id,
            service_name: app.service.service_name,
            master_name: app.master.master_name,
            appointment_date: app.appointment_date,
            appointment_time: app.appointment_time,
            client_name: app.client_name,
            gender: app.gender.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haircut() -> Application {
        Application {
            id: 7,
            user_id: 42,
            client_name: "Maria".to_string(),
            appointment_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            gender: Gender::Male,
            master: Master {
                id: 3,
                master_name: "Alex".to_string(),
            },
            service: Service {
                id: 5,
                service_name: "Haircut".to_string(),
            },
        }
    }

    #[test]
    fn test_user_projection_drops_owner_fields() {
        let record = UserApplication::from(haircut());

        assert_eq!(record.application_id, 7);
        assert_eq!(record.service_name, "Haircut");
        assert_eq!(record.master_name, "Alex");
        assert_eq!(record.gender, "male");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("user_id").is_none());
        assert!(json.get("client_name").is_none());
    }

    #[test]
    fn test_full_projection_serializes_boundary_fields() {
        let record = ApplicationRecord::from(haircut());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "application_id": 7,
                "user_id": 42,
                "service_name": "Haircut",
                "master_name": "Alex",
                "appointment_date": "2024-05-01",
                "appointment_time": "14:30:00",
                "client_name": "Maria",
                "gender": "male"
            })
        );
    }

    #[test]
    fn test_gender_scalar_values() {
        assert_eq!(Gender::Male.as_str(), "male");
        assert_eq!(Gender::Female.as_str(), "female");
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), "female");
    }
}
