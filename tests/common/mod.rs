#![allow(dead_code)]

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

pub struct TestDb {
    pub pool: SqlitePool,
    pub url: String,
    _dir: TempDir,
}

pub async fn setup_db(max_connections: u32) -> TestDb {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("bookings.db").display());

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&url)
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

    TestDb {
        pool,
        url,
        _dir: dir,
    }
}

pub async fn insert_master(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO masters (id, master_name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_service(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO services (id, service_name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub struct NewApplication<'a> {
    pub id: i64,
    pub user_id: i64,
    pub master_id: i64,
    pub service_id: i64,
    pub client_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub gender: &'a str,
}

pub async fn insert_application(pool: &SqlitePool, app: &NewApplication<'_>) {
    let mut conn = pool.acquire().await.unwrap();
    insert_application_with(&mut conn, app).await;
}

/// Inserts a row whose master/service may not exist.
pub async fn insert_dangling_application(pool: &SqlitePool, app: &NewApplication<'_>) {
    let mut conn = pool.acquire().await.unwrap();
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await
        .unwrap();
    insert_application_with(&mut conn, app).await;
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await
        .unwrap();
}

async fn insert_application_with(conn: &mut sqlx::SqliteConnection, app: &NewApplication<'_>) {
    sqlx::query(
        r#"
        INSERT INTO applications (
            id, user_id, master_id, service_id, client_name,
            appointment_date, appointment_time, gender
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(app.id)
    .bind(app.user_id)
    .bind(app.master_id)
    .bind(app.service_id)
    .bind(app.client_name)
    .bind(app.date)
    .bind(app.time)
    .bind(app.gender)
    .execute(conn)
    .await
    .unwrap();
}

/// Seeds two masters, two services and five applications spread over users 1 and 2.
pub async fn seed_salon(pool: &SqlitePool) {
    insert_master(pool, 1, "Alex").await;
    insert_master(pool, 2, "Irina").await;
    insert_service(pool, 1, "Haircut").await;
    insert_service(pool, 2, "Manicure").await;

    let rows = [
        (1, 1, 1, 1, "Anna", "2024-05-01", "10:00:00", "female"),
        (2, 1, 2, 2, "Anna", "2024-05-02", "11:30:00", "female"),
        (3, 1, 1, 2, "Anna", "2024-05-03", "12:00:00", "female"),
        (4, 2, 2, 1, "Boris", "2024-05-01", "15:00:00", "male"),
        (5, 2, 1, 1, "Boris", "2024-06-10", "09:15:00", "male"),
    ];

    for (id, user_id, master_id, service_id, client_name, date, time, gender) in rows {
        insert_application(
            pool,
            &NewApplication {
                id,
                user_id,
                master_id,
                service_id,
                client_name,
                date,
                time,
                gender,
            },
        )
        .await;
    }
}

/// Counts warn/error events emitted by this crate.
#[derive(Clone, Default)]
pub struct DiagnosticCounter(Arc<AtomicUsize>);

impl DiagnosticCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for DiagnosticCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target().starts_with("booking_dao") && *metadata.level() <= Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs a thread-local subscriber; keep the guard alive for the whole test.
pub fn capture_diagnostics() -> (DiagnosticCounter, DefaultGuard) {
    let counter = DiagnosticCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
