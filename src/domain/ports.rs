use crate::domain::model::{ApplicationRecord, UserApplication};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;
use std::time::Duration;

/// A pooled connection; it goes back to the pool when dropped.
pub type Session = PoolConnection<Sqlite>;

pub trait SessionProvider: Send + Sync {
    fn session(&self) -> impl std::future::Future<Output = Result<Session>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn database_url(&self) -> &str;
    fn max_connections(&self) -> u32;
    fn acquire_timeout(&self) -> Duration;
    fn log_format(&self) -> LogFormat;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn applications_by_user(&self, user_id: i64) -> Result<Vec<UserApplication>>;
    async fn all_applications(&self) -> Result<Vec<ApplicationRecord>>;
}
