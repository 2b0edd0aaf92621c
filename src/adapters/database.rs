use crate::domain::ports::{ConfigProvider, Session, SessionProvider};
use crate::utils::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Hands out pooled SQLite connections, one per DAO call.
#[derive(Debug, Clone)]
pub struct SqliteSessionProvider {
    pool: SqlitePool,
}

impl SqliteSessionProvider {
    pub async fn connect<C: ConfigProvider>(config: &C) -> Result<Self> {
        tracing::debug!(
            "Connecting to {} (max_connections={}, acquire_timeout={:?})",
            config.database_url(),
            config.max_connections(),
            config.acquire_timeout()
        );

        let options = SqliteConnectOptions::from_str(config.database_url())?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections())
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl SessionProvider for SqliteSessionProvider {
    async fn session(&self) -> Result<Session> {
        Ok(self.pool.acquire().await?)
    }
}
