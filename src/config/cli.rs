use crate::config::{
    validate_pool_settings, TomlConfig, DEFAULT_ACQUIRE_TIMEOUT_SECONDS, DEFAULT_MAX_CONNECTIONS,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "booking-dao")]
#[command(about = "Read booking applications together with their masters and services")]
pub struct CliConfig {
    #[arg(long, default_value = "sqlite://bookings.db", conflicts_with = "config")]
    pub database_url: String,

    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS, conflicts_with = "config")]
    pub max_connections: u32,

    #[arg(long, default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECONDS, conflicts_with = "config")]
    pub acquire_timeout_seconds: u64,

    #[arg(long, help = "Read database and logging settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the applications owned by one user
    ByUser {
        #[arg(long)]
        user_id: i64,
    },
    /// List every application
    All,
}

impl CliConfig {
    /// `--json-logs` wins; otherwise the TOML `[logging]` format, then compact.
    pub fn resolve_log_format(&self, file_config: Option<&TomlConfig>) -> LogFormat {
        if self.json_logs {
            return LogFormat::Json;
        }
        file_config
            .map(|config| config.log_format())
            .unwrap_or_default()
    }
}

impl ConfigProvider for CliConfig {
    fn database_url(&self) -> &str {
        &self.database_url
    }

    fn max_connections(&self) -> u32 {
        self.max_connections
    }

    fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }

    fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_database_url("database_url", &self.database_url)?;
        validate_pool_settings(
            "max_connections",
            self.max_connections,
            "acquire_timeout_seconds",
            self.acquire_timeout_seconds,
        )
    }
}
