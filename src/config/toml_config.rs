use crate::config::{validate_pool_settings, DEFAULT_ACQUIRE_TIMEOUT_SECONDS, DEFAULT_MAX_CONNECTIONS};
use crate::core::ConfigProvider;
use crate::utils::error::{BookingError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub database: DatabaseConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    pub acquire_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references from the environment; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let url = validation::validate_required_field("database.url", &self.database.url)?;
        validation::validate_database_url("database.url", url)?;

        validate_pool_settings(
            "database.max_connections",
            self.max_connections(),
            "database.acquire_timeout_seconds",
            self.acquire_timeout_seconds(),
        )?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validation::validate_one_of("logging.format", format, &["compact", "json"])?;
        }

        Ok(())
    }

    pub fn max_connections(&self) -> u32 {
        self.database
            .max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn acquire_timeout_seconds(&self) -> u64 {
        self.database
            .acquire_timeout_seconds
            .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn database_url(&self) -> &str {
        // validate_config rejects a missing url before a connection is attempted
        self.database.url.as_deref().unwrap_or_default()
    }

    fn max_connections(&self) -> u32 {
        self.max_connections()
    }

    fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds())
    }

    fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .and_then(LogFormat::parse)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
