#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;

pub(crate) fn validate_pool_settings(
    connections_field: &str,
    max_connections: u32,
    timeout_field: &str,
    acquire_timeout_seconds: u64,
) -> Result<()> {
    validate_range(connections_field, max_connections, 1, MAX_CONNECTIONS_LIMIT)?;
    validate_positive_number(timeout_field, acquire_timeout_seconds, 1)
}
