pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::database::SqliteSessionProvider;
pub use core::application_dao::ApplicationDao;
#[cfg(feature = "cli")]
pub use core::runner::run_command;
pub use domain::model::{ApplicationRecord, Gender, UserApplication};
pub use domain::ports::{ApplicationRepository, ConfigProvider, SessionProvider};
pub use utils::error::{BookingError, Result};
