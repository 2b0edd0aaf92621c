pub mod application_dao;
#[cfg(feature = "cli")]
pub mod runner;

pub use crate::domain::model::{
    Application, ApplicationRecord, Gender, Master, Service, UserApplication,
};
pub use crate::domain::ports::{ApplicationRepository, ConfigProvider, Session, SessionProvider};
pub use crate::utils::error::Result;
