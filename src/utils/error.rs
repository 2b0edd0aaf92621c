use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Data access failed: {0}")]
    DataAccess(#[from] sqlx::Error),

    #[error("Application {application_id} references a missing {relation}")]
    DanglingReference {
        application_id: i64,
        relation: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BookingError {
    /// True for failures raised while reading the store, as opposed to setup errors.
    pub fn is_data_access(&self) -> bool {
        matches!(
            self,
            BookingError::DataAccess(_) | BookingError::DanglingReference { .. }
        )
    }

    /// Process exit code for the binary; store failures get their own code.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
            ErrorSeverity::High if self.is_data_access() => 4,
            ErrorSeverity::High => 1,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BookingError::DataAccess(sqlx::Error::PoolTimedOut) => ErrorSeverity::Medium,
            BookingError::DataAccess(_) | BookingError::DanglingReference { .. } => {
                ErrorSeverity::High
            }
            BookingError::IoError(_) | BookingError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            BookingError::ConfigError { .. }
            | BookingError::MissingConfigError { .. }
            | BookingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::DataAccess(_) => {
                "Could not read applications from the database".to_string()
            }
            BookingError::DanglingReference { application_id, relation } => format!(
                "Application {} points to a {} that no longer exists",
                application_id, relation
            ),
            BookingError::ConfigError { .. }
            | BookingError::MissingConfigError { .. }
            | BookingError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            BookingError::IoError(_) | BookingError::SerializationError(_) => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::DataAccess(sqlx::Error::PoolTimedOut) => {
                "Increase acquire_timeout_seconds or max_connections"
            }
            BookingError::DataAccess(_) => "Check the database URL and that the schema exists",
            BookingError::DanglingReference { .. } => {
                "Restore the referenced master/service row or fix the application"
            }
            BookingError::IoError(_) => "Check file paths and permissions",
            BookingError::SerializationError(_) => "Report this as a bug",
            BookingError::ConfigError { .. }
            | BookingError::MissingConfigError { .. }
            | BookingError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
