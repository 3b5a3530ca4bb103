//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain errors from `finpack-core` convert into this type at the
/// command-line boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not enough input to compute a result.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Input resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// External collaborator (spend source, reporter, notifier) failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (sysexits.h values).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::InsufficientData(_) => 65,
            Self::NotFound(_) => 66,
            Self::ExternalService(_) => 69,
            Self::Internal(_) => 70,
            Self::Config(_) => 78,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InsufficientData(_) => "INSUFFICIENT_DATA",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
