//! Alert error types.

use thiserror::Error;

use crate::notify::NotifyError;

/// Errors that stop the cost watcher.
#[derive(Debug, Error)]
pub enum AlertError {
    /// The caller asked the watcher to stop.
    #[error("Cost watcher cancelled")]
    Cancelled,

    /// The event stream failed.
    #[error("Spend stream error: {0}")]
    Stream(String),

    /// An alert could not be posted.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl AlertError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => "CANCELLED",
            Self::Stream(_) => "STREAM_ERROR",
            Self::Notify(_) => "NOTIFY_FAILED",
        }
    }
}

impl From<AlertError> for finpack_shared::AppError {
    fn from(err: AlertError) -> Self {
        match err {
            AlertError::Cancelled => Self::Internal(err.to_string()),
            AlertError::Stream(_) | AlertError::Notify(_) => Self::ExternalService(err.to_string()),
        }
    }
}
