//! Reconciliation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Reconciliation-related errors.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Period start is after period end.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// A transaction amount is not a decimal number.
    #[error("Transaction {id} has invalid amount: {amount}")]
    InvalidAmount {
        /// Entry id.
        id: String,
        /// The raw amount text.
        amount: String,
    },

    /// A transaction timestamp is neither RFC 3339 nor `YYYY-MM-DD`.
    #[error("Transaction {id} has invalid timestamp: {timestamp}")]
    InvalidTimestamp {
        /// Entry id.
        id: String,
        /// The raw timestamp text.
        timestamp: String,
    },

    /// Running balance exceeded the decimal range.
    #[error("Arithmetic overflow while computing balance for {0}")]
    Overflow(String),

    /// The transaction source failed.
    #[error("Transaction source error: {0}")]
    Source(String),
}

impl ReconcileError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InvalidTimestamp { .. } => "INVALID_TIMESTAMP",
            Self::Overflow(_) => "OVERFLOW",
            Self::Source(_) => "SOURCE_ERROR",
        }
    }
}

impl From<ReconcileError> for finpack_shared::AppError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Source(_) => Self::ExternalService(err.to_string()),
            ReconcileError::Overflow(_) => Self::Internal(err.to_string()),
            ReconcileError::InvalidPeriod { .. }
            | ReconcileError::InvalidAmount { .. }
            | ReconcileError::InvalidTimestamp { .. } => Self::Validation(err.to_string()),
        }
    }
}
