//! Budget error types.

use thiserror::Error;

use crate::notify::NotifyError;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Day counts must be positive.
    #[error("days_elapsed and days_in_month must be positive")]
    InvalidDayCount,

    /// Burn-rate arithmetic exceeded the decimal range.
    #[error("Arithmetic overflow while forecasting spend")]
    Overflow,

    /// The spend source failed.
    #[error("Spend source error: {0}")]
    Source(String),

    /// The weekly report could not be posted.
    #[error(transparent)]
    Report(#[from] NotifyError),
}

impl BudgetError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDayCount => "INVALID_DAY_COUNT",
            Self::Overflow => "OVERFLOW",
            Self::Source(_) => "SOURCE_ERROR",
            Self::Report(_) => "REPORT_FAILED",
        }
    }
}

impl From<BudgetError> for finpack_shared::AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::InvalidDayCount => Self::Validation(err.to_string()),
            BudgetError::Overflow => Self::Internal(err.to_string()),
            BudgetError::Source(_) | BudgetError::Report(_) => {
                Self::ExternalService(err.to_string())
            }
        }
    }
}
