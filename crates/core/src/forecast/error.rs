//! Forecast error types.

use thiserror::Error;

/// Forecast-related errors.
///
/// Every variant is fatal to the call; no partial forecast is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Fewer points than the requested window.
    #[error("Insufficient data: need at least {required} points")]
    InsufficientData {
        /// Minimum number of points required.
        required: usize,
        /// Number of points supplied.
        available: usize,
    },

    /// Window must contain at least one point.
    #[error("Window must be at least 1")]
    InvalidWindow,

    /// A point's value is not a decimal number.
    #[error("Invalid value at {timestamp}: {value}")]
    InvalidValue {
        /// Timestamp of the offending point.
        timestamp: String,
        /// The raw value text.
        value: String,
    },

    /// Intermediate arithmetic exceeded the decimal range.
    #[error("Arithmetic overflow while computing forecast")]
    Overflow,
}

impl ForecastError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InvalidWindow => "INVALID_WINDOW",
            Self::InvalidValue { .. } => "INVALID_VALUE",
            Self::Overflow => "OVERFLOW",
        }
    }
}

impl From<ForecastError> for finpack_shared::AppError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InsufficientData { .. } => Self::InsufficientData(err.to_string()),
            ForecastError::InvalidWindow | ForecastError::InvalidValue { .. } => {
                Self::Validation(err.to_string())
            }
            ForecastError::Overflow => Self::Internal(err.to_string()),
        }
    }
}
