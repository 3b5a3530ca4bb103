//! Forecast data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observation in a time series.
///
/// Order is taken from the input sequence; points are never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Observation timestamp, kept as supplied.
    #[serde(default)]
    pub timestamp: String,
    /// Decimal value encoded as text.
    pub value: String,
}

impl TimeSeriesPoint {
    /// Creates a point from a timestamp and value text.
    pub fn new(timestamp: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value: value.into(),
        }
    }
}

/// Direction of the most recent movement in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Rising by more than the threshold.
    Up,
    /// Falling by more than the threshold.
    Down,
    /// Within the threshold either way.
    Stable,
}

/// Result of a forecast run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Period label; always `"next"`.
    pub period: String,
    /// Predicted value with exactly two decimal places.
    pub predicted: Decimal,
    /// Fixed confidence score (0.7); not derived from the data.
    pub confidence: Decimal,
    /// Trend of the last two points.
    pub trend: Trend,
    /// Labels of the inputs that produced the prediction.
    pub factors: Vec<String>,
}
