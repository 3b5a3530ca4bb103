//! Short-horizon time series forecasting.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ForecastError;
pub use service::{DEFAULT_WINDOW, ForecastService, TREND_THRESHOLD};
pub use types::{ForecastResult, TimeSeriesPoint, Trend};
