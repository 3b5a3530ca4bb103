//! Budget tracking and burn-rate forecasting.

pub mod error;
pub mod service;
pub mod source;
pub mod types;


pub use error::BudgetError;
pub use service::{BurnRateForecaster, DEFAULT_REPORT_CHANNEL};
pub use source::SpendSource;
pub use types::{BudgetModel, BudgetPeriod, BudgetSummary, BurnForecast, SpendPeriod};
