//! Threshold alerts over a stream of spend events.

pub mod error;
pub mod service;
pub mod types;

pub use error::AlertError;
pub use service::{CostWatcher, DEFAULT_ALERT_CHANNEL};
pub use types::{SpendEvent, SpendStream};
