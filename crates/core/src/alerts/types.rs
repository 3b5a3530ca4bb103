//! Spend event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AlertError;

/// A cost observation for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendEvent {
    /// Service name, e.g. `EC2`.
    pub service: String,
    /// Observed cost.
    pub cost: Decimal,
}

impl SpendEvent {
    /// Creates an event.
    pub fn new(service: impl Into<String>, cost: Decimal) -> Self {
        Self {
            service: service.into(),
            cost,
        }
    }
}

/// Pull-based source of spend events.
pub trait SpendStream {
    /// Returns the next event, or `Ok(None)` once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream could not produce an event.
    fn next_event(&mut self) -> Result<Option<SpendEvent>, AlertError>;
}

impl<I> SpendStream for I
where
    I: Iterator<Item = SpendEvent>,
{
    fn next_event(&mut self) -> Result<Option<SpendEvent>, AlertError> {
        Ok(self.next())
    }
}
