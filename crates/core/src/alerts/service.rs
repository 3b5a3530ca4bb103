//! Cost watcher service.

use std::sync::atomic::{AtomicBool, Ordering};

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use super::error::AlertError;
use super::types::{SpendEvent, SpendStream};
use crate::notify::Notifier;

/// Channel that receives alerts unless configured otherwise.
pub const DEFAULT_ALERT_CHANNEL: &str = "#finops-alerts";

/// Posts an alert for every spend event at or above a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostWatcher {
    /// Channel alerts are posted to.
    pub channel: String,
    /// Inclusive alerting threshold.
    pub threshold: Decimal,
}

impl CostWatcher {
    /// Creates a watcher.
    pub fn new(channel: impl Into<String>, threshold: Decimal) -> Self {
        Self {
            channel: channel.into(),
            threshold,
        }
    }

    /// Consumes `stream` until it ends, posting alerts through `notifier`.
    ///
    /// `cancel` is checked before each pull. Returns the number of alerts
    /// posted once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// - `Cancelled` once `cancel` is set
    /// - any stream or delivery error, which stops the watcher
    pub fn stream_alerts<S>(
        &self,
        stream: &mut S,
        notifier: &dyn Notifier,
        cancel: &AtomicBool,
    ) -> Result<usize, AlertError>
    where
        S: SpendStream + ?Sized,
    {
        let mut posted = 0;
        loop {
            if cancel.load(Ordering::Relaxed) {
                info!(posted, "cost watcher cancelled");
                return Err(AlertError::Cancelled);
            }

            let Some(event) = stream.next_event()? else {
                info!(posted, "spend stream exhausted");
                return Ok(posted);
            };

            if event.cost < self.threshold {
                debug!(service = %event.service, cost = %event.cost, "below threshold");
                continue;
            }

            notifier.post_message(&self.channel, &Self::alert_message(&event))?;
            posted += 1;
        }
    }

    /// Renders the alert text for an event.
    #[must_use]
    pub fn alert_message(event: &SpendEvent) -> String {
        let mut cost = event
            .cost
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cost.rescale(2);
        format!("[finance-cost-watcher] {} spend at ${cost}", event.service)
    }
}
