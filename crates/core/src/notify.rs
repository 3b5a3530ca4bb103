//! Outbound message delivery.
//!
//! Budget reports and cost alerts are posted to chat channels through a
//! caller-supplied [`Notifier`]. The core never talks to a chat service
//! itself.

use thiserror::Error;

/// Delivery failure reported by a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to post to {channel}: {reason}")]
pub struct NotifyError {
    /// Channel the message was addressed to.
    pub channel: String,
    /// Collaborator-supplied reason.
    pub reason: String,
}

impl NotifyError {
    /// Creates a delivery error for `channel`.
    pub fn new(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}

/// Posts a message to a named channel.
pub trait Notifier {
    /// Posts `message` to `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    fn post_message(&self, channel: &str, message: &str) -> Result<(), NotifyError>;
}
