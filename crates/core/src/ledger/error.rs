//! Audit issue types.

use thiserror::Error;

/// Placeholder used in messages when an entry has no id.
pub const UNKNOWN_ENTRY_ID: &str = "unknown";

/// A non-fatal problem found in a single ledger entry.
///
/// Issues accumulate in a [`VerificationReport`](super::VerificationReport);
/// they never abort a verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// One of `id`, `account`, or `description` is empty.
    #[error("Entry {id} missing required fields")]
    MissingRequiredFields {
        /// Entry id, or `"unknown"` when the id itself is missing.
        id: String,
    },

    /// Amount is not a number or is negative.
    #[error("Entry {id} has invalid amount: {amount}")]
    InvalidAmount {
        /// Entry id.
        id: String,
        /// The raw amount text.
        amount: String,
    },

    /// Currency code is present but not three characters long.
    #[error("Entry {id} has invalid currency code: {currency}")]
    InvalidCurrency {
        /// Entry id.
        id: String,
        /// The raw currency text.
        currency: String,
    },
}

impl ValidationIssue {
    /// Returns the machine-readable issue code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields { .. } => "MISSING_REQUIRED_FIELDS",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InvalidCurrency { .. } => "INVALID_CURRENCY",
        }
    }
}
