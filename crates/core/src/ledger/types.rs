//! Audit result types.

use serde::{Deserialize, Serialize};

/// Outcome of verifying a batch of ledger entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True iff no issues were recorded.
    pub passed: bool,
    /// One message per failing entry, in input order.
    pub issues: Vec<String>,
    /// Number of entries that passed every check.
    pub verified: usize,
}
