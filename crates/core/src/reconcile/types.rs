//! Reconciliation result types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of reconciling one account over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Account identifier.
    pub account: String,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Balance the caller expects.
    pub expected_balance: Decimal,
    /// Credits minus debits over the period.
    pub calculated_balance: Decimal,
    /// `expected_balance - calculated_balance`.
    pub variance: Decimal,
    /// True when the absolute variance is below one cent.
    pub is_balanced: bool,
    /// Number of transactions considered.
    pub transaction_count: usize,
    /// When the reconciliation ran.
    pub reconciled_at: DateTime<Utc>,
}
