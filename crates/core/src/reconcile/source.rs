//! Transaction data access for reconciliation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::error::ReconcileError;
use crate::ledger::LedgerEntry;

/// Supplies an account's transactions for a date range.
///
/// Implemented in-memory for slices of [`LedgerEntry`]; callers backed by a
/// database or remote ledger implement it themselves.
pub trait TransactionSource {
    /// Returns the account's transactions dated within `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transactions cannot be retrieved.
    fn transactions(
        &self,
        account: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LedgerEntry>, ReconcileError>;
}

impl TransactionSource for [LedgerEntry] {
    fn transactions(
        &self,
        account: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LedgerEntry>, ReconcileError> {
        let mut matching = Vec::new();
        for entry in self.iter().filter(|entry| entry.account == account) {
            let date = entry_date(&entry.timestamp).ok_or_else(|| {
                ReconcileError::InvalidTimestamp {
                    id: entry.id.clone(),
                    timestamp: entry.timestamp.clone(),
                }
            })?;
            if (start..=end).contains(&date) {
                matching.push(entry.clone());
            }
        }
        Ok(matching)
    }
}

/// Extracts the calendar date from an ISO 8601 timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`), naive date-times
/// (`2024-01-15T10:00:00`), and plain dates (`2024-01-15`).
pub fn entry_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(timestamp, "%Y-%m-%d"))
        .ok()
}
