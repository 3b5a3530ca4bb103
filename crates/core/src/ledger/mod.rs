//! Ledger entries and audit checks.
//!
//! This module implements the audit side of the finance pack:
//! - Ledger entry records as supplied by callers
//! - Per-entry validation rules (required fields, amount, currency)
//! - Batch verification reports
//! - Duplicate detection within a batch

pub mod entry;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{EntryType, LedgerEntry};
pub use error::ValidationIssue;
pub use service::AuditService;
pub use types::VerificationReport;
pub use validation::verify_entry;
