//! Account reconciliation against an expected balance.

pub mod error;
pub mod service;
pub mod source;
pub mod types;

pub use error::ReconcileError;
pub use service::{BALANCE_TOLERANCE, ReconcileService};
pub use source::TransactionSource;
pub use types::ReconciliationReport;
