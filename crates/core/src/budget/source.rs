//! Spend data access for burn-rate forecasting.

use super::error::BudgetError;
use super::types::SpendPeriod;

/// Supplies the unblended cost for a period, as reported by a cost
/// explorer style billing API.
pub trait SpendSource {
    /// Returns the raw unblended cost amount for `period`.
    ///
    /// `Ok(None)` means the source had no figure for the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the source could not be queried.
    fn unblended_cost(&self, period: &SpendPeriod) -> Result<Option<String>, BudgetError>;
}
