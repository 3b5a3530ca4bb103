//! Business rule validation for ledger entries.

use rust_decimal::Decimal;

use super::entry::LedgerEntry;
use super::error::{UNKNOWN_ENTRY_ID, ValidationIssue};

/// Length of an ISO 4217 currency code.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Validates a single entry.
///
/// Checks run in a fixed order and stop at the first failure:
/// required fields, then amount, then currency.
///
/// # Errors
///
/// Returns the first [`ValidationIssue`] the entry violates.
pub fn verify_entry(entry: &LedgerEntry) -> Result<(), ValidationIssue> {
    if entry.id.is_empty() || entry.account.is_empty() || entry.description.is_empty() {
        let id = if entry.id.is_empty() {
            UNKNOWN_ENTRY_ID.to_string()
        } else {
            entry.id.clone()
        };
        return Err(ValidationIssue::MissingRequiredFields { id });
    }

    match entry.parsed_amount() {
        Some(amount) if amount >= Decimal::ZERO => {}
        _ => {
            return Err(ValidationIssue::InvalidAmount {
                id: entry.id.clone(),
                amount: entry.amount.clone(),
            });
        }
    }

    if let Some(currency) = entry.currency_code()
        && currency.chars().count() != CURRENCY_CODE_LEN
    {
        return Err(ValidationIssue::InvalidCurrency {
            id: entry.id.clone(),
            currency: currency.to_string(),
        });
    }

    Ok(())
}
