//! Ledger entry domain types.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type of ledger entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (money leaving the account).
    #[default]
    Debit,
    /// Credit entry (money arriving in the account).
    Credit,
}

/// A single bookkeeping record as supplied by the caller.
///
/// Text fields are kept exactly as received so that audit messages and
/// duplicate keys reproduce the caller's formatting. Missing text fields
/// deserialize as empty strings; the verifier reports them rather than the
/// deserializer rejecting the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    #[serde(default)]
    pub id: String,
    /// ISO 8601 timestamp of the entry.
    #[serde(default)]
    pub timestamp: String,
    /// The account affected by this entry.
    #[serde(default)]
    pub account: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Decimal amount encoded as text (e.g. `"125.40"`).
    #[serde(default)]
    pub amount: String,
    /// ISO 4217 currency code. An empty string counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Whether this is a debit or credit.
    #[serde(default, alias = "entry_type")]
    pub entry_type: EntryType,
    /// Optional category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional tag set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Optional string metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl LedgerEntry {
    /// Parses the text amount into a `Decimal`.
    ///
    /// Accepts plain decimal notation and scientific notation (`"1.5e3"`).
    /// Returns `None` when the text is not a number.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }

    /// Returns the currency code if one is present and non-empty.
    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.currency.as_deref().filter(|code| !code.is_empty())
    }

    /// Returns the signed amount (positive for credit, negative for debit).
    #[must_use]
    pub fn signed_amount(&self) -> Option<Decimal> {
        self.parsed_amount().map(|amount| match self.entry_type {
            EntryType::Credit => amount,
            EntryType::Debit => -amount,
        })
    }
}

/// Parses decimal text the way every finpack input path does.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
