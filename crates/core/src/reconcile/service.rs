//! Reconciliation service.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::ReconcileError;
use super::source::TransactionSource;
use super::types::ReconciliationReport;
use crate::ledger::EntryType;

/// Absolute variance below which an account counts as balanced (one cent).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Service for reconciling account activity.
pub struct ReconcileService;

impl ReconcileService {
    /// Reconciles an account's transactions against an expected balance.
    ///
    /// The calculated balance starts at zero; credits add and debits
    /// subtract. The account is balanced when `|expected - calculated|`
    /// is below [`BALANCE_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` if `start` is after `end`
    /// - `InvalidAmount` if a transaction amount is not a number
    /// - `Overflow` if the balance or variance exceeds the decimal range
    /// - any error returned by the source
    pub fn reconcile_account<S>(
        source: &S,
        account: &str,
        expected_balance: Decimal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ReconciliationReport, ReconcileError>
    where
        S: TransactionSource + ?Sized,
    {
        if start > end {
            return Err(ReconcileError::InvalidPeriod { start, end });
        }

        let transactions = source.transactions(account, start, end)?;

        let mut calculated_balance = Decimal::ZERO;
        for txn in &transactions {
            let amount = txn
                .parsed_amount()
                .ok_or_else(|| ReconcileError::InvalidAmount {
                    id: txn.id.clone(),
                    amount: txn.amount.clone(),
                })?;
            let next = match txn.entry_type {
                EntryType::Credit => calculated_balance.checked_add(amount),
                EntryType::Debit => calculated_balance.checked_sub(amount),
            };
            calculated_balance = next.ok_or_else(|| ReconcileError::Overflow(account.to_string()))?;
            debug!(id = %txn.id, %amount, balance = %calculated_balance, "applied transaction");
        }

        let variance = expected_balance
            .checked_sub(calculated_balance)
            .ok_or_else(|| ReconcileError::Overflow(account.to_string()))?;
        let is_balanced = variance.abs() < BALANCE_TOLERANCE;

        info!(
            account,
            %expected_balance,
            %calculated_balance,
            %variance,
            is_balanced,
            transactions = transactions.len(),
            "reconciled account"
        );

        Ok(ReconciliationReport {
            account: account.to_string(),
            period_start: start,
            period_end: end,
            expected_balance,
            calculated_balance,
            variance,
            is_balanced,
            transaction_count: transactions.len(),
            reconciled_at: Utc::now(),
        })
    }
}
