//! Budget data types.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget period classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Monthly budget.
    Monthly,
    /// Quarterly budget.
    Quarterly,
    /// Yearly budget.
    Yearly,
}

/// A budget allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetModel {
    /// Budget ID.
    pub id: String,
    /// Budget name.
    pub name: String,
    /// Budget period.
    pub period: BudgetPeriod,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
    /// Allocated amount.
    pub allocated: Decimal,
    /// Amount spent so far.
    #[serde(default)]
    pub spent: Decimal,
    /// Currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Per-category allocations.
    #[serde(default)]
    pub categories: BTreeMap<String, Decimal>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl BudgetModel {
    /// Allocated minus spent. Negative when overspent.
    ///
    /// Saturates at the decimal range bounds.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.allocated.saturating_sub(self.spent)
    }

    /// Spent as a percentage of allocated, rounded to 2 dp.
    ///
    /// Zero when nothing is allocated. Saturates at the decimal range
    /// bounds when the ratio is too large to represent.
    #[must_use]
    pub fn utilization(&self) -> Decimal {
        if self.allocated.is_zero() {
            return Decimal::ZERO;
        }
        match self
            .spent
            .checked_div(self.allocated)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(percent) => percent.round_dp(2),
            None if self.spent.is_sign_negative() != self.allocated.is_sign_negative() => {
                Decimal::MIN
            }
            None => Decimal::MAX,
        }
    }

    /// Snapshot including derived values, for display or serialization.
    #[must_use]
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            budget: self.clone(),
            remaining: self.remaining(),
            utilization: self.utilization(),
        }
    }
}

/// Budget with its derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The budget itself.
    #[serde(flatten)]
    pub budget: BudgetModel,
    /// Allocated minus spent.
    pub remaining: Decimal,
    /// Utilization percentage.
    pub utilization: Decimal,
}

/// Month-end projection from spend to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnForecast {
    /// Spend so far this month.
    pub current_spend: Decimal,
    /// Spend per elapsed day.
    pub burn_rate: Decimal,
    /// `burn_rate * days_in_month`.
    pub forecast_monthly: Decimal,
    /// Projected spend as a percentage of the budget limit.
    pub percent_of_budget: Decimal,
}

/// Inclusive date range queried from a spend source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendPeriod {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl SpendPeriod {
    /// The `days` days leading up to and including `today`.
    #[must_use]
    pub fn trailing(days: u32, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }
}
