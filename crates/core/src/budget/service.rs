//! Burn-rate forecasting and weekly spend reports.

use chrono::NaiveDate;
use finpack_shared::group_thousands;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::error::BudgetError;
use super::source::SpendSource;
use super::types::{BurnForecast, SpendPeriod};
use crate::ledger::entry::parse_decimal;
use crate::notify::Notifier;

/// Channel that receives weekly reports unless configured otherwise.
pub const DEFAULT_REPORT_CHANNEL: &str = "#finops";

/// Forecasts monthly spend from month-to-date burn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnRateForecaster {
    /// Monthly budget limit. Zero disables the percent-of-budget figure.
    pub budget_limit: Decimal,
    /// Channel that receives weekly reports.
    pub channel: String,
}

impl BurnRateForecaster {
    /// Creates a forecaster posting to [`DEFAULT_REPORT_CHANNEL`].
    #[must_use]
    pub fn new(budget_limit: Decimal) -> Self {
        Self {
            budget_limit,
            channel: DEFAULT_REPORT_CHANNEL.to_string(),
        }
    }

    /// Sets the report channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Projects month-end spend from the spend so far.
    ///
    /// `burn_rate = current_spend / days_elapsed`,
    /// `forecast_monthly = burn_rate * days_in_month`, and
    /// `percent_of_budget = forecast_monthly / budget_limit * 100`
    /// (zero when the limit is zero).
    ///
    /// # Errors
    ///
    /// Returns `InvalidDayCount` if either day count is zero.
    pub fn forecast(
        &self,
        current_spend: Decimal,
        days_elapsed: u32,
        days_in_month: u32,
    ) -> Result<BurnForecast, BudgetError> {
        if days_elapsed == 0 || days_in_month == 0 {
            return Err(BudgetError::InvalidDayCount);
        }

        let burn_rate = current_spend
            .checked_div(Decimal::from(days_elapsed))
            .ok_or(BudgetError::Overflow)?;
        let forecast_monthly = burn_rate
            .checked_mul(Decimal::from(days_in_month))
            .ok_or(BudgetError::Overflow)?;
        let percent_of_budget = if self.budget_limit.is_zero() {
            Decimal::ZERO
        } else {
            forecast_monthly
                .checked_div(self.budget_limit)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(BudgetError::Overflow)?
        };

        Ok(BurnForecast {
            current_spend,
            burn_rate,
            forecast_monthly,
            percent_of_budget,
        })
    }

    /// Fetches month-to-date spend for `period`.
    ///
    /// A missing or unparseable amount counts as zero.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    pub fn month_to_date_spend<S>(
        source: &S,
        period: &SpendPeriod,
    ) -> Result<Decimal, BudgetError>
    where
        S: SpendSource + ?Sized,
    {
        let Some(raw) = source.unblended_cost(period)? else {
            warn!(start = %period.start, end = %period.end, "spend source returned no amount");
            return Ok(Decimal::ZERO);
        };

        Ok(parse_decimal(&raw).unwrap_or_else(|| {
            warn!(amount = %raw, "unparseable spend amount, treating as zero");
            Decimal::ZERO
        }))
    }

    /// Builds the weekly closeout report and posts it if a notifier is given.
    ///
    /// Spend is fetched for the `days_elapsed` days ending on `today`.
    ///
    /// # Errors
    ///
    /// Returns source, forecast, and delivery errors.
    pub fn build_weekly_report<S>(
        &self,
        source: &S,
        days_elapsed: u32,
        days_in_month: u32,
        today: NaiveDate,
        notifier: Option<&dyn Notifier>,
    ) -> Result<String, BudgetError>
    where
        S: SpendSource + ?Sized,
    {
        let period = SpendPeriod::trailing(days_elapsed, today);
        let current_spend = Self::month_to_date_spend(source, &period)?;
        let forecast = self.forecast(current_spend, days_elapsed, days_in_month)?;
        let report = Self::render_report(&forecast);

        if let Some(notifier) = notifier {
            notifier.post_message(&self.channel, &report)?;
            info!(channel = %self.channel, "posted weekly budget report");
        }

        Ok(report)
    }

    /// Renders the three-line weekly report.
    #[must_use]
    pub fn render_report(forecast: &BurnForecast) -> String {
        format!(
            "[finance-budgeteer] Week closeout — MTD spend: ${}\n\
             Daily burn: ${}\n\
             Projected month-end: ${} ({}% of budget)",
            group_thousands(forecast.current_spend, 2),
            group_thousands(forecast.burn_rate, 2),
            group_thousands(forecast.forecast_monthly, 2),
            group_thousands(forecast.percent_of_budget, 1),
        )
    }
}
