//! Moving-average forecaster with a two-point trend heuristic.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::error::ForecastError;
use super::types::{ForecastResult, TimeSeriesPoint, Trend};
use crate::ledger::entry::parse_decimal;

/// Window used when the caller does not choose one.
pub const DEFAULT_WINDOW: usize = 3;

/// Relative change (5%) beyond which a trend is `Up` or `Down`.
pub const TREND_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Fixed confidence reported with every forecast.
const CONFIDENCE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Decimal places of the predicted value.
const PREDICTED_SCALE: u32 = 2;

/// Forecast service.
pub struct ForecastService;

impl ForecastService {
    /// Forecasts the next value as the mean of the last `window` points.
    ///
    /// The mean is rounded half away from zero to two decimal places.
    /// Confidence is the constant 0.7 and factors are
    /// `["moving_average", "window_{window}"]`.
    ///
    /// # Errors
    ///
    /// - `InvalidWindow` if `window` is zero
    /// - `InsufficientData` if `data` has fewer than `window` points
    /// - `InvalidValue` if a point used by the average or the trend is not a number
    pub fn simple_moving_average(
        data: &[TimeSeriesPoint],
        window: usize,
    ) -> Result<ForecastResult, ForecastError> {
        if window == 0 {
            return Err(ForecastError::InvalidWindow);
        }
        if data.len() < window {
            return Err(ForecastError::InsufficientData {
                required: window,
                available: data.len(),
            });
        }

        let recent = &data[data.len() - window..];
        let mut sum = Decimal::ZERO;
        for point in recent {
            sum = sum
                .checked_add(Self::parse_value(point)?)
                .ok_or(ForecastError::Overflow)?;
        }

        let average = sum
            .checked_div(Decimal::from(window))
            .ok_or(ForecastError::Overflow)?;
        let mut predicted =
            average.round_dp_with_strategy(PREDICTED_SCALE, RoundingStrategy::MidpointAwayFromZero);
        predicted.rescale(PREDICTED_SCALE);

        let trend = Self::detect_trend(data)?;

        debug!(
            points = data.len(),
            window,
            %predicted,
            ?trend,
            "computed moving average forecast"
        );

        Ok(ForecastResult {
            period: "next".to_string(),
            predicted,
            confidence: CONFIDENCE,
            trend,
            factors: vec!["moving_average".to_string(), format!("window_{window}")],
        })
    }

    /// Classifies the movement between the last two points.
    ///
    /// `change = (last - previous) / previous`; above 5% is `Up`, below -5%
    /// is `Down`, anything else is `Stable`. Fewer than two points is
    /// `Stable`. When `previous` is zero the sign of `last` decides:
    /// positive is `Up`, negative is `Down`, zero is `Stable`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if either of the last two values is not a number.
    pub fn detect_trend(data: &[TimeSeriesPoint]) -> Result<Trend, ForecastError> {
        let [.., previous, last] = data else {
            return Ok(Trend::Stable);
        };

        let previous = Self::parse_value(previous)?;
        let last = Self::parse_value(last)?;

        if previous.is_zero() {
            return Ok(match last.cmp(&Decimal::ZERO) {
                Ordering::Greater => Trend::Up,
                Ordering::Less => Trend::Down,
                Ordering::Equal => Trend::Stable,
            });
        }

        let change = last
            .checked_sub(previous)
            .and_then(|delta| delta.checked_div(previous))
            .ok_or(ForecastError::Overflow)?;

        Ok(if change > TREND_THRESHOLD {
            Trend::Up
        } else if change < -TREND_THRESHOLD {
            Trend::Down
        } else {
            Trend::Stable
        })
    }

    fn parse_value(point: &TimeSeriesPoint) -> Result<Decimal, ForecastError> {
        parse_decimal(&point.value).ok_or_else(|| ForecastError::InvalidValue {
            timestamp: point.timestamp.clone(),
            value: point.value.clone(),
        })
    }
}
