//! Property-based tests for the moving-average forecaster.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ForecastError;
use super::service::ForecastService;
use super::types::{TimeSeriesPoint, Trend};

/// Strategy to generate a series of positive cent amounts.
fn cents_series(min_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..10_000_000i64, min_len..20)
}

fn to_points(cents: &[i64]) -> Vec<TimeSeriesPoint> {
    cents
        .iter()
        .enumerate()
        .map(|(i, c)| TimeSeriesPoint::new(format!("t{i}"), Decimal::new(*c, 2).to_string()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Predicted value is the rounded mean of the last `window` points.
    #[test]
    fn prop_predicted_is_window_mean(
        cents in cents_series(1),
        window_seed in 1usize..20,
    ) {
        let window = 1 + window_seed % cents.len();
        let data = to_points(&cents);

        let result = ForecastService::simple_moving_average(&data, window).unwrap();

        let tail = &cents[cents.len() - window..];
        let sum: Decimal = tail.iter().map(|c| Decimal::new(*c, 2)).sum();
        let expected = (sum / Decimal::from(window))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        prop_assert_eq!(result.predicted, expected);
        prop_assert_eq!(result.predicted.scale(), 2);
        prop_assert_eq!(result.factors, vec!["moving_average".to_string(), format!("window_{window}")]);
    }

    /// Fewer points than the window always fails and never yields a result.
    #[test]
    fn prop_short_series_rejected(
        cents in prop::collection::vec(1i64..1_000_000i64, 0..10),
        extra in 1usize..5,
    ) {
        let window = cents.len() + extra;
        let result = ForecastService::simple_moving_average(&to_points(&cents), window);
        prop_assert_eq!(
            result,
            Err(ForecastError::InsufficientData { required: window, available: cents.len() })
        );
    }

    /// Trend depends only on the last two points.
    #[test]
    fn prop_trend_ignores_history(
        history in prop::collection::vec(1i64..10_000_000i64, 0..10),
        tail in cents_series(2),
    ) {
        let last_two = &tail[tail.len() - 2..];
        let mut combined = history;
        combined.extend_from_slice(last_two);

        prop_assert_eq!(
            ForecastService::detect_trend(&to_points(&combined)),
            ForecastService::detect_trend(&to_points(last_two))
        );
    }

    /// A constant series is always stable.
    #[test]
    fn prop_constant_series_stable(value in 0i64..10_000_000i64, len in 0usize..10) {
        let cents = vec![value; len];
        prop_assert_eq!(ForecastService::detect_trend(&to_points(&cents)), Ok(Trend::Stable));
    }
}
