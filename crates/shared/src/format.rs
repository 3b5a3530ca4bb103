//! Display formatting for amounts and percentages.
//!
//! Output follows en-US conventions: comma thousands separators, a dot for
//! the decimal point, and midpoint values rounded away from zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Currency;

/// Rounds to `decimal_places` and renders with thousands separators.
///
/// `group_thousands(dec!(1234567.891), 2)` yields `"1,234,567.89"`.
#[must_use]
pub fn group_thousands(amount: Decimal, decimal_places: u32) -> String {
    let rounded = round_fixed(amount, decimal_places);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats an amount in the given currency.
///
/// Known currencies render with their symbol and minor units
/// (`"$1,234.56"`, `"¥1,235"`). Unknown codes fall back to the uppercase
/// code followed by a space and two decimal places (`"CHF 10.00"`).
#[must_use]
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let (prefix, decimal_places) = match Currency::from_str(currency) {
        Ok(known) => (known.symbol().to_string(), known.minor_units()),
        Err(_) => (format!("{} ", currency.to_uppercase()), 2),
    };

    let body = group_thousands(amount, decimal_places);
    match body.strip_prefix('-') {
        Some(rest) => format!("-{prefix}{rest}"),
        None => format!("{prefix}{body}"),
    }
}

/// Formats a percentage value with a fixed number of decimals: `"12.35%"`.
#[must_use]
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    format!("{}%", round_fixed(value, decimals))
}

fn round_fixed(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 2, "0.00")]
    #[case(dec!(999.999), 2, "1,000.00")]
    #[case(dec!(1234567.891), 2, "1,234,567.89")]
    #[case(dec!(-1234.5), 2, "-1,234.50")]
    #[case(dec!(123456), 0, "123,456")]
    #[case(dec!(-0.001), 2, "0.00")]
    fn test_group_thousands(#[case] amount: Decimal, #[case] dp: u32, #[case] expected: &str) {
        assert_eq!(group_thousands(amount, dp), expected);
    }

    #[test]
    fn test_format_currency_known() {
        assert_eq!(format_currency(dec!(1234.56), "USD"), "$1,234.56");
        assert_eq!(format_currency(dec!(1234.56), "usd"), "$1,234.56");
        assert_eq!(format_currency(dec!(-5), "EUR"), "-€5.00");
        assert_eq!(format_currency(dec!(1234.5), "JPY"), "¥1,235");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(format_currency(dec!(10), "chf"), "CHF 10.00");
        assert_eq!(format_currency(dec!(-2500), "GBP"), "-GBP 2,500.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(12.345), 2), "12.35%");
        assert_eq!(format_percentage(dec!(76.5), 1), "76.5%");
        assert_eq!(format_percentage(dec!(50), 0), "50%");
        assert_eq!(format_percentage(dec!(-0.125), 2), "-0.13%");
    }
}
