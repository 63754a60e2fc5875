//! Long-style measurement formatting
//!
//! Renders `"<number> <unit name>"` the way a measurement reads in prose:
//! "1,000 meters", "1 minute", "32 degrees Fahrenheit". The unit passed in
//! is always the one displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use super::Unit;

/// Number style used when rendering a converted amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
#[serde(default)]
pub struct FormatOptions {
    /// Fraction digits kept after rounding half-to-even
    pub max_fraction_digits: u32,
    /// Insert `,` between every three integer digits
    pub use_grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

// Helper to add thousands separators to a string of digits
fn add_thousands_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Format a number: bounded fraction digits, trailing zeros stripped,
/// optional grouping. Examples: 1000.0 -> "1,000", 12.5 -> "12.5",
/// 373.1500001 -> "373.15".
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }

    // Parse the shortest round-trip text so 1e23 stays 1e23
    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        return format_out_of_range(value, options);
    };

    let mut rounded = decimal
        .round_dp_with_strategy(options.max_fraction_digits, RoundingStrategy::MidpointNearestEven)
        .normalize();
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }

    let text = rounded.abs().to_string();
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut formatted = String::new();
    if rounded.is_sign_negative() {
        formatted.push('-');
    }
    if options.use_grouping {
        formatted.push_str(&add_thousands_separators(integer_part));
    } else {
        formatted.push_str(integer_part);
    }
    if let Some(fraction) = fraction_part {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

// Magnitudes beyond the Decimal range (~7.9e28) are whole numbers; anything
// too small to parse rounds to zero at every supported fraction width
fn format_out_of_range(value: f64, options: &FormatOptions) -> String {
    if value.abs() < 1.0 {
        return "0".to_string();
    }
    let digits = format!("{}", value.abs());
    let digits = if options.use_grouping { add_thousands_separators(&digits) } else { digits };
    if value.is_sign_negative() {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Format a value in `unit` using its long display name
pub fn format_measurement(value: f64, unit: Unit, options: &FormatOptions) -> String {
    let number = format_number(value, options);
    let name = if number.trim_start_matches('-') == "1" {
        unit.singular_name()
    } else {
        unit.plural_name()
    };
    format!("{} {}", number, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, &FormatOptions::default())
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt(1000.0), "1,000");
        assert_eq!(fmt(130000.0), "130,000");
        assert_eq!(fmt(1234567.891), "1,234,567.891");
        assert_eq!(fmt(999.0), "999");
    }

    #[test]
    fn test_fraction_digits_and_trailing_zeros() {
        assert_eq!(fmt(12.5), "12.5");
        assert_eq!(fmt(39.37007874015748), "39.37");
        assert_eq!(fmt(0.0001), "0");
        assert_eq!(fmt(373.15), "373.15");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(fmt(-40.0), "-40");
        assert_eq!(fmt(-1234.5), "-1,234.5");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(fmt(f64::NAN), "NaN");
        assert_eq!(fmt(f64::INFINITY), "∞");
        assert_eq!(fmt(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_large_values_keep_typed_digits() {
        assert_eq!(fmt(1e23), "100,000,000,000,000,000,000,000");
        assert_eq!(fmt(1e28), "10,000,000,000,000,000,000,000,000,000");
        assert_eq!(fmt(1e30), "1,000,000,000,000,000,000,000,000,000,000");
        assert_eq!(fmt(-1e30), "-1,000,000,000,000,000,000,000,000,000,000");
        let ungrouped = FormatOptions {
            max_fraction_digits: 3,
            use_grouping: false,
        };
        assert_eq!(format_number(1e30, &ungrouped), "1000000000000000000000000000000");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(fmt(1.5e-30), "0");
        assert_eq!(fmt(-2.5e-25), "0");
    }

    #[test]
    fn test_options() {
        let options = FormatOptions {
            max_fraction_digits: 1,
            use_grouping: false,
        };
        assert_eq!(format_number(12345.67, &options), "12345.7");
    }

    #[test]
    fn test_measurement_plurals() {
        let options = FormatOptions::default();
        assert_eq!(format_measurement(1.0, Unit::Minutes, &options), "1 minute");
        assert_eq!(format_measurement(0.0, Unit::Meters, &options), "0 meters");
        assert_eq!(format_measurement(2.0, Unit::Feet, &options), "2 feet");
        assert_eq!(format_measurement(-1.0, Unit::Celsius, &options), "-1 degree Celsius");
        assert_eq!(format_measurement(1.0004, Unit::Inches, &options), "1 inch");
        assert_eq!(format_measurement(1.5, Unit::Kelvin, &options), "1.5 kelvin");
    }
}
