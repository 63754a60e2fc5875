//! Parsing of the amount field and of unit/category identifiers

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::{Category, Unit};
use crate::shared::error::{ConverterError, ConverterResult};

// Optional sign, digits with optional "," grouping, optional "." fraction.
// A trailing "." is allowed after integer digits ("12." while typing "12.5")
static RE_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)$")
        .expect("Failed to compile amount pattern")
});

/// Aliases accepted for each unit, keyed by lowercase spelling
static UNIT_ALIASES: Lazy<HashMap<&'static str, Unit>> = Lazy::new(|| {
    let mut aliases = HashMap::new();
    let table: &[(Unit, &[&'static str])] = &[
        (Unit::Meters, &["m", "meter", "meters", "metre", "metres"]),
        (Unit::Kilometers, &["km", "kilometer", "kilometers", "kilometre", "kilometres"]),
        (Unit::Inches, &["in", "inch", "inches", "\""]),
        (Unit::Miles, &["mi", "mile", "miles"]),
        (Unit::Feet, &["ft", "foot", "feet", "'"]),
        (Unit::Grams, &["g", "gram", "grams"]),
        (Unit::Kilograms, &["kg", "kilogram", "kilograms"]),
        (Unit::Ounces, &["oz", "ounce", "ounces"]),
        (Unit::Pounds, &["lb", "lbs", "pound", "pounds"]),
        (Unit::Celsius, &["c", "°c", "celsius", "degrees celsius"]),
        (Unit::Fahrenheit, &["f", "°f", "fahrenheit", "degrees fahrenheit"]),
        (Unit::Kelvin, &["k", "kelvin", "kelvins"]),
        (Unit::Seconds, &["s", "sec", "secs", "second", "seconds"]),
        (Unit::Minutes, &["min", "mins", "minute", "minutes"]),
        (Unit::Hours, &["h", "hr", "hrs", "hour", "hours"]),
    ];
    for (unit, spellings) in table {
        for spelling in spellings.iter() {
            aliases.insert(*spelling, *unit);
        }
    }
    aliases
});

/// Strict amount parse. Empty input and anything that is not a plain
/// decimal number (optionally grouped with commas) is rejected.
pub fn try_parse_amount(text: &str) -> ConverterResult<f64> {
    let text = text.trim();
    if text.is_empty() || !RE_AMOUNT.is_match(text) {
        return Err(ConverterError::InvalidAmount(text.to_string()));
    }

    let amount = text
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| ConverterError::InvalidAmount(text.to_string()))?;

    if !amount.is_finite() {
        return Err(ConverterError::InvalidAmount(text.to_string()));
    }
    Ok(amount)
}

/// Lenient amount parse used for live input: anything unparsable is 0
pub fn parse_amount(text: &str) -> f64 {
    match try_parse_amount(text) {
        Ok(amount) => amount,
        Err(e) => {
            if !text.trim().is_empty() {
                tracing::debug!("{}; treating amount as 0", e);
            }
            0.0
        }
    }
}

pub fn unit_by_id(id: &str) -> ConverterResult<Unit> {
    let key = id.trim().to_lowercase();
    UNIT_ALIASES
        .get(key.as_str())
        .copied()
        .ok_or_else(|| ConverterError::UnknownUnit(id.to_string()))
}

pub fn category_by_id(id: &str) -> ConverterResult<Category> {
    let key = id.trim().to_lowercase();
    Category::ALL
        .iter()
        .copied()
        .find(|category| category.id() == key)
        .ok_or_else(|| ConverterError::UnknownCategory(id.to_string()))
}
