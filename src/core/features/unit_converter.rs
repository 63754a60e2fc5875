use crate::shared::error::{ConverterError, ConverterResult};
use crate::shared::types::{CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, UnitDTO};

pub mod formatting;
pub mod parsing;
pub mod rule;

pub use formatting::{format_measurement, format_number, FormatOptions};
pub use parsing::{category_by_id, parse_amount, try_parse_amount, unit_by_id};
pub use rule::{ConversionRule, Rule};

use serde::{Deserialize, Serialize};

// ============================================================================
// Unit Registry
// ============================================================================

/// Physical quantity that decides which units are comparable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Distance,
    Mass,
    Temperature,
    Time,
}

impl Category {
    /// Picker order
    pub const ALL: &'static [Category] = &[
        Category::Distance,
        Category::Mass,
        Category::Temperature,
        Category::Time,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Distance => "distance",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Time => "time",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Distance => "Distance",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meters,
    Kilometers,
    Inches,
    Miles,
    Feet,
    Grams,
    Kilograms,
    Ounces,
    Pounds,
    Celsius,
    Fahrenheit,
    Kelvin,
    Seconds,
    Minutes,
    Hours,
}

/// Static description of a unit
#[derive(Debug, Clone, Copy)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub category: Category,
    pub rule: Rule,
}

const fn def(
    id: &'static str,
    singular: &'static str,
    plural: &'static str,
    category: Category,
    rule: Rule,
) -> UnitDefinition {
    UnitDefinition { id, singular, plural, category, rule }
}

// Base units: meters, kilograms, kelvin, seconds
static METERS: UnitDefinition = def("m", "meter", "meters", Category::Distance, Rule::linear(1.0));
static KILOMETERS: UnitDefinition = def("km", "kilometer", "kilometers", Category::Distance, Rule::linear(1000.0));
static INCHES: UnitDefinition = def("in", "inch", "inches", Category::Distance, Rule::linear(0.0254));
static MILES: UnitDefinition = def("mi", "mile", "miles", Category::Distance, Rule::linear(1609.344));
static FEET: UnitDefinition = def("ft", "foot", "feet", Category::Distance, Rule::linear(0.3048));

static GRAMS: UnitDefinition = def("g", "gram", "grams", Category::Mass, Rule::linear(0.001));
static KILOGRAMS: UnitDefinition = def("kg", "kilogram", "kilograms", Category::Mass, Rule::linear(1.0));
static OUNCES: UnitDefinition = def("oz", "ounce", "ounces", Category::Mass, Rule::linear(0.028349523125));
static POUNDS: UnitDefinition = def("lb", "pound", "pounds", Category::Mass, Rule::linear(0.45359237));

// base_value = value * factor + offset
static CELSIUS: UnitDefinition = def(
    "C", "degree Celsius", "degrees Celsius", Category::Temperature,
    Rule::affine(1.0, 273.15),
);
static FAHRENHEIT: UnitDefinition = def(
    "F", "degree Fahrenheit", "degrees Fahrenheit", Category::Temperature,
    Rule::affine(5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0),
);
static KELVIN: UnitDefinition = def("K", "kelvin", "kelvin", Category::Temperature, Rule::affine(1.0, 0.0));

static SECONDS: UnitDefinition = def("s", "second", "seconds", Category::Time, Rule::linear(1.0));
static MINUTES: UnitDefinition = def("min", "minute", "minutes", Category::Time, Rule::linear(60.0));
static HOURS: UnitDefinition = def("h", "hour", "hours", Category::Time, Rule::linear(3600.0));

const DISTANCE_UNITS: &[Unit] = &[Unit::Meters, Unit::Kilometers, Unit::Inches, Unit::Miles, Unit::Feet];
const MASS_UNITS: &[Unit] = &[Unit::Grams, Unit::Kilograms, Unit::Ounces, Unit::Pounds];
const TEMPERATURE_UNITS: &[Unit] = &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];
const TIME_UNITS: &[Unit] = &[Unit::Seconds, Unit::Minutes, Unit::Hours];

impl Unit {
    pub const ALL: &'static [Unit] = &[
        Unit::Meters,
        Unit::Kilometers,
        Unit::Inches,
        Unit::Miles,
        Unit::Feet,
        Unit::Grams,
        Unit::Kilograms,
        Unit::Ounces,
        Unit::Pounds,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
    ];

    pub fn definition(self) -> &'static UnitDefinition {
        match self {
            Unit::Meters => &METERS,
            Unit::Kilometers => &KILOMETERS,
            Unit::Inches => &INCHES,
            Unit::Miles => &MILES,
            Unit::Feet => &FEET,
            Unit::Grams => &GRAMS,
            Unit::Kilograms => &KILOGRAMS,
            Unit::Ounces => &OUNCES,
            Unit::Pounds => &POUNDS,
            Unit::Celsius => &CELSIUS,
            Unit::Fahrenheit => &FAHRENHEIT,
            Unit::Kelvin => &KELVIN,
            Unit::Seconds => &SECONDS,
            Unit::Minutes => &MINUTES,
            Unit::Hours => &HOURS,
        }
    }

    pub fn id(self) -> &'static str {
        self.definition().id
    }

    pub fn category(self) -> Category {
        self.definition().category
    }

    pub fn singular_name(self) -> &'static str {
        self.definition().singular
    }

    pub fn plural_name(self) -> &'static str {
        self.definition().plural
    }

    pub fn rule(self) -> Rule {
        self.definition().rule
    }

    /// Capitalized plural name, e.g. "Meters" or "Degrees Celsius"
    pub fn picker_label(self) -> String {
        self.plural_name()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_dto(self) -> UnitDTO {
        UnitDTO {
            id: self.id().to_string(),
            label: self.picker_label(),
            category: self.category().id().to_string(),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural_name())
    }
}

// ============================================================================
// Conversion Engine
// ============================================================================

/// Ordered unit list for a category
pub fn list_units(category: Category) -> &'static [Unit] {
    match category {
        Category::Distance => DISTANCE_UNITS,
        Category::Mass => MASS_UNITS,
        Category::Temperature => TEMPERATURE_UNITS,
        Category::Time => TIME_UNITS,
    }
}

/// First two entries of the category's list, used when the category changes
pub fn default_units(category: Category) -> (Unit, Unit) {
    let units = list_units(category);
    (units[0], units[1])
}

/// Convert without a category check. Callers guarantee both units share a category.
pub(crate) fn convert_within_category(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    let base_value = from.rule().to_base(value);
    to.rule().from_base(base_value)
}

/// Convert `amount` expressed in `from` into `to`
pub fn convert_value(amount: f64, from: Unit, to: Unit) -> ConverterResult<f64> {
    if from.category() != to.category() {
        return Err(ConverterError::IncompatibleUnits {
            from: from.id().to_string(),
            to: to.id().to_string(),
        });
    }

    let result = convert_within_category(amount, from, to);
    tracing::debug!(
        amount,
        from = from.id(),
        to = to.id(),
        result,
        "converted value"
    );
    Ok(result)
}

/// Convert and render with the long display name of `to`
pub fn convert(amount: f64, from: Unit, to: Unit) -> ConverterResult<String> {
    convert_with_options(amount, from, to, &FormatOptions::default())
}

pub fn convert_with_options(
    amount: f64,
    from: Unit,
    to: Unit,
    options: &FormatOptions,
) -> ConverterResult<String> {
    let value = convert_value(amount, from, to)?;
    Ok(format_measurement(value, to, options))
}

// ============================================================================
// Request / Response API
// ============================================================================

/// All categories with their unit lists, in picker order
pub fn get_categories() -> Vec<CategoryDTO> {
    Category::ALL
        .iter()
        .map(|category| CategoryDTO {
            id: category.id().to_string(),
            title: category.title().to_string(),
            units: list_units(*category).iter().map(|unit| unit.to_dto()).collect(),
        })
        .collect()
}

/// Convert units addressed by id
pub fn convert_units(request: ConvertUnitsRequest) -> ConverterResult<ConvertUnitsResponse> {
    let from = unit_by_id(&request.from_unit)?;
    let to = unit_by_id(&request.to_unit)?;

    let result = convert_value(request.amount, from, to)?;
    let formatted_result = format_measurement(result, to, &FormatOptions::default());

    Ok(ConvertUnitsResponse {
        result,
        formatted_result,
        from_unit: from.id().to_string(),
        to_unit: to.id().to_string(),
    })
}
