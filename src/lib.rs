//! Unit Conversions
//!
//! Converts an amount between two units of the same physical quantity
//! (distance, mass, temperature, time) and renders the result with the
//! unit's long name, e.g. "1,000 meters" or "32 degrees Fahrenheit".
//!
//! The presentation layer drives a [`ConversionState`] with
//! [`ConverterEvent`]s and renders the string each event returns.

pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{
    category_by_id, convert, convert_units, convert_value, convert_with_options, default_units,
    format_measurement, format_number, get_categories, list_units, parse_amount,
    try_parse_amount, unit_by_id, Category, FormatOptions, Unit,
};
pub use crate::core::state::{start_session, ConversionState};
pub use crate::shared::error::{ConverterError, ConverterResult};
pub use crate::shared::events::ConverterEvent;
pub use crate::shared::settings::ConverterSettings;
pub use crate::shared::types::{
    CategoryDTO, ConversionStateDTO, ConvertUnitsRequest, ConvertUnitsResponse, UnitDTO,
};
