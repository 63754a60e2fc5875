//! Converter features
//!
//! The unit converter is the only feature. It owns the category table,
//! the conversion rules and the measurement formatter.

pub mod unit_converter;
