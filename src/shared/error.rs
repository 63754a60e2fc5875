use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConverterError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Cannot convert between {from} and {to} (incompatible categories)")]
    IncompatibleUnits { from: String, to: String },

    #[error("Unit {unit} is not available for {category}")]
    InvalidSelection { unit: String, category: String },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Settings Error: {0}")]
    Settings(String),

    #[error("I/O Error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::Settings(format!("Serialization error: {}", err))
    }
}

pub type ConverterResult<T> = Result<T, ConverterError>;
