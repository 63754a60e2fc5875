pub mod types;
pub mod settings;
pub mod error;
pub mod events;


// Re-export ConverterError for convenience
pub use error::{ConverterError, ConverterResult};
