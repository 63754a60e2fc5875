use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One user interaction with the converter form.
/// Unit and category payloads are ids, resolved when the event is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export_to = "events.ts")]
pub enum ConverterEvent {
    /// Raw text of the amount field
    #[serde(rename = "amount://changed")]
    AmountChanged(String),

    #[serde(rename = "category://selected")]
    CategorySelected(String),

    #[serde(rename = "unit://from-selected")]
    FromUnitSelected(String),

    #[serde(rename = "unit://to-selected")]
    ToUnitSelected(String),

    #[serde(rename = "units://swapped")]
    UnitsSwapped,
}
