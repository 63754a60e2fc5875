use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
}

// Unit Data Transfer Object for the pickers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
pub struct UnitDTO {
    pub id: String,       // Unit id (e.g., "m", "kg")
    pub label: String,    // Picker label (e.g., "Meters", "Degrees Celsius")
    pub category: String, // Category id (e.g., "distance")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
pub struct CategoryDTO {
    pub id: String,
    pub title: String,
    pub units: Vec<UnitDTO>,
}

/// Snapshot of the converter form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export_to = "bindings.ts")]
pub struct ConversionStateDTO {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
    pub units: Vec<UnitDTO>,
    pub result: String,
}
