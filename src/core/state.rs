//! Converter form state
//!
//! Holds the selected category, the two selected units and the amount.
//! Both units always belong to the selected category's list; every setter
//! keeps that true. The result string is derived from the state on demand,
//! so callers recompute it after each mutation.

use crate::core::features::unit_converter::{
    category_by_id, convert_within_category, default_units, format_measurement, list_units,
    parse_amount, unit_by_id, Category, FormatOptions, Unit,
};
use crate::shared::error::{ConverterError, ConverterResult};
use crate::shared::events::ConverterEvent;
use crate::shared::settings::ConverterSettings;
use crate::shared::types::ConversionStateDTO;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    category: Category,
    from_unit: Unit,
    to_unit: Unit,
    amount: f64,
    format: FormatOptions,
}

impl Default for ConversionState {
    /// Distance, meters to inches, amount 0
    fn default() -> Self {
        Self {
            category: Category::Distance,
            from_unit: Unit::Meters,
            to_unit: Unit::Inches,
            amount: 0.0,
            format: FormatOptions::default(),
        }
    }
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(category: Category) -> Self {
        let (from_unit, to_unit) = default_units(category);
        Self {
            category,
            from_unit,
            to_unit,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &ConverterSettings) -> Self {
        let mut state = if settings.default_category == Category::Distance {
            Self::default()
        } else {
            Self::with_category(settings.default_category)
        };
        state.format = settings.format;
        state
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> Unit {
        self.from_unit
    }

    pub fn to_unit(&self) -> Unit {
        self.to_unit
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn format_options(&self) -> &FormatOptions {
        &self.format
    }

    /// Units the pickers may offer right now
    pub fn available_units(&self) -> &'static [Unit] {
        list_units(self.category)
    }

    /// Change category. Units reset to the new category's defaults.
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        let (from_unit, to_unit) = default_units(category);
        tracing::debug!(
            from = %self.category,
            to = %category,
            "category changed, units reset to {} -> {}",
            from_unit.id(),
            to_unit.id()
        );
        self.category = category;
        self.from_unit = from_unit;
        self.to_unit = to_unit;
    }

    pub fn select_from_unit(&mut self, unit: Unit) -> ConverterResult<()> {
        self.check_selection(unit)?;
        self.from_unit = unit;
        Ok(())
    }

    pub fn select_to_unit(&mut self, unit: Unit) -> ConverterResult<()> {
        self.check_selection(unit)?;
        self.to_unit = unit;
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = if amount.is_finite() { amount } else { 0.0 };
    }

    /// Set the amount from raw field text; unparsable text counts as 0
    pub fn set_amount_text(&mut self, text: &str) {
        self.amount = parse_amount(text);
    }

    /// Converted amount in `to_unit`
    pub fn converted_value(&self) -> f64 {
        convert_within_category(self.amount, self.from_unit, self.to_unit)
    }

    /// Formatted result, e.g. "1,000 meters"
    pub fn result(&self) -> String {
        format_measurement(self.converted_value(), self.to_unit, &self.format)
    }

    /// Apply one user event and return the recomputed result.
    /// A rejected event leaves the state unchanged.
    pub fn apply(&mut self, event: ConverterEvent) -> ConverterResult<String> {
        match event {
            ConverterEvent::AmountChanged(text) => self.set_amount_text(&text),
            ConverterEvent::CategorySelected(id) => self.select_category(category_by_id(&id)?),
            ConverterEvent::FromUnitSelected(id) => self.select_from_unit(unit_by_id(&id)?)?,
            ConverterEvent::ToUnitSelected(id) => self.select_to_unit(unit_by_id(&id)?)?,
            ConverterEvent::UnitsSwapped => self.swap_units(),
        }
        Ok(self.result())
    }

    pub fn to_dto(&self) -> ConversionStateDTO {
        ConversionStateDTO {
            category: self.category.id().to_string(),
            from_unit: self.from_unit.id().to_string(),
            to_unit: self.to_unit.id().to_string(),
            amount: self.amount,
            units: self.available_units().iter().map(|unit| unit.to_dto()).collect(),
            result: self.result(),
        }
    }

    fn check_selection(&self, unit: Unit) -> ConverterResult<()> {
        if list_units(self.category).contains(&unit) {
            return Ok(());
        }
        tracing::warn!(
            unit = unit.id(),
            category = self.category.id(),
            "rejected unit outside the selected category"
        );
        Err(ConverterError::InvalidSelection {
            unit: unit.id().to_string(),
            category: self.category.id().to_string(),
        })
    }
}

/// Start a converter session from the user's settings file
pub fn start_session() -> ConversionState {
    let settings = ConverterSettings::load_or_default();
    let state = ConversionState::from_settings(&settings);
    tracing::debug!(
        category = %state.category(),
        from = state.from_unit().id(),
        to = state.to_unit().id(),
        "converter session started"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assert_units_valid(state: &ConversionState) {
        let units = list_units(state.category());
        assert!(units.contains(&state.from_unit()));
        assert!(units.contains(&state.to_unit()));
    }

    #[test]
    fn test_default_state() {
        let state = ConversionState::new();
        assert_eq!(state.category(), Category::Distance);
        assert_eq!(state.from_unit(), Unit::Meters);
        assert_eq!(state.to_unit(), Unit::Inches);
        assert_eq!(state.result(), "0 inches");
        assert_units_valid(&state);
    }

    #[test]
    fn test_category_switch_resets_units() {
        let mut state = ConversionState::new();
        state.select_from_unit(Unit::Miles).unwrap();
        state.select_to_unit(Unit::Feet).unwrap();

        state.select_category(Category::Mass);
        assert_eq!(state.from_unit(), Unit::Grams);
        assert_eq!(state.to_unit(), Unit::Kilograms);
        assert_units_valid(&state);
    }

    #[test]
    fn test_reselecting_category_keeps_units() {
        let mut state = ConversionState::new();
        state.select_from_unit(Unit::Miles).unwrap();
        state.select_category(Category::Distance);
        assert_eq!(state.from_unit(), Unit::Miles);
        assert_eq!(state.to_unit(), Unit::Inches);
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let mut state = ConversionState::new();
        let before = state.clone();
        let err = state.select_to_unit(Unit::Kelvin).unwrap_err();
        assert_eq!(
            err,
            ConverterError::InvalidSelection {
                unit: "K".to_string(),
                category: "distance".to_string(),
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_invariant_holds_across_every_category() {
        let mut state = ConversionState::new();
        for category in Category::ALL {
            state.select_category(*category);
            assert_units_valid(&state);
            for unit in list_units(*category) {
                state.select_from_unit(*unit).unwrap();
                state.select_to_unit(*unit).unwrap();
                assert_units_valid(&state);
            }
        }
    }

    #[test]
    fn test_result_follows_mutations() {
        let mut state = ConversionState::new();
        state.select_from_unit(Unit::Kilometers).unwrap();
        state.select_to_unit(Unit::Meters).unwrap();
        state.set_amount(1.0);
        assert_eq!(state.result(), "1,000 meters");

        state.swap_units();
        assert_eq!(state.from_unit(), Unit::Meters);
        assert_eq!(state.to_unit(), Unit::Kilometers);
        assert_eq!(state.result(), "0.001 kilometers");
    }

    #[test]
    fn test_amount_text_falls_back_to_zero() {
        let mut state = ConversionState::with_category(Category::Time);
        state.set_amount_text("90");
        assert_eq!(state.result(), "1.5 minutes");
        state.set_amount_text("ninety");
        assert_eq!(state.amount(), 0.0);
        assert_eq!(state.result(), "0 minutes");
        state.set_amount(f64::NAN);
        assert_eq!(state.amount(), 0.0);
    }

    #[test]
    fn test_large_amount_keeps_typed_digits() {
        let mut state = ConversionState::new();
        state.select_to_unit(Unit::Meters).unwrap();
        let result = state
            .apply(ConverterEvent::AmountChanged("100,000,000,000,000,000,000,000".to_string()))
            .unwrap();
        assert_eq!(result, "100,000,000,000,000,000,000,000 meters");
    }

    #[test]
    fn test_trailing_decimal_point_keeps_amount() {
        let mut state = ConversionState::with_category(Category::Time);
        let result = state
            .apply(ConverterEvent::AmountChanged("120.".to_string()))
            .unwrap();
        assert_eq!(result, "2 minutes");
    }

    #[test]
    fn test_apply_events() {
        init_tracing();
        let mut state = ConversionState::new();
        state
            .apply(ConverterEvent::CategorySelected("temperature".to_string()))
            .unwrap();
        state
            .apply(ConverterEvent::ToUnitSelected("K".to_string()))
            .unwrap();
        let result = state
            .apply(ConverterEvent::AmountChanged("100".to_string()))
            .unwrap();
        assert_eq!(result, "373.15 kelvin");

        let result = state.apply(ConverterEvent::UnitsSwapped).unwrap();
        assert_eq!(result, "-173.15 degrees Celsius");
    }

    #[test]
    fn test_apply_rejects_bad_ids() {
        init_tracing();
        let mut state = ConversionState::new();
        assert_eq!(
            state.apply(ConverterEvent::CategorySelected("volume".to_string())),
            Err(ConverterError::UnknownCategory("volume".to_string()))
        );
        assert!(matches!(
            state.apply(ConverterEvent::FromUnitSelected("kg".to_string())),
            Err(ConverterError::InvalidSelection { .. })
        ));
        assert_eq!(state, ConversionState::new());
    }

    #[test]
    fn test_from_settings() {
        let settings = ConverterSettings {
            default_category: Category::Mass,
            format: FormatOptions {
                max_fraction_digits: 1,
                use_grouping: true,
            },
        };
        let mut state = ConversionState::from_settings(&settings);
        assert_eq!(state.category(), Category::Mass);
        assert_eq!(state.from_unit(), Unit::Grams);
        state.set_amount(1234.0);
        assert_eq!(state.result(), "1.2 kilograms");

        let state = ConversionState::from_settings(&ConverterSettings::default());
        assert_eq!(state.to_unit(), Unit::Inches);
    }

    #[test]
    fn test_dto_snapshot() {
        let mut state = ConversionState::with_category(Category::Time);
        state.set_amount(60.0);
        let dto = state.to_dto();
        assert_eq!(dto.category, "time");
        assert_eq!(dto.from_unit, "s");
        assert_eq!(dto.to_unit, "min");
        assert_eq!(dto.result, "1 minute");
        assert_eq!(dto.units.len(), 3);
        assert_eq!(dto.units[2].label, "Hours");
    }
}
