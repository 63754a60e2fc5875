//! Conversion rules between a unit and its category's base unit
//!
//! Linear units only scale (`base = value * factor`). Affine units also
//! shift (`base = value * factor + offset`), which temperature needs.
//! Both variants sit behind one trait and are dispatched statically.

use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub trait ConversionRule {
    /// Express `value` in the category's base unit
    fn to_base(&self, value: f64) -> f64;

    /// Express a base-unit `value` in this unit
    fn from_base(&self, value: f64) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub factor: f64,
}

impl ConversionRule for Linear {
    fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub factor: f64,
    pub offset: f64,
}

impl ConversionRule for Affine {
    fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    fn from_base(&self, value: f64) -> f64 {
        (value - self.offset) / self.factor
    }
}

#[enum_dispatch(ConversionRule)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Linear(Linear),
    Affine(Affine),
}

impl Rule {
    pub const fn linear(factor: f64) -> Self {
        Rule::Linear(Linear { factor })
    }

    pub const fn affine(factor: f64, offset: f64) -> Self {
        Rule::Affine(Affine { factor, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scales_both_ways() {
        let km = Rule::linear(1000.0);
        assert_eq!(km.to_base(2.5), 2500.0);
        assert_eq!(km.from_base(2500.0), 2.5);
    }

    #[test]
    fn test_affine_applies_offset() {
        let celsius = Rule::affine(1.0, 273.15);
        assert_eq!(celsius.to_base(0.0), 273.15);
        assert_eq!(celsius.from_base(273.15), 0.0);
    }

    #[test]
    fn test_affine_with_zero_offset_matches_linear() {
        let affine = Rule::affine(60.0, 0.0);
        let linear = Rule::linear(60.0);
        assert_eq!(affine.to_base(3.0), linear.to_base(3.0));
        assert_eq!(affine.from_base(180.0), linear.from_base(180.0));
    }
}
