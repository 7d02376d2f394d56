//! Physical quantities used by the shipment model
//!
//! Weights and lengths keep the unit they were created with and convert on
//! demand. Carriers each want their own unit (pounds, ounces, inches), so the
//! conversions return plain `Decimal` values that the request builders round
//! as the carrier requires.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

// ============================================================================
// Weight
// ============================================================================

/// Unit of a [`Weight`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Ounce,
    #[default]
    Pound,
}

impl WeightUnit {
    fn grams_per_unit(self) -> Decimal {
        match self {
            WeightUnit::Gram => Decimal::ONE,
            WeightUnit::Kilogram => Decimal::new(1000, 0),
            WeightUnit::Ounce => Decimal::new(28_349_523_125, 9),
            WeightUnit::Pound => Decimal::new(45_359_237, 5),
        }
    }
}

/// A mass with its unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weight {
    pub value: Decimal,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: impl Into<Decimal>, unit: WeightUnit) -> Self {
        Weight { value: value.into(), unit }
    }

    pub fn pounds(value: impl Into<Decimal>) -> Self {
        Self::new(value, WeightUnit::Pound)
    }

    pub fn ounces(value: impl Into<Decimal>) -> Self {
        Self::new(value, WeightUnit::Ounce)
    }

    pub fn grams(value: impl Into<Decimal>) -> Self {
        Self::new(value, WeightUnit::Gram)
    }

    pub fn zero() -> Self {
        Self::pounds(Decimal::ZERO)
    }

    /// Convert to another unit
    pub fn convert_to(&self, unit: WeightUnit) -> Weight {
        if self.unit == unit {
            return *self;
        }
        let grams = self.value * self.unit.grams_per_unit();
        Weight {
            value: grams / unit.grams_per_unit(),
            unit,
        }
    }

    pub fn to_grams(&self) -> Decimal {
        self.convert_to(WeightUnit::Gram).value
    }

    pub fn to_ounces(&self) -> Decimal {
        self.convert_to(WeightUnit::Ounce).value
    }

    pub fn to_pounds(&self) -> Decimal {
        self.convert_to(WeightUnit::Pound).value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl Add for Weight {
    type Output = Weight;

    /// The sum is expressed in the left-hand unit
    fn add(self, rhs: Weight) -> Weight {
        Weight {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::zero(), |acc, w| acc + w)
    }
}

// ============================================================================
// Length
// ============================================================================

/// Unit of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    #[default]
    Inch,
    Foot,
}

impl LengthUnit {
    fn millimeters_per_unit(self) -> Decimal {
        match self {
            LengthUnit::Millimeter => Decimal::ONE,
            LengthUnit::Centimeter => Decimal::TEN,
            LengthUnit::Meter => Decimal::new(1000, 0),
            LengthUnit::Inch => Decimal::new(254, 1),
            LengthUnit::Foot => Decimal::new(3048, 1),
        }
    }
}

/// A distance with its unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Length {
    pub value: Decimal,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: impl Into<Decimal>, unit: LengthUnit) -> Self {
        Length { value: value.into(), unit }
    }

    pub fn inches(value: impl Into<Decimal>) -> Self {
        Self::new(value, LengthUnit::Inch)
    }

    pub fn centimeters(value: impl Into<Decimal>) -> Self {
        Self::new(value, LengthUnit::Centimeter)
    }

    pub fn convert_to(&self, unit: LengthUnit) -> Length {
        if self.unit == unit {
            return *self;
        }
        let millimeters = self.value * self.unit.millimeters_per_unit();
        Length {
            value: millimeters / unit.millimeters_per_unit(),
            unit,
        }
    }

    pub fn to_inches(&self) -> Decimal {
        self.convert_to(LengthUnit::Inch).value
    }

    pub fn to_centimeters(&self) -> Decimal {
        self.convert_to(LengthUnit::Centimeter).value
    }
}

/// Outer dimensions of a box, pallet or item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

impl Dimensions {
    pub fn new(length: Length, width: Length, height: Length) -> Self {
        Dimensions { length, width, height }
    }

    /// Convenience constructor for inch dimensions
    pub fn inches(
        length: impl Into<Decimal>,
        width: impl Into<Decimal>,
        height: impl Into<Decimal>,
    ) -> Self {
        Dimensions {
            length: Length::inches(length),
            width: Length::inches(width),
            height: Length::inches(height),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.length.value.is_zero() && self.width.value.is_zero() && self.height.value.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pound_to_ounces() {
        assert_eq!(Weight::pounds(2).to_ounces(), Decimal::from(32));
    }

    #[test]
    fn test_ounces_to_pounds() {
        assert_eq!(Weight::ounces(8).to_pounds(), Decimal::new(5, 1));
    }

    #[test]
    fn test_kilogram_to_grams() {
        let weight = Weight::new(Decimal::new(15, 1), WeightUnit::Kilogram);
        assert_eq!(weight.to_grams(), Decimal::from(1500));
    }

    #[test]
    fn test_weight_sum_keeps_left_unit() {
        let total: Weight = vec![Weight::pounds(1), Weight::ounces(8)].into_iter().sum();
        assert_eq!(total.unit, WeightUnit::Pound);
        assert_eq!(total.value, Decimal::new(15, 1));
    }

    #[test]
    fn test_length_conversion() {
        assert_eq!(Length::centimeters(Decimal::new(254, 1)).to_inches(), Decimal::from(10));
        assert_eq!(Length::new(1, LengthUnit::Foot).to_inches(), Decimal::from(12));
    }
}
