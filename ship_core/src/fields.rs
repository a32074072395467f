//! # Form Fields
//!
//! The eight inputs of a scenario as an enumerable set, with the minimum,
//! default and step each one carries on an input form. Front ends use this
//! to read, write and clamp [`ScenarioInput`] values without matching on
//! struct fields themselves.

use serde::{Deserialize, Serialize};

use crate::calculations::ScenarioInput;

/// One editable field of a [`ScenarioInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    ExchangeRate,
    FreightCost,
    FreightCoverageCbm,
    ContainerCbm,
    LengthIn,
    WidthIn,
    HeightIn,
    Quantity,
}

impl InputField {
    /// All fields in form order
    pub const ALL: [InputField; 8] = [
        InputField::ExchangeRate,
        InputField::FreightCost,
        InputField::FreightCoverageCbm,
        InputField::ContainerCbm,
        InputField::LengthIn,
        InputField::WidthIn,
        InputField::HeightIn,
        InputField::Quantity,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            InputField::ExchangeRate => "Exchange rate (1 source → target)",
            InputField::FreightCost => "Freight amount (source)",
            InputField::FreightCoverageCbm => "Freight covers (CBM)",
            InputField::ContainerCbm => "Container volume (CBM)",
            InputField::LengthIn => "Item length (in)",
            InputField::WidthIn => "Item width (in)",
            InputField::HeightIn => "Item height (in)",
            InputField::Quantity => "Quantity to ship",
        }
    }

    /// Smallest value the form accepts
    pub fn minimum(&self) -> f64 {
        match self {
            InputField::ExchangeRate | InputField::FreightCost => 0.0,
            InputField::Quantity => 1.0,
            _ => 0.1,
        }
    }

    /// Increment used by step controls
    pub fn step(&self) -> f64 {
        match self {
            InputField::FreightCost => 10.0,
            InputField::Quantity => 1.0,
            _ => 0.5,
        }
    }

    /// Whether the field only takes whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(self, InputField::Quantity)
    }

    /// Clamp a raw value to what this field accepts.
    ///
    /// Non-finite values fall back to the minimum. Integer fields are
    /// truncated toward zero before clamping.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.minimum();
        }
        if self.is_integer() {
            value.trunc().clamp(self.minimum(), u32::MAX as f64)
        } else {
            value.max(self.minimum())
        }
    }

    /// Read this field from an input
    pub fn get(&self, input: &ScenarioInput) -> f64 {
        match self {
            InputField::ExchangeRate => input.exchange_rate,
            InputField::FreightCost => input.freight_cost,
            InputField::FreightCoverageCbm => input.freight_coverage_cbm,
            InputField::ContainerCbm => input.container_cbm,
            InputField::LengthIn => input.length_in,
            InputField::WidthIn => input.width_in,
            InputField::HeightIn => input.height_in,
            InputField::Quantity => input.quantity as f64,
        }
    }

    /// Write this field on an input, clamped. Returns the value stored.
    pub fn set(&self, input: &mut ScenarioInput, value: f64) -> f64 {
        let value = self.clamp(value);
        match self {
            InputField::ExchangeRate => input.exchange_rate = value,
            InputField::FreightCost => input.freight_cost = value,
            InputField::FreightCoverageCbm => input.freight_coverage_cbm = value,
            InputField::ContainerCbm => input.container_cbm = value,
            InputField::LengthIn => input.length_in = value,
            InputField::WidthIn => input.width_in = value,
            InputField::HeightIn => input.height_in = value,
            InputField::Quantity => input.quantity = value as u32,
        }
        value
    }

    /// Format a value the way the form shows it
    pub fn display_value(&self, value: f64) -> String {
        if self.is_integer() {
            format!("{}", value as u64)
        } else {
            format!("{:.2}", value)
        }
    }

    /// Next field in form order, wrapping around
    pub fn next(&self) -> InputField {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in form order, wrapping around
    pub fn previous(&self) -> InputField {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in [`InputField::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}
