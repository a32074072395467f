//! # Shipping Calculation
//!
//! Converts an item's dimensions and a shipment quantity into freight cost
//! and container packing figures.
//!
//! ## Assumptions
//!
//! - Items are rectangular boxes measured in inches
//! - Freight is quoted as a flat cost for a fixed volume (CBM)
//! - Freight scales linearly with volume, there is no minimum charge
//! - Packing is volumetric only: `floor(container / item)` items per container
//! - Amounts are computed in the source currency and converted with a
//!   single multiplicative exchange rate
//!
//! ## Example
//!
//! ```rust
//! use ship_core::calculations::shipping::{compute, ScenarioInput};
//!
//! let input = ScenarioInput::default().with_quantity(60);
//! let result = compute(&input).unwrap();
//!
//! assert_eq!(result.items_per_container, 48);
//! assert_eq!(result.full_containers, 1);
//! assert_eq!(result.leftover_items, 12);
//! assert!(result.capacity_exceeded);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{CubicInches, CubicMeters, Inches};

/// Input parameters for one shipping scenario.
///
/// ## JSON Example
///
/// ```json
/// {
///   "exchange_rate": 42.0,
///   "freight_cost": 769.0,
///   "freight_coverage_cbm": 5.0,
///   "container_cbm": 5.0,
///   "length_in": 10.0,
///   "width_in": 25.0,
///   "height_in": 25.0,
///   "quantity": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Target-currency units per one source-currency unit
    pub exchange_rate: f64,

    /// Source-currency cost of the reference freight shipment
    pub freight_cost: f64,

    /// Volume (CBM) that `freight_cost` pays for
    pub freight_coverage_cbm: f64,

    /// Usable volume of one container (CBM)
    pub container_cbm: f64,

    /// Item length in inches
    pub length_in: f64,

    /// Item width in inches
    pub width_in: f64,

    /// Item height in inches
    pub height_in: f64,

    /// Number of items to ship
    pub quantity: u32,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        ScenarioInput {
            exchange_rate: 42.0,
            freight_cost: 769.0,
            freight_coverage_cbm: 5.0,
            container_cbm: 5.0,
            length_in: 10.0,
            width_in: 25.0,
            height_in: 25.0,
            quantity: 3,
        }
    }
}

impl ScenarioInput {
    /// Replace the item dimensions (inches).
    pub fn with_dimensions(mut self, length_in: f64, width_in: f64, height_in: f64) -> Self {
        self.length_in = length_in;
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// Replace the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Replace the freight quote (cost for a covered volume).
    pub fn with_freight(mut self, freight_cost: f64, freight_coverage_cbm: f64) -> Self {
        self.freight_cost = freight_cost;
        self.freight_coverage_cbm = freight_coverage_cbm;
        self
    }

    /// Replace the container volume.
    pub fn with_container_cbm(mut self, container_cbm: f64) -> Self {
        self.container_cbm = container_cbm;
        self
    }

    /// Replace the exchange rate.
    pub fn with_exchange_rate(mut self, exchange_rate: f64) -> Self {
        self.exchange_rate = exchange_rate;
        self
    }

    /// Validate input parameters.
    ///
    /// Money fields may be zero, every divisor must be strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("exchange_rate", self.exchange_rate)?;
        non_negative("freight_cost", self.freight_cost)?;
        positive("freight_coverage_cbm", self.freight_coverage_cbm)?;
        positive("container_cbm", self.container_cbm)?;
        positive("length_in", self.length_in)?;
        positive("width_in", self.width_in)?;
        positive("height_in", self.height_in)?;
        if self.quantity < 1 {
            return Err(CalcError::invalid_input(
                "quantity",
                self.quantity.to_string(),
                "Quantity must be at least 1",
            ));
        }
        Ok(())
    }

    /// Volume of one item in cubic meters
    pub fn item_volume(&self) -> CubicMeters {
        CubicInches::from_dimensions(Inches(self.length_in), Inches(self.width_in), Inches(self.height_in)).into()
    }
}

fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite number of zero or more",
        ));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite number greater than zero",
        ));
    }
    Ok(())
}

fn finite_result(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Result overflows, inputs are too large",
        ));
    }
    Ok(())
}

/// A money amount in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Amount in the source currency
    pub source: f64,

    /// Amount converted to the target currency
    pub target: f64,
}

impl Amount {
    /// Convert a source-currency amount with the given exchange rate.
    pub fn convert(source: f64, exchange_rate: f64) -> Self {
        Amount {
            source,
            target: source * exchange_rate,
        }
    }

    fn ensure_finite(&self, field: &str) -> CalcResult<()> {
        finite_result(&format!("{}.source", field), self.source)?;
        finite_result(&format!("{}.target", field), self.target)
    }
}

/// Results from the shipping calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cbm_per_item": 0.1024,
///   "total_cbm": 0.3073,
///   "freight_per_cbm": { "source": 153.8, "target": 6459.6 },
///   "freight_per_item": { "source": 15.75, "target": 661.6 },
///   "total_freight": { "source": 47.26, "target": 1984.9 },
///   "items_per_container": 48,
///   "full_containers": 0,
///   "leftover_items": 3,
///   "capacity_exceeded": false,
///   "container_fill_percent": 6.25,
///   "overflow_items": 0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Volume of one item (CBM)
    pub cbm_per_item: f64,

    /// Volume of the whole shipment (CBM)
    pub total_cbm: f64,

    /// Freight cost per cubic meter
    pub freight_per_cbm: Amount,

    /// Freight cost attributed to one item
    pub freight_per_item: Amount,

    /// Freight cost for the whole shipment
    pub total_freight: Amount,

    /// How many items fit in one container (always at least 1)
    pub items_per_container: u64,

    /// Number of completely filled containers
    pub full_containers: u64,

    /// Items left over after filling `full_containers`
    pub leftover_items: u64,

    /// The quantity is more than one container holds
    pub capacity_exceeded: bool,

    /// Fill level of a single container, capped at 100
    pub container_fill_percent: f64,

    /// Items that do not fit in a single container
    pub overflow_items: u64,
}

impl ScenarioResult {
    /// Containers needed to ship everything, counting a partly filled one.
    pub fn containers_needed(&self) -> u64 {
        self.full_containers + u64::from(self.leftover_items > 0)
    }
}

/// Run the shipping calculation.
///
/// # Arguments
///
/// * `input` - Scenario parameters
///
/// # Returns
///
/// * `Ok(ScenarioResult)` - Every figure of the scenario
/// * `Err(CalcError::InvalidInput)` - A field is negative, zero where it divides, or not finite
/// * `Err(CalcError::ItemDoesNotFit)` - One item is larger than a container
pub fn compute(input: &ScenarioInput) -> CalcResult<ScenarioResult> {
    input.validate()?;

    let cbm_per_item = input.item_volume().value();
    // Tiny dimensions can underflow even when each one is positive
    if !(cbm_per_item.is_finite() && cbm_per_item > 0.0) {
        return Err(CalcError::invalid_input(
            "dimensions",
            format!("{} x {} x {}", input.length_in, input.width_in, input.height_in),
            "Item volume must be greater than zero",
        ));
    }

    let quantity = u64::from(input.quantity);
    let total_cbm = cbm_per_item * input.quantity as f64;

    let freight_per_cbm = Amount::convert(input.freight_cost / input.freight_coverage_cbm, input.exchange_rate);
    let freight_per_item = Amount::convert(cbm_per_item * freight_per_cbm.source, input.exchange_rate);
    let total_freight = Amount::convert(freight_per_cbm.source * total_cbm, input.exchange_rate);

    finite_result("total_cbm", total_cbm)?;
    freight_per_cbm.ensure_finite("freight_per_cbm")?;
    freight_per_item.ensure_finite("freight_per_item")?;
    total_freight.ensure_finite("total_freight")?;

    // Float-to-int casts saturate, so an enormous ratio stays well defined
    let items_per_container = (input.container_cbm / cbm_per_item).floor() as u64;
    if items_per_container == 0 {
        tracing::debug!(cbm_per_item, container_cbm = input.container_cbm, "item larger than container");
        return Err(CalcError::item_does_not_fit(cbm_per_item, input.container_cbm));
    }

    let full_containers = quantity / items_per_container;
    let leftover_items = quantity % items_per_container;
    let capacity_exceeded = quantity > items_per_container;
    let container_fill_percent = (quantity as f64 / items_per_container as f64).min(1.0) * 100.0;
    let overflow_items = quantity.saturating_sub(items_per_container);

    Ok(ScenarioResult {
        cbm_per_item,
        total_cbm,
        freight_per_cbm,
        freight_per_item,
        total_freight,
        items_per_container,
        full_containers,
        leftover_items,
        capacity_exceeded,
        container_fill_percent,
        overflow_items,
    })
}
