//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `compute(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`shipping`] - Freight cost and container packing for one item type

pub mod shipping;

// Re-export commonly used types
pub use shipping::{compute, Amount, ScenarioInput, ScenarioResult};
