//! # ship_core - Freight and Container Packing Engine
//!
//! `ship_core` turns an item's dimensions and a shipment quantity into
//! freight cost (in two currencies) and container packing figures. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: [`calculations::compute`] is a pure function
//! - **Explicit state**: history lives in a [`session::Session`], not a global
//! - **Rich Errors**: Structured error types, not just strings
//! - **Presentation as data**: summaries, table rows and cell styles are
//!   plain values a front end renders
//!
//! ## Quick Start
//!
//! ```rust
//! use ship_core::calculations::{compute, ScenarioInput};
//!
//! let input = ScenarioInput::default();
//! let result = compute(&input).unwrap();
//! assert_eq!(result.items_per_container, 48);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Scenario input, result and the `compute` function
//! - [`fields`] - Form field metadata and clamping
//! - [`history`] - Bounded log of saved scenarios
//! - [`session`] - Interactive session state
//! - [`format`] - Currency formatting
//! - [`report`] - Summary text, table rows, chart data
//! - [`style`] - Table cell style descriptors
//! - [`settings`] - User settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic scenario file saves

pub mod calculations;
pub mod errors;
pub mod fields;
pub mod file_io;
pub mod format;
pub mod history;
pub mod report;
pub mod session;
pub mod settings;
pub mod style;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, Amount, ScenarioInput, ScenarioResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_scenario, save_scenario};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use session::Session;
pub use settings::Settings;
