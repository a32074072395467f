//! # Settings
//!
//! Form defaults and currency display, loaded from an optional JSON file.
//! Any key left out of the file keeps its built-in default.
//!
//! ```json
//! {
//!   "defaults": { "exchange_rate": 41.5, "quantity": 10 },
//!   "currencies": {
//!     "source": { "symbol": "$", "code": "CAD" },
//!     "target": { "symbol": "₱" }
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::ScenarioInput;
use crate::errors::{CalcError, CalcResult};
use crate::fields::InputField;
use crate::format::CurrencyPair;

/// File name looked up in the platform config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Values the form starts with and resets to
    pub defaults: FormDefaults,

    /// Display of the source and target currencies
    pub currencies: CurrencyPair,
}

/// Default form values. Mirrors [`ScenarioInput`] but every key is optional in the file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub exchange_rate: f64,
    pub freight_cost: f64,
    pub freight_coverage_cbm: f64,
    pub container_cbm: f64,
    pub length_in: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub quantity: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        ScenarioInput::default().into()
    }
}

impl From<ScenarioInput> for FormDefaults {
    fn from(input: ScenarioInput) -> Self {
        FormDefaults {
            exchange_rate: input.exchange_rate,
            freight_cost: input.freight_cost,
            freight_coverage_cbm: input.freight_coverage_cbm,
            container_cbm: input.container_cbm,
            length_in: input.length_in,
            width_in: input.width_in,
            height_in: input.height_in,
            quantity: input.quantity,
        }
    }
}

impl FormDefaults {
    /// Build a scenario from these defaults, clamped to the form minimums.
    pub fn to_input(&self) -> ScenarioInput {
        let raw = ScenarioInput {
            exchange_rate: self.exchange_rate,
            freight_cost: self.freight_cost,
            freight_coverage_cbm: self.freight_coverage_cbm,
            container_cbm: self.container_cbm,
            length_in: self.length_in,
            width_in: self.width_in,
            height_in: self.height_in,
            quantity: self.quantity,
        };
        let mut input = raw;
        for field in InputField::ALL {
            field.set(&mut input, field.get(&raw));
        }
        input
    }
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from a file if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> CalcResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scenario_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.defaults.to_input(), ScenarioInput::default());
        assert_eq!(settings.currencies, CurrencyPair::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json_str(r#"{ "defaults": { "quantity": 60 } }"#).unwrap();
        let input = settings.defaults.to_input();
        assert_eq!(input.quantity, 60);
        assert_eq!(input.freight_cost, 769.0);
        assert_eq!(settings.currencies.source.symbol, "$");
    }

    #[test]
    fn test_currency_override() {
        let json = r#"{ "currencies": { "source": { "symbol": "$", "code": "CAD" }, "target": { "symbol": "₱" } } }"#;
        let settings = Settings::from_json_str(json).unwrap();
        assert_eq!(settings.currencies.source(10.0), "$10.00 CAD");
    }

    #[test]
    fn test_defaults_are_clamped() {
        let settings = Settings::from_json_str(r#"{ "defaults": { "container_cbm": 0.0, "quantity": 0 } }"#).unwrap();
        let input = settings.defaults.to_input();
        assert_eq!(input.container_cbm, 0.1);
        assert_eq!(input.quantity, 1);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{ "defaults": { "exchange_rate": 41.5 } }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.defaults.exchange_rate, 41.5);
    }
}
