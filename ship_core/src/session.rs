//! # Session State
//!
//! A [`Session`] is everything one interactive user works with: the form
//! values, the currencies they are shown in, and the history of saved
//! scenarios. It lives as long as the front end keeps it and is never
//! written to disk.
//!
//! ```rust
//! use ship_core::fields::InputField;
//! use ship_core::session::Session;
//! use ship_core::settings::Settings;
//!
//! let mut session = Session::new(Settings::default());
//! session.set_field(InputField::Quantity, 60.0);
//!
//! let result = session.evaluate().unwrap();
//! assert!(result.capacity_exceeded);
//!
//! session.save().unwrap();
//! assert_eq!(session.history().len(), 1);
//! ```

use crate::calculations::{compute, ScenarioInput, ScenarioResult};
use crate::errors::CalcResult;
use crate::fields::InputField;
use crate::format::CurrencyPair;
use crate::history::{HistoryEntry, HistoryLog};
use crate::settings::Settings;

/// Direction for stepping a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Interactive calculator state for one user.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    input: ScenarioInput,
    history: HistoryLog,
}

impl Session {
    /// Start a session with the form set to the configured defaults.
    pub fn new(settings: Settings) -> Self {
        let input = settings.defaults.to_input();
        Session {
            settings,
            input,
            history: HistoryLog::new(),
        }
    }

    /// Current form values
    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }

    /// Replace every form value at once, clamped to the form minimums.
    pub fn set_input(&mut self, input: ScenarioInput) {
        for field in InputField::ALL {
            field.set(&mut self.input, field.get(&input));
        }
    }

    /// Currency display for this session
    pub fn currencies(&self) -> &CurrencyPair {
        &self.settings.currencies
    }

    /// Saved scenarios, oldest first
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Set one field, clamped. Returns the value stored.
    pub fn set_field(&mut self, field: InputField, value: f64) -> f64 {
        field.set(&mut self.input, value)
    }

    /// Move one field by its step size, clamped. Returns the value stored.
    pub fn nudge(&mut self, field: InputField, step: Step) -> f64 {
        let delta = match step {
            Step::Up => field.step(),
            Step::Down => -field.step(),
        };
        let current = field.get(&self.input);
        self.set_field(field, current + delta)
    }

    /// Compute the current scenario.
    pub fn evaluate(&self) -> CalcResult<ScenarioResult> {
        compute(&self.input)
    }

    /// Compute the current scenario and record it in the history.
    ///
    /// A failed computation leaves the history unchanged.
    pub fn save(&mut self) -> CalcResult<HistoryEntry> {
        let result = self.evaluate()?;
        let entry = HistoryEntry::new(self.input, result);
        self.history.append(entry.clone());
        tracing::info!(
            quantity = self.input.quantity,
            total_cbm = result.total_cbm,
            saved = self.history.len(),
            "scenario saved"
        );
        Ok(entry)
    }

    /// Restore the form to the configured defaults. History is kept.
    pub fn reset(&mut self) {
        self.input = self.settings.defaults.to_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn session() -> Session {
        Session::new(Settings::default())
    }

    #[test]
    fn test_starts_with_defaults() {
        let s = session();
        assert_eq!(*s.input(), ScenarioInput::default());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_set_field_clamps() {
        let mut s = session();
        assert_eq!(s.set_field(InputField::ContainerCbm, 0.0), 0.1);
        assert_eq!(s.set_field(InputField::Quantity, -4.0), 1.0);
        assert_eq!(s.input().quantity, 1);
    }

    #[test]
    fn test_nudge() {
        let mut s = session();
        assert_eq!(s.nudge(InputField::Quantity, Step::Up), 4.0);
        assert_eq!(s.nudge(InputField::FreightCost, Step::Down), 759.0);
        s.set_field(InputField::ExchangeRate, 0.2);
        assert_eq!(s.nudge(InputField::ExchangeRate, Step::Down), 0.0);
    }

    #[test]
    fn test_save_appends_snapshot() {
        let mut s = session();
        s.set_field(InputField::Quantity, 60.0);
        let entry = s.save().unwrap();
        assert_eq!(entry.input.quantity, 60);
        assert_eq!(entry.result.full_containers, 1);

        // Later edits don't touch the snapshot
        s.set_field(InputField::Quantity, 5.0);
        assert_eq!(s.history().latest().unwrap().input.quantity, 60);
    }

    #[test]
    fn test_failed_save_leaves_history_alone() {
        let mut s = session();
        s.save().unwrap();
        s.set_field(InputField::LengthIn, 100.0);
        s.set_field(InputField::WidthIn, 100.0);
        s.set_field(InputField::HeightIn, 100.0);

        assert!(matches!(s.save(), Err(CalcError::ItemDoesNotFit { .. })));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_six_saves_keep_last_five() {
        let mut s = session();
        for q in 1..=6 {
            s.set_field(InputField::Quantity, q as f64);
            s.save().unwrap();
        }
        let quantities: Vec<u32> = s.history().all().map(|e| e.input.quantity).collect();
        assert_eq!(quantities, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut s = session();
        s.set_field(InputField::Quantity, 99.0);
        s.save().unwrap();
        s.reset();
        assert_eq!(s.input().quantity, 3);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_set_input_clamps() {
        let mut s = session();
        s.set_input(ScenarioInput::default().with_container_cbm(-2.0));
        assert_eq!(s.input().container_cbm, 0.1);
    }
}
