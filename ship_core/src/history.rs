//! # Scenario History
//!
//! A bounded, append-only log of saved scenarios. The log keeps the most
//! recent [`HISTORY_CAPACITY`] entries in the order they were saved and
//! drops the oldest one when a new save would exceed the cap.
//!
//! ```rust
//! use ship_core::calculations::{compute, ScenarioInput};
//! use ship_core::history::{HistoryEntry, HistoryLog};
//!
//! let mut log = HistoryLog::new();
//! for quantity in 1..=6 {
//!     let input = ScenarioInput::default().with_quantity(quantity);
//!     let result = compute(&input).unwrap();
//!     log.append(HistoryEntry::new(input, result));
//! }
//!
//! let quantities: Vec<u32> = log.all().map(|e| e.input.quantity).collect();
//! assert_eq!(quantities, vec![2, 3, 4, 5, 6]);
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{ScenarioInput, ScenarioResult};

/// Maximum number of saved scenarios kept
pub const HISTORY_CAPACITY: usize = 5;

/// Snapshot of one scenario, taken when the user saved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Inputs at save time
    pub input: ScenarioInput,

    /// Results computed from `input`
    pub result: ScenarioResult,
}

impl HistoryEntry {
    /// Snapshot an input and its result, stamped with the current time.
    pub fn new(input: ScenarioInput, result: ScenarioResult) -> Self {
        HistoryEntry {
            saved_at: Utc::now(),
            input,
            result,
        }
    }
}

/// Oldest-first log of at most [`HISTORY_CAPACITY`] entries.
///
/// Entries are never edited. Eviction of the oldest entry is the only
/// way one leaves the log.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        HistoryLog {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Add an entry at the end, evicting from the front past the cap.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(saved_at = %evicted.saved_at, "evicted oldest history entry");
            }
        }
    }

    /// All entries, oldest first
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    /// Most recently saved entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute;

    fn entry(quantity: u32) -> HistoryEntry {
        let input = ScenarioInput::default().with_quantity(quantity);
        HistoryEntry::new(input, compute(&input).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.all().count(), 0);
    }

    #[test]
    fn test_keeps_arrival_order_below_cap() {
        let mut log = HistoryLog::new();
        log.append(entry(1));
        log.append(entry(2));
        log.append(entry(3));
        let quantities: Vec<u32> = log.all().map(|e| e.input.quantity).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
        assert_eq!(log.latest().map(|e| e.input.quantity), Some(3));
    }

    #[test]
    fn test_sixth_save_evicts_first() {
        let mut log = HistoryLog::new();
        for q in 1..=6 {
            log.append(entry(q));
        }
        assert_eq!(log.len(), HISTORY_CAPACITY);
        let quantities: Vec<u32> = log.all().map(|e| e.input.quantity).collect();
        assert_eq!(quantities, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_never_exceeds_cap() {
        let mut log = HistoryLog::new();
        for q in 1..=50 {
            log.append(entry(q));
            assert!(log.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(log.all().next().map(|e| e.input.quantity), Some(46));
    }

    #[test]
    fn test_entry_serialization() {
        let e = entry(60);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("saved_at"));
        let roundtrip: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.input, e.input);
        assert_eq!(roundtrip.result.leftover_items, 12);
    }
}
