//! Append-only log of the events emitted by the ledger.
//!
//! Every entry is stored exactly as an EVM log would carry it: the indexed
//! topics followed by the ABI-encoded data.
use alloc::vec::Vec;

use alloy_primitives::LogData;
use alloy_sol_types::SolEvent;

/// Ordered record of emitted events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<LogData>,
}

impl EventLog {
    /// Appends `event` to the log.
    pub fn emit<E: SolEvent>(&mut self, event: &E) {
        self.entries.push(event.encode_log_data());
    }

    /// Returns true if the `expected` event was emitted.
    #[must_use]
    pub fn emits<E: SolEvent>(&self, expected: &E) -> bool {
        let expected = expected.encode_log_data();
        self.entries.iter().any(|entry| *entry == expected)
    }

    /// All emitted entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogData] {
        &self.entries
    }

    /// Number of emitted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all emitted entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
