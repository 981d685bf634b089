//! Ledger persistence seam.
//!
//! The streak rules never touch storage directly. Callers hand the
//! tracker a [`LedgerStore`] -- the SQLite [`Database`](crate::Database)
//! in the shipped app, or [`MemoryLedgerStore`] in tests and hosts
//! without durable storage.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{CoreError, Result};

use super::Ledger;

/// Storage capability for ledgers, keyed by habit id.
///
/// Implementations own durability and any concurrency control; the
/// tracker assumes at most one writer per ledger at a time.
pub trait LedgerStore {
    /// Load the ledger for a habit, `None` when absent.
    fn load(&self, habit_id: &str) -> Result<Option<Ledger>>;

    /// Persist a ledger, replacing any prior value for the same habit.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Discard the ledger for a habit, returning it to the not-started
    /// state. Resetting an absent ledger is a no-op.
    fn reset(&self, habit_id: &str) -> Result<()>;
}

/// In-memory ledger store.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    ledgers: Mutex<HashMap<String, Ledger>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self, habit_id: &str) -> Result<Option<Ledger>> {
        let ledgers = self
            .ledgers
            .lock()
            .map_err(|e| CoreError::Custom(e.to_string()))?;
        Ok(ledgers.get(habit_id).cloned())
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut ledgers = self
            .ledgers
            .lock()
            .map_err(|e| CoreError::Custom(e.to_string()))?;
        ledgers.insert(ledger.habit_id.clone(), ledger.clone());
        Ok(())
    }

    fn reset(&self, habit_id: &str) -> Result<()> {
        let mut ledgers = self
            .ledgers
            .lock()
            .map_err(|e| CoreError::Custom(e.to_string()))?;
        ledgers.remove(habit_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn save_load_reset() {
        let store = MemoryLedgerStore::new();
        assert!(store.load("h1").unwrap().is_none());

        let mut ledger = Ledger::new("h1", d("2024-01-01"));
        ledger.record_check_in(d("2024-01-01"));
        store.save(&ledger).unwrap();
        assert_eq!(store.load("h1").unwrap(), Some(ledger));

        store.reset("h1").unwrap();
        assert!(store.load("h1").unwrap().is_none());
        // Resetting again is a no-op.
        store.reset("h1").unwrap();
    }
}
