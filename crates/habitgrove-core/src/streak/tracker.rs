//! Read-modify-write mediator between the streak rules and a ledger
//! store.
//!
//! Each mutating operation is a single load, apply, persist cycle. The
//! tracker persists only when the rules actually changed the ledger, so
//! rejected operations never touch storage.

use chrono::NaiveDate;

use crate::error::Result;
use crate::stats::ProgressSummary;

use super::{CheckInOutcome, Ledger, LedgerStore, StreakStatus};

/// Mediates streak operations over an injected [`LedgerStore`].
pub struct StreakTracker<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> StreakTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record today's check-in for a habit.
    ///
    /// An absent ledger is initialized with `start_date = today`, so the
    /// first check-in both enrolls and records.
    pub fn check_in(&self, habit_id: &str, today: NaiveDate) -> Result<CheckInOutcome> {
        let mut ledger = self
            .store
            .load(habit_id)?
            .unwrap_or_else(|| Ledger::new(habit_id, today));
        let outcome = ledger.record_check_in(today);
        if outcome == CheckInOutcome::Recorded {
            self.store.save(&ledger)?;
        }
        Ok(outcome)
    }

    /// Spend the one-time revive for a habit.
    ///
    /// Returns false without persisting anything when the revive is
    /// ineligible or the habit has no ledger yet.
    pub fn revive(&self, habit_id: &str, today: NaiveDate) -> Result<bool> {
        let Some(mut ledger) = self.store.load(habit_id)? else {
            return Ok(false);
        };
        if ledger.consume_revive(today) {
            self.store.save(&ledger)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Streak status for a habit as of `today`.
    ///
    /// An absent ledger reports the no-progress state: active, nothing
    /// broken, no revive available.
    pub fn status(&self, habit_id: &str, today: NaiveDate) -> Result<StreakStatus> {
        let status = match self.store.load(habit_id)? {
            Some(ledger) => ledger.status(today),
            None => Ledger::new(habit_id, today).status(today),
        };
        Ok(status)
    }

    /// Progress summary for a habit.
    pub fn summary(&self, habit_id: &str) -> Result<ProgressSummary> {
        let summary = match self.store.load(habit_id)? {
            Some(ledger) => ProgressSummary::from_ledger(&ledger),
            None => ProgressSummary::empty(habit_id),
        };
        Ok(summary)
    }

    /// Current ledger for a habit, if any.
    pub fn ledger(&self, habit_id: &str) -> Result<Option<Ledger>> {
        self.store.load(habit_id)
    }

    /// Abandon the challenge, discarding all progress for the habit.
    pub fn abandon(&self, habit_id: &str) -> Result<()> {
        self.store.reset(habit_id)
    }
}
