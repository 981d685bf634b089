//! Progress reporting over ledgers.

use serde::{Deserialize, Serialize};

use crate::streak::{Ledger, CHALLENGE_DAYS};

/// Snapshot of a habit's progress toward the 21-day goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub habit_id: String,
    pub current_day: u32,
    pub check_in_count: u32,
    pub days_remaining: u32,
    pub percent_complete: f64,
    pub revive_used: bool,
    pub completed: bool,
}

impl ProgressSummary {
    /// Derive a summary from a ledger.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let count = ledger.check_in_count();
        Self {
            habit_id: ledger.habit_id.clone(),
            current_day: ledger.current_day(),
            check_in_count: count,
            days_remaining: CHALLENGE_DAYS.saturating_sub(count),
            percent_complete: (f64::from(count) / f64::from(CHALLENGE_DAYS) * 100.0).min(100.0),
            revive_used: ledger.revive_used,
            completed: ledger.is_completed(),
        }
    }

    /// Summary for a habit with no recorded progress.
    pub fn empty(habit_id: impl Into<String>) -> Self {
        Self {
            habit_id: habit_id.into(),
            current_day: 1,
            check_in_count: 0,
            days_remaining: CHALLENGE_DAYS,
            percent_complete: 0.0,
            revive_used: false,
            completed: false,
        }
    }
}
