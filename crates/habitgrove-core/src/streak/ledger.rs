//! Check-in ledger and streak rules.
//!
//! The ledger operates on whole calendar days -- no time-of-day component
//! participates in any comparison. Callers normalize to their reference
//! timezone before passing dates in.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total days in a challenge. Reaching this count completes the habit.
pub const CHALLENGE_DAYS: u32 = 21;

/// Outcome of recording a check-in.
///
/// Rejections are expected business outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInOutcome {
    /// Today was added to the ledger.
    Recorded,
    /// Today was already covered; the ledger is unchanged.
    AlreadyCheckedIn,
    /// All 21 days are recorded; the ledger no longer accepts check-ins.
    ChallengeComplete,
}

/// Streak status bundle for the caller's UI decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStatus {
    pub is_active: bool,
    pub can_revive: bool,
    pub is_broken: bool,
    pub revive_used: bool,
}

/// Per-habit record of completed calendar days.
///
/// `check_ins` holds days the user marked directly; `revived_days` holds
/// days covered retroactively by the one-time revive. The two sets stay
/// disjoint and their combined size never exceeds [`CHALLENGE_DAYS`].
/// `last_check_in_date`, when present, equals the maximum date across
/// both sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub habit_id: String,
    pub start_date: NaiveDate,
    pub check_ins: BTreeSet<NaiveDate>,
    pub revived_days: BTreeSet<NaiveDate>,
    pub revive_used: bool,
    #[serde(default)]
    pub last_check_in_date: Option<NaiveDate>,
}

impl Ledger {
    /// Create an empty ledger for a freshly enrolled habit.
    pub fn new(habit_id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            habit_id: habit_id.into(),
            start_date,
            check_ins: BTreeSet::new(),
            revived_days: BTreeSet::new(),
            revive_used: false,
            last_check_in_date: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Total progress toward the 21-day goal: check-ins plus revived days.
    pub fn check_in_count(&self) -> u32 {
        (self.check_ins.len() + self.revived_days.len()) as u32
    }

    /// 1-indexed day number the user is currently on. Day 1 before any
    /// check-in.
    pub fn current_day(&self) -> u32 {
        self.check_in_count().max(1)
    }

    /// Terminal state: all 21 days recorded, in any mix of regular and
    /// revived days.
    pub fn is_completed(&self) -> bool {
        self.check_in_count() >= CHALLENGE_DAYS
    }

    /// Whether a given day is covered, regular or revived.
    pub fn is_covered(&self, date: NaiveDate) -> bool {
        self.check_ins.contains(&date) || self.revived_days.contains(&date)
    }

    /// Whether the streak is broken as of `today`.
    ///
    /// The streak is intact when today is already checked in, yesterday is
    /// covered, the last recorded day is yesterday or today, or nothing has
    /// been recorded at all. Otherwise it is broken once the gap since the
    /// last recorded day exceeds one calendar day.
    pub fn is_streak_broken(&self, today: NaiveDate) -> bool {
        if self.check_ins.contains(&today) {
            return false;
        }
        if let Some(yesterday) = today.pred_opt() {
            if self.is_covered(yesterday) {
                return false;
            }
        }
        let Some(last) = self.last_check_in_date else {
            return false;
        };
        if last == today || Some(last) == today.pred_opt() {
            return false;
        }
        today.signed_duration_since(last).num_days() > 1
    }

    /// Whether the one-time revive is currently available.
    ///
    /// True iff the revive is unspent, the streak is broken as of `today`,
    /// and the break is fresh: the only missed day is yesterday itself.
    /// Gaps spanning more than one missed day cannot be revived.
    pub fn can_revive(&self, today: NaiveDate) -> bool {
        if self.revive_used || self.is_completed() {
            return false;
        }
        if !self.is_streak_broken(today) {
            return false;
        }
        let Some(yesterday) = today.pred_opt() else {
            return false;
        };
        if self.is_covered(yesterday) {
            return false;
        }
        match self.last_check_in_date {
            Some(last) => today.signed_duration_since(last).num_days() == 2,
            None => false,
        }
    }

    /// Status bundle for `today`.
    pub fn status(&self, today: NaiveDate) -> StreakStatus {
        let is_broken = self.is_streak_broken(today);
        StreakStatus {
            is_active: !is_broken,
            can_revive: self.can_revive(today),
            is_broken,
            revive_used: self.revive_used,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Record `today` as completed.
    ///
    /// Idempotent: a day already covered reports
    /// [`CheckInOutcome::AlreadyCheckedIn`] and leaves the ledger
    /// unchanged. This operation only appends -- it never inspects or
    /// repairs broken streaks; that is exclusively the revive path.
    pub fn record_check_in(&mut self, today: NaiveDate) -> CheckInOutcome {
        if self.is_completed() {
            return CheckInOutcome::ChallengeComplete;
        }
        if self.is_covered(today) {
            return CheckInOutcome::AlreadyCheckedIn;
        }
        self.check_ins.insert(today);
        if self.last_check_in_date.map_or(true, |last| today > last) {
            self.last_check_in_date = Some(today);
        }
        CheckInOutcome::Recorded
    }

    /// Spend the one-time revive, retroactively covering yesterday.
    ///
    /// Preconditions are those of [`Ledger::can_revive`], checked in
    /// order: revive unspent, streak broken, break fresh. Returns false
    /// without mutating when any fails.
    pub fn consume_revive(&mut self, today: NaiveDate) -> bool {
        if !self.can_revive(today) {
            return false;
        }
        let Some(yesterday) = today.pred_opt() else {
            return false;
        };
        self.revived_days.insert(yesterday);
        self.revive_used = true;
        self.last_check_in_date = Some(yesterday);
        true
    }
}
