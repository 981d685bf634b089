//! 21-day habit streak tracking.
//!
//! One [`Ledger`] per habit enrollment records which calendar days were
//! completed, either by a regular check-in or retroactively via the
//! one-time revive. The rules are pure functions over the ledger value:
//! the caller supplies "today" as a whole calendar date and owns durable
//! storage through the [`LedgerStore`] seam.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> InProgress -> (Completed | Broken)
//! Broken -> InProgress   (via revive, once per ledger lifetime)
//! ```

mod ledger;
mod store;
mod tracker;

pub use ledger::{CheckInOutcome, Ledger, StreakStatus, CHALLENGE_DAYS};
pub use store::{LedgerStore, MemoryLedgerStore};
pub use tracker::StreakTracker;
