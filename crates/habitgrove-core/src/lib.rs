//! # Habitgrove Core Library
//!
//! This library provides the core business logic for Habitgrove, a 21-day
//! habit challenge tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any richer
//! front end being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak**: A pure, date-keyed check-in ledger with streak-break
//!   detection and a one-time "revive" recovery mechanism. The rules never
//!   touch a clock or storage -- the caller supplies calendar dates and a
//!   [`LedgerStore`]
//! - **Storage**: SQLite-based habit catalog and ledger persistence, plus
//!   TOML-based configuration
//! - **Stats**: Progress summaries derived from ledgers
//!
//! ## Key Components
//!
//! - [`Ledger`]: Per-habit check-in record and streak rules
//! - [`StreakTracker`]: Read-modify-write mediator over a [`LedgerStore`]
//! - [`Database`]: Habit catalog and ledger persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod streak;

pub use error::{ConfigError, CoreError, StorageError};
pub use habit::Habit;
pub use stats::ProgressSummary;
pub use storage::{Config, Database};
pub use streak::{
    CheckInOutcome, Ledger, LedgerStore, MemoryLedgerStore, StreakStatus, StreakTracker,
    CHALLENGE_DAYS,
};
