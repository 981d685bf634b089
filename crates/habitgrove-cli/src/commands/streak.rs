//! Check-in, revive, and status commands.
//!
//! Dates default to the local calendar day; `--date` lets tests and
//! backfills supply an explicit day. The core rules only ever see whole
//! calendar dates.

use chrono::{Local, NaiveDate};
use clap::Args;
use habitgrove_core::storage::Database;
use habitgrove_core::{CheckInOutcome, StreakTracker, CHALLENGE_DAYS};

use super::habit::require_habit;

#[derive(Args)]
pub struct CheckinArgs {
    /// Habit ID
    pub habit_id: String,
    /// Calendar date to record (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ReviveArgs {
    /// Habit ID
    pub habit_id: String,
    /// Calendar date of the attempt (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Habit ID
    pub habit_id: String,
    /// Calendar date to evaluate (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

pub fn run_checkin(args: CheckinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    require_habit(&db, &args.habit_id)?;
    let today = today_or(args.date);

    let tracker = StreakTracker::new(db);
    match tracker.check_in(&args.habit_id, today)? {
        CheckInOutcome::Recorded => {
            let summary = tracker.summary(&args.habit_id)?;
            if summary.completed {
                println!("Checked in for {today}: all {CHALLENGE_DAYS} days complete 🎉");
            } else {
                println!(
                    "Checked in for {today}: day {} of {}",
                    summary.current_day, CHALLENGE_DAYS
                );
            }
        }
        CheckInOutcome::AlreadyCheckedIn => {
            println!("Already checked in for {today}");
        }
        CheckInOutcome::ChallengeComplete => {
            println!("Challenge already complete");
        }
    }
    Ok(())
}

pub fn run_revive(args: ReviveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    require_habit(&db, &args.habit_id)?;
    let today = today_or(args.date);

    let tracker = StreakTracker::new(db);
    if tracker.revive(&args.habit_id, today)? {
        let ledger = tracker.ledger(&args.habit_id)?;
        let revived = ledger
            .and_then(|l| l.last_check_in_date)
            .map(|d| d.to_string())
            .unwrap_or_default();
        println!("Revived {revived}; streak restored");
    } else {
        println!("Revive not available");
    }
    Ok(())
}

pub fn run_status(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    require_habit(&db, &args.habit_id)?;
    let today = today_or(args.date);

    let tracker = StreakTracker::new(db);
    let status = tracker.status(&args.habit_id, today)?;
    let summary = tracker.summary(&args.habit_id)?;

    println!("{}", serde_json::to_string_pretty(&status)?);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
