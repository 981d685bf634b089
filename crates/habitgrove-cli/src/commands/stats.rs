//! Progress summary command.

use clap::Args;
use habitgrove_core::storage::Database;
use habitgrove_core::{LedgerStore, ProgressSummary, CHALLENGE_DAYS};
use serde::Serialize;

#[derive(Args)]
pub struct StatsArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct HabitProgress {
    title: String,
    #[serde(flatten)]
    summary: ProgressSummary,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let habits = db.list_habits()?;

    let mut rows = Vec::new();
    for habit in habits {
        let summary = match db.load(&habit.id)? {
            Some(ledger) => ProgressSummary::from_ledger(&ledger),
            None => ProgressSummary::empty(&habit.id),
        };
        rows.push(HabitProgress {
            title: habit.title,
            summary,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No habits enrolled");
        return Ok(());
    }
    for row in rows {
        let s = &row.summary;
        let marker = if s.completed {
            "done"
        } else if s.revive_used {
            "revived"
        } else {
            ""
        };
        println!(
            "{:<30} day {:>2}/{}  {:>5.1}%  {}",
            row.title, s.current_day, CHALLENGE_DAYS, s.percent_complete, marker
        );
    }
    Ok(())
}
