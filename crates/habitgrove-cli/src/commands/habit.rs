//! Habit catalog commands.

use clap::Subcommand;
use habitgrove_core::storage::Database;
use habitgrove_core::Habit;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Enroll a new habit
    Add {
        /// Habit title
        title: String,
    },
    /// List enrolled habits
    List,
    /// Abandon a habit, discarding its streak progress
    Remove {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        HabitAction::Add { title } => {
            let habit = Habit::new(title);
            db.create_habit(&habit)?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let habits = db.list_habits()?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Remove { id } => {
            require_habit(&db, &id)?;
            // Drops the ledger row too, returning the habit to NotStarted
            // before the catalog entry goes away.
            db.delete_habit(&id)?;
            println!("Habit removed: {id}");
        }
    }
    Ok(())
}

/// Resolve a habit or fail with an "unknown habit" error.
pub fn require_habit(db: &Database, id: &str) -> Result<Habit, Box<dyn std::error::Error>> {
    match db.get_habit(id)? {
        Some(habit) => Ok(habit),
        None => Err(format!("unknown habit: {id}").into()),
    }
}
