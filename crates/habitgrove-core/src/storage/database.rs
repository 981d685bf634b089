//! SQLite-based habit catalog and ledger storage.
//!
//! The catalog lives in a `habits` table; each streak ledger is stored
//! as its canonical JSON document in a `ledgers` table keyed by habit
//! id. The JSON form is the serialization contract of
//! [`Ledger`](crate::Ledger) -- any other keyed store could hold the
//! same documents.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::habit::Habit;
use crate::streak::{Ledger, LedgerStore};

/// SQLite database holding the habit catalog and streak ledgers.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/habitgrove/habitgrove.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("habitgrove.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path (tests use a temp dir).
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS habits (
                id         TEXT PRIMARY KEY,
                title      TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS ledgers (
                habit_id TEXT PRIMARY KEY,
                data     TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_habits_created_at ON habits(created_at);",
        )?;
        Ok(())
    }

    // ── Habit catalog ────────────────────────────────────────────────

    /// Enroll a habit in the catalog.
    ///
    /// # Errors
    /// Returns an error if the insert fails (including a duplicate id).
    pub fn create_habit(&self, habit: &Habit) -> Result<()> {
        self.conn.execute(
            "INSERT INTO habits (id, title, created_at) VALUES (?1, ?2, ?3)",
            params![habit.id, habit.title, habit.created_at.to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get_habit(&self, id: &str) -> Result<Option<Habit>> {
        let habit = self
            .conn
            .query_row(
                "SELECT id, title, created_at FROM habits WHERE id = ?1",
                params![id],
                row_to_habit,
            )
            .optional()?;
        Ok(habit)
    }

    /// All enrolled habits, oldest first.
    pub fn list_habits(&self) -> Result<Vec<Habit>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, created_at FROM habits ORDER BY created_at, id")?;
        let rows = stmt.query_map([], row_to_habit)?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row?);
        }
        Ok(habits)
    }

    /// Remove a habit and its ledger. Removing an unknown id is a no-op.
    pub fn delete_habit(&self, id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM ledgers WHERE habit_id = ?1", params![id])?;
        self.conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_habit(row: &rusqlite::Row<'_>) -> Result<Habit, rusqlite::Error> {
    let created_str: String = row.get(2)?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;
    Ok(Habit {
        id: row.get(0)?,
        title: row.get(1)?,
        created_at,
    })
}

impl LedgerStore for Database {
    fn load(&self, habit_id: &str) -> Result<Option<Ledger>> {
        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM ledgers WHERE habit_id = ?1",
                params![habit_id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = data else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(ledger) => Ok(Some(ledger)),
            Err(err) => {
                // Unreadable ledgers fall back to the not-started state
                // instead of failing the caller.
                warn!(habit_id, %err, "discarding unreadable ledger");
                Ok(None)
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string(ledger)?;
        self.conn.execute(
            "INSERT INTO ledgers (habit_id, data) VALUES (?1, ?2)
             ON CONFLICT(habit_id) DO UPDATE SET data = excluded.data",
            params![ledger.habit_id, json],
        )?;
        Ok(())
    }

    fn reset(&self, habit_id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM ledgers WHERE habit_id = ?1", params![habit_id])?;
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

    fn open_temp() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn habit_catalog_crud() {
        let (_dir, db) = open_temp();
        let habit = Habit::new("Pack lunch together");
        db.create_habit(&habit).unwrap();

        assert_eq!(db.get_habit(&habit.id).unwrap(), Some(habit.clone()));
        assert_eq!(db.list_habits().unwrap(), vec![habit.clone()]);

        db.delete_habit(&habit.id).unwrap();
        assert!(db.get_habit(&habit.id).unwrap().is_none());
        assert!(db.list_habits().unwrap().is_empty());
    }

    #[test]
    fn ledger_round_trip() {
        let (_dir, db) = open_temp();
        let mut ledger = Ledger::new("h1", d("2024-01-01"));
        ledger.record_check_in(d("2024-01-01"));
        ledger.record_check_in(d("2024-01-02"));

        db.save(&ledger).unwrap();
        assert_eq!(db.load("h1").unwrap(), Some(ledger.clone()));

        // Saving again replaces the stored document.
        ledger.record_check_in(d("2024-01-03"));
        db.save(&ledger).unwrap();
        assert_eq!(db.load("h1").unwrap(), Some(ledger));
    }

    #[test]
    fn reset_removes_ledger() {
        let (_dir, db) = open_temp();
        let ledger = Ledger::new("h1", d("2024-01-01"));
        db.save(&ledger).unwrap();
        db.reset("h1").unwrap();
        assert!(db.load("h1").unwrap().is_none());
    }

    #[test]
    fn corrupt_ledger_reads_as_absent() {
        let (_dir, db) = open_temp();
        db.conn()
            .execute(
                "INSERT INTO ledgers (habit_id, data) VALUES ('h1', 'not json')",
                [],
            )
            .unwrap();
        assert!(db.load("h1").unwrap().is_none());
    }

    #[test]
    fn delete_habit_also_resets_ledger() {
        let (_dir, db) = open_temp();
        let habit = Habit::new("Evening walk");
        db.create_habit(&habit).unwrap();
        let mut ledger = Ledger::new(habit.id.clone(), d("2024-01-01"));
        ledger.record_check_in(d("2024-01-01"));
        db.save(&ledger).unwrap();

        db.delete_habit(&habit.id).unwrap();
        assert!(db.load(&habit.id).unwrap().is_none());
    }
}
