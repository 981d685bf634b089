//! Habit catalog types.
//!
//! A habit is an enrollment target: creating one starts a 21-day
//! challenge, removing one abandons it. Habits are fully independent --
//! no shared state, no cross-habit invariants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enrolled habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Enroll a new habit with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_habits_get_distinct_ids() {
        let a = Habit::new("Read a bedtime story");
        let b = Habit::new("Read a bedtime story");
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, b.title);
    }
}
