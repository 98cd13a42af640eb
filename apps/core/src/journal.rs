//! Journal service.
//!
//! Validates new entries, tags them with a detected mood, and persists the
//! per-user entry list as one JSON document in the key-value store.

use chrono::Utc;
use rand::Rng;
use sqlx::sqlite::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::brain::{MoodClassifier, ResponseSet};
use crate::error::AppError;
use crate::models::{JournalEntry, NewJournalEntry};
use crate::storage::kv;

fn entries_key(user_id: &str) -> String {
    format!("journal_entries_{}", user_id)
}

/// Mood-tagging journal backed by the key-value store.
pub struct Journal {
    classifier: MoodClassifier,
    tags: ResponseSet,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    pub fn new() -> Self {
        Self {
            classifier: MoodClassifier::new(),
            tags: ResponseSet::journal_tags(),
        }
    }

    /// Validate, tag, and persist a new entry. Entries are prepended so the
    /// newest comes first, matching the journal view.
    pub async fn add_entry<R: Rng + ?Sized>(
        &self,
        pool: &SqlitePool,
        user_id: &str,
        new_entry: NewJournalEntry,
        rng: &mut R,
    ) -> Result<JournalEntry, AppError> {
        new_entry.validate()?;

        let mood = self.classifier.classify(&new_entry.content);
        let mood_tag = self.tags.respond(mood, rng)?.to_string();

        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            title: new_entry.title,
            content: new_entry.content,
            mood,
            mood_tag,
            date: Utc::now(),
        };

        let key = entries_key(user_id);
        let mut entries = self.entries(pool, user_id).await?;
        entries.insert(0, entry.clone());

        let serialized = serde_json::to_value(&entries)?;
        kv::set(pool, &key, &serialized).await?;

        info!(user_id, mood = %entry.mood, "Journal entry saved");

        Ok(entry)
    }

    /// All of a user's entries, newest first. Empty for unknown users.
    pub async fn entries(
        &self,
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<JournalEntry>, AppError> {
        match kv::get(pool, &entries_key(user_id)).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }
}
