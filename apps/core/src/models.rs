use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::brain::Mood;

/// Represents a single message in the chat companion transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// The sender of the message ("user" or "companion").
    pub sender: String,
    /// The text content of the message.
    pub message: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

/// Payload for creating a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewJournalEntry {
    /// The user-supplied title of the entry.
    #[validate(length(min = 1))]
    pub title: String,
    /// The body of the entry; the mood tag is derived from it.
    #[validate(length(min = 1))]
    pub content: String,
}

/// A saved journal entry with its detected mood tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The unique identifier for the entry (UUID).
    pub id: String,
    /// The title of the entry.
    pub title: String,
    /// The body of the entry.
    pub content: String,
    /// Mood detected from the content at save time.
    pub mood: Mood,
    /// Short mood-tag text shown as the entry badge.
    pub mood_tag: String,
    /// When the entry was created.
    pub date: DateTime<Utc>,
}

/// An emergency contact saved for a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmergencyContact {
    /// The unique identifier, assigned by the server on save.
    #[serde(default)]
    pub id: Option<String>,
    /// The contact's display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Phone number, free-form.
    #[validate(length(min = 1))]
    pub phone: String,
    /// Relationship to the user (e.g., "therapist", "friend").
    #[serde(default)]
    pub relation: Option<String>,
    /// When the contact was saved, assigned by the server.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user's emergency-resource preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencySettings {
    /// Preferred hotline region code.
    #[serde(default)]
    pub region: Option<String>,
    /// Whether crisis resources are pinned to the home screen.
    #[serde(default)]
    pub show_on_home: bool,
    /// When the settings were last updated, assigned by the server.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
