//! Mood categories.
//!
//! The fixed set of emotional/intent labels used across the chat companion,
//! the journal mood tagger, and profile analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected mood category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Sadness, low mood (sad, depressed, down)
    Sad,
    /// Anxiety (anxious, worried, panic, nervous)
    Anxious,
    /// Stress and overwhelm (stressed, overwhelmed, pressure)
    Stressed,
    /// Anger and frustration (angry, frustrated, mad, irritated)
    Angry,
    /// Loneliness and isolation (lonely, alone, isolated)
    Lonely,
    /// Positive affect (happy, good, great, excited, joy)
    Happy,
    /// Fatigue (tired, exhausted, drained, fatigue)
    Tired,
    /// Confusion and uncertainty (confused, lost, uncertain)
    Confused,
    /// Request for support (help, support, advice)
    Help,
    /// Gratitude (thank, grateful, appreciate)
    Gratitude,
    /// Catch-all when no trigger matches
    Neutral,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Mood {
    /// Returns a human-readable label for the mood
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Stressed => "stressed",
            Mood::Angry => "angry",
            Mood::Lonely => "lonely",
            Mood::Happy => "happy",
            Mood::Tired => "tired",
            Mood::Confused => "confused",
            Mood::Help => "help",
            Mood::Gratitude => "gratitude",
            Mood::Neutral => "neutral",
        }
    }

    /// All categories, in classification priority order.
    /// `Neutral` is last and never matched directly; it is the fallback.
    pub const ALL: [Mood; 11] = [
        Mood::Sad,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Angry,
        Mood::Lonely,
        Mood::Happy,
        Mood::Tired,
        Mood::Confused,
        Mood::Help,
        Mood::Gratitude,
        Mood::Neutral,
    ];
}
