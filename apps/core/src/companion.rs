//! Chat companion orchestration.
//!
//! Ties the mood classifier to the companion response set and produces the
//! transcript entries the UI renders as chat bubbles.

use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::brain::{Mood, MoodClassifier, ResponseSet};
use crate::error::AppError;
use crate::models::ChatMessage;

/// The canned opening message shown on a fresh transcript.
const GREETING: &str = "Hello! I'm here to support you. How are you feeling today? 💚";

/// One companion turn: the detected mood and the chosen script.
#[derive(Debug, Clone)]
pub struct CompanionReply {
    pub mood: Mood,
    pub message: String,
}

/// The simulated chat companion.
pub struct Companion {
    classifier: MoodClassifier,
    responses: ResponseSet,
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}

impl Companion {
    /// Create a companion with the built-in therapeutic script set.
    pub fn new() -> Self {
        Self {
            classifier: MoodClassifier::new(),
            responses: ResponseSet::companion(),
        }
    }

    /// Create a companion over a custom response set.
    pub fn with_responses(responses: ResponseSet) -> Self {
        Self {
            classifier: MoodClassifier::new(),
            responses,
        }
    }

    /// The opening message for an empty transcript.
    pub fn greeting(&self) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            sender: "companion".to_string(),
            message: GREETING.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Produce a reply to one user message.
    pub fn reply<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<CompanionReply, AppError> {
        let mood = self.classifier.classify(text);
        let message = self.responses.respond(mood, rng)?.to_string();

        info!(mood = %mood, "Companion reply generated");

        Ok(CompanionReply { mood, message })
    }

    /// Produce a reply as a transcript message.
    pub fn reply_message<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<ChatMessage, AppError> {
        let reply = self.reply(text, rng)?;
        Ok(ChatMessage {
            id: Uuid::new_v4().to_string(),
            sender: "companion".to_string(),
            message: reply.message,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reply_detects_mood_and_picks_script() {
        let companion = Companion::new();
        let mut rng = StdRng::seed_from_u64(5);

        let reply = companion.reply("I've been so worried about exams", &mut rng).unwrap();
        assert_eq!(reply.mood, Mood::Anxious);
        assert!(!reply.message.is_empty());
    }

    #[test]
    fn test_unrecognized_text_gets_neutral_reply() {
        let companion = Companion::new();
        let mut rng = StdRng::seed_from_u64(5);

        let reply = companion.reply("the bus was late", &mut rng).unwrap();
        assert_eq!(reply.mood, Mood::Neutral);
        assert!(!reply.message.is_empty());
    }

    #[test]
    fn test_greeting_is_from_companion() {
        let companion = Companion::new();
        let greeting = companion.greeting();

        assert_eq!(greeting.sender, "companion");
        assert!(greeting.message.contains("support"));
    }

    #[test]
    fn test_misconfigured_set_surfaces_invalid_category() {
        let companion = Companion::with_responses(ResponseSet::new());
        let mut rng = StdRng::seed_from_u64(5);

        assert!(matches!(
            companion.reply("hello there", &mut rng),
            Err(AppError::InvalidCategory(_))
        ));
    }
}
