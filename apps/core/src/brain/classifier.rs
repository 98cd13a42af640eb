//! Mood classification using trigger substrings.
//!
//! Fast keyword-based mood detection. No ML model required - plain substring
//! containment over case-folded input. Matching is deliberately not
//! word-boundary aware: "sadness" matches the "sad" trigger.

use super::mood::Mood;

/// Trigger substrings per category, lowercase.
struct TriggerRule {
    mood: Mood,
    triggers: &'static [&'static str],
}

/// Rules are evaluated top to bottom; the first category with any matching
/// trigger wins. Reordering changes tie-break behavior.
const RULES: &[TriggerRule] = &[
    TriggerRule {
        mood: Mood::Sad,
        triggers: &["sad", "depressed", "down"],
    },
    TriggerRule {
        mood: Mood::Anxious,
        triggers: &["anxious", "worried", "panic", "nervous"],
    },
    TriggerRule {
        mood: Mood::Stressed,
        triggers: &["stressed", "overwhelmed", "pressure"],
    },
    TriggerRule {
        mood: Mood::Angry,
        triggers: &["angry", "frustrated", "mad", "irritated"],
    },
    TriggerRule {
        mood: Mood::Lonely,
        triggers: &["lonely", "alone", "isolated"],
    },
    TriggerRule {
        mood: Mood::Happy,
        triggers: &["happy", "good", "great", "excited", "joy"],
    },
    TriggerRule {
        mood: Mood::Tired,
        triggers: &["tired", "exhausted", "drained", "fatigue"],
    },
    TriggerRule {
        mood: Mood::Confused,
        triggers: &["confused", "lost", "uncertain", "direction"],
    },
    TriggerRule {
        mood: Mood::Help,
        triggers: &["help", "support", "advice"],
    },
    TriggerRule {
        mood: Mood::Gratitude,
        triggers: &["thank", "grateful", "appreciate"],
    },
];

/// Mood classifier using ordered trigger-substring rules
#[derive(Debug, Default)]
pub struct MoodClassifier;

impl MoodClassifier {
    /// Create a new mood classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify the mood of a text.
    ///
    /// Total over all string inputs: any text, including the empty string,
    /// maps to exactly one category. `Mood::Neutral` is returned when no
    /// trigger matches.
    pub fn classify(&self, text: &str) -> Mood {
        let lowered = text.to_lowercase();

        for rule in RULES {
            if rule.triggers.iter().any(|t| lowered.contains(t)) {
                return rule.mood;
            }
        }

        Mood::Neutral
    }

    /// Returns the trigger substrings for a category, mainly for diagnostics.
    pub fn triggers(&self, mood: Mood) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|r| r.mood == mood)
            .map(|r| r.triggers)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trigger() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("I feel sad today"), Mood::Sad);
        assert_eq!(classifier.classify("so much pressure at work"), Mood::Stressed);
        assert_eq!(classifier.classify("I feel so isolated lately"), Mood::Lonely);
        assert_eq!(classifier.classify("thank you for listening"), Mood::Gratitude);
    }

    #[test]
    fn test_priority_tie_break() {
        let classifier = MoodClassifier::new();

        // Sad outranks anxious when both match
        assert_eq!(classifier.classify("I'm sad and anxious"), Mood::Sad);
        // Anxious outranks happy
        assert_eq!(classifier.classify("worried but in a good place"), Mood::Anxious);
    }

    #[test]
    fn test_case_folding() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify("I AM SO ANGRY"), Mood::Angry);
        assert_eq!(classifier.classify("Exhausted."), Mood::Tired);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        let classifier = MoodClassifier::new();

        // "sadness" contains "sad" - accepted ambiguity, not a bug
        assert_eq!(classifier.classify("overcome with sadness"), Mood::Sad);
        // "madly" contains "mad"
        assert_eq!(classifier.classify("madly in love"), Mood::Angry);
    }

    #[test]
    fn test_neutral_fallback() {
        let classifier = MoodClassifier::new();

        assert_eq!(classifier.classify(""), Mood::Neutral);
        assert_eq!(classifier.classify("the weather is mild"), Mood::Neutral);
    }

    #[test]
    fn test_concrete_anxious_scenario() {
        let classifier = MoodClassifier::new();

        assert_eq!(
            classifier.classify("Why do I feel so anxious and worried about finals?"),
            Mood::Anxious
        );
    }

    #[test]
    fn test_triggers_lookup() {
        let classifier = MoodClassifier::new();

        assert!(classifier.triggers(Mood::Sad).contains(&"depressed"));
        assert!(classifier.triggers(Mood::Neutral).is_empty());
    }
}
