//! Per-category response sets.
//!
//! A `ResponseSet` maps each mood category to an ordered list of candidate
//! responses; one candidate is picked uniformly at random per call. The two
//! built-in configurations mirror the two call sites in the app: the chat
//! companion (long therapeutic scripts) and the journal mood tagger (short
//! labels shown as entry badges).
//!
//! Randomness is injected so callers and tests can seed their own generator.

use std::collections::HashMap;

use rand::Rng;

use super::mood::Mood;
use crate::error::AppError;

/// Ordered candidate responses per mood category
#[derive(Debug, Clone, Default)]
pub struct ResponseSet {
    candidates: HashMap<Mood, Vec<String>>,
}

impl ResponseSet {
    /// Create an empty response set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the candidate responses for a category, replacing any
    /// previous list. Order is preserved within a category.
    pub fn with_responses<S: Into<String>>(
        mut self,
        mood: Mood,
        responses: impl IntoIterator<Item = S>,
    ) -> Self {
        self.candidates
            .insert(mood, responses.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the configured candidates for a category, if any.
    pub fn candidates(&self, mood: Mood) -> Option<&[String]> {
        self.candidates.get(&mood).map(Vec::as_slice)
    }

    /// Pick one response for the category, uniformly at random.
    ///
    /// Fails with `AppError::InvalidCategory` when the category has no
    /// configured (non-empty) candidate list - a configuration error, not a
    /// user-input error.
    pub fn respond<R: Rng + ?Sized>(&self, mood: Mood, rng: &mut R) -> Result<&str, AppError> {
        let candidates = self
            .candidates
            .get(&mood)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::InvalidCategory(mood.label().to_string()))?;

        let index = rng.gen_range(0..candidates.len());
        Ok(&candidates[index])
    }

    /// The chat companion configuration: long therapeutic scripts per mood.
    pub fn companion() -> Self {
        Self::new()
            .with_responses(Mood::Sad, [
                "I can sense you're going through a difficult time right now. Sadness is a natural human emotion, and it's okay to feel this way. Sometimes sadness helps us process change or loss. Would you like to talk about what's contributing to these feelings? I'm here to listen without judgment. 🤗",
                "Thank you for being brave enough to share that you're feeling sad. These feelings are valid and temporary, even though they might feel overwhelming right now. Have you tried any gentle activities today like taking a short walk, listening to calming music, or reaching out to someone you trust? Small steps can sometimes help. 💙",
                "I hear the sadness in your words, and I want you to know that you're not alone in feeling this way. Many people experience these emotions, and it takes courage to acknowledge them. Would it help to explore some grounding techniques together, or would you prefer to journal about what's on your mind? 🌸",
            ])
            .with_responses(Mood::Anxious, [
                "I can feel the anxiety in your message, and I want you to know that what you're experiencing is real and valid. Anxiety often tries to convince us that we're in danger when we're actually safe. Let's try the 5-4-3-2-1 grounding technique: name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste. This can help bring you back to the present moment. 🌊",
                "Anxiety can feel like a storm in your mind, but remember - you are not your anxiety. You are the observer of these thoughts and feelings. Try this breathing technique with me: breathe in slowly for 4 counts, hold for 7, then exhale for 8. This activates your body's relaxation response. Would you like some calming music recommendations too? 🫁",
                "When anxiety visits, it often brings 'what if' thoughts that can spiral. I want you to know that most of our worries never actually happen. Let's ground ourselves in what's actually happening right now - you're safe, you're breathing, and you're taking care of yourself by reaching out. What's one small thing that usually brings you comfort? 🌱",
            ])
            .with_responses(Mood::Stressed, [
                "Stress can feel like you're carrying the weight of the world on your shoulders. Let's take a step back together - stress often comes from trying to control things outside our influence. What are 2-3 specific things causing you stress right now? Sometimes naming them helps us see which ones we can actually influence and which ones we might need to let go of. 🎯",
                "I hear that you're feeling overwhelmed. When we're stressed, our brain can make everything feel urgent and important at the same time. Let's try to break things down - what's the ONE most important thing you need to focus on today? We can tackle things one at a time. Remember: you don't have to do everything perfectly, just one step at a time. 🗻",
                "Feeling overwhelmed is your mind's way of saying 'slow down.' It's actually a protective signal. Let's practice the STOP technique: Stop what you're doing, Take a breath, Observe your thoughts and feelings without judgment, then Proceed with intention. What would it look like to be gentler with yourself today? 🌿",
            ])
            .with_responses(Mood::Angry, [
                "Anger is often called a 'secondary emotion' because it usually covers up something else - maybe hurt, disappointment, or feeling unheard. It's completely valid to feel angry. Behind your anger, what do you think you might really be feeling? Sometimes anger is our psyche's way of protecting something vulnerable inside us. 🔥",
                "I can sense your frustration, and it sounds like something really important to you has been affected. Anger often shows up when our boundaries or values are being challenged. Would it help to talk about what triggered these feelings? Sometimes expressing anger in a safe space helps us understand what we really need. 💪",
                "Thank you for sharing your anger with me - it takes courage to be honest about difficult emotions. Anger isn't 'bad' - it's information. It tells us something matters to us. After you've acknowledged this feeling, what do you think would help you channel this energy in a way that serves you? 🌋",
            ])
            .with_responses(Mood::Lonely, [
                "Loneliness is one of the most universal human experiences, yet it can feel so isolating. Even when you're surrounded by people, you can feel alone if you don't feel truly seen or understood. You're not alone right now though - I'm here with you. What does connection mean to you? Sometimes reaching out to one person, even with a simple 'how are you?' can start to bridge that gap. 🌉",
                "I hear you saying you feel alone, and I want you to know that feeling is so deeply human. Sometimes loneliness isn't about being physically alone - it's about feeling disconnected from others or even from ourselves. You showed courage by reaching out here. What's one small way you could connect with yourself or others today? 🤝",
                "Loneliness can feel like you're in a glass box - you can see others but can't quite reach them. But here's what I want you to remember: feeling lonely doesn't mean you're actually alone or that you're unloveable. It means you have a deep capacity for connection. Who in your life has made you feel seen and understood before? 💝",
            ])
            .with_responses(Mood::Happy, [
                "It fills my heart to hear the joy in your message! 🌟 Happiness is such a beautiful emotion to experience and share. What's bringing you this sense of joy today? I love that you're taking a moment to acknowledge and savor these positive feelings - research shows that actively appreciating good moments actually helps them last longer in our memory.",
                "Your happiness is contagious! 😊 I'm so glad you're experiencing this positive energy. When we're feeling good, it's a wonderful time to bank these feelings - really notice what's contributing to your wellbeing right now. What does this happiness feel like in your body? These are the moments that can carry us through more challenging times.",
                "What a gift to witness your joy! ✨ Happiness often comes from alignment - when our actions, values, and experiences are in harmony. You're glowing with positive energy right now. How can you carry a little bit of this feeling with you throughout your day? Maybe you could write down what's making you happy as a reminder for later.",
            ])
            .with_responses(Mood::Tired, [
                "Exhaustion is your body and mind's way of asking for rest and restoration. There's a difference between being physically tired and feeling emotionally drained - both are valid and both deserve attention. What kind of tired are you feeling today? Sometimes what we need isn't just sleep, but also emotional rest or a break from decision-making. 😴",
                "I hear how drained you're feeling. In our busy world, we often treat tiredness as something to push through rather than listen to. But fatigue is information - it's telling you something about your needs. What would true rest look like for you right now? Not just sleep, but what would restore your energy? 🌙",
                "Being tired can make everything feel harder than it actually is. When we're exhausted, even small tasks can feel overwhelming. You're not weak for feeling this way - you're human. What's one tiny thing you could do to be kind to yourself today? Even choosing rest over productivity is a form of self-care. 🛌",
            ])
            .with_responses(Mood::Confused, [
                "Feeling confused or uncertain is actually a sign that you're growing - you're encountering new information or experiences that don't fit your current understanding. That's not comfortable, but it's often where learning happens. What specific area of your life feels unclear right now? Sometimes talking through confusion helps us find clarity. 🧭",
                "Being lost can feel frightening, but it can also be the beginning of finding a new path you never knew existed. Confusion often precedes clarity. What questions are swirling in your mind right now? Sometimes our confusion is actually our wisdom asking us to slow down and really examine what matters to us. 🌫️",
                "Uncertainty is one of the hardest feelings to sit with because our brains crave predictability and control. But life rarely offers us complete certainty. What would it be like to be okay with not knowing for a while? Sometimes the most beautiful discoveries happen when we're open to not having all the answers. 🔍",
            ])
            .with_responses(Mood::Help, [
                "I'm truly honored that you're reaching out for support - that takes real strength and self-awareness. Asking for help isn't a sign of weakness; it's a sign of wisdom. What kind of support would feel most helpful to you right now? Would you like to talk through something specific, explore some coping strategies, or just have someone listen? I'm here for whatever you need. 🤝",
            ])
            .with_responses(Mood::Gratitude, [
                "Your gratitude touches my heart deeply. 💚 The fact that you're taking time to express appreciation shows so much about your character and your commitment to growth. Gratitude is like a muscle - the more we practice it, the stronger it becomes. What else are you feeling grateful for today, even in small ways?",
            ])
            .with_responses(Mood::Neutral, [
                "Thank you for sharing that with me. I can hear that there's something important on your mind. Sometimes just putting our thoughts into words can help us understand them better. What feels most pressing for you right now? I'm here to listen and support you however I can. 💙",
                "I'm grateful you chose to open up here. Whatever you're experiencing right now is valid and worthy of attention. How are you taking care of yourself today? Even small acts of self-compassion can make a meaningful difference in how we feel. 🌱",
                "It sounds like you have a lot on your mind. I want you to know that this is a safe space for you to express whatever you're feeling. What would be most helpful for you to explore right now? We can go at whatever pace feels right for you. 🕊️",
                "I appreciate you taking the time to check in here. How you're feeling matters, and I'm here to listen without judgment. What's been on your heart lately? Sometimes talking through our thoughts and feelings can help us gain new perspectives. ✨",
            ])
    }

    /// The journal mood-tag configuration: short badges shown next to entries.
    pub fn journal_tags() -> Self {
        Self::new()
            .with_responses(Mood::Sad, ["Feeling low today 💙", "A heavy-hearted entry"])
            .with_responses(Mood::Anxious, ["Carrying some worry 🌊", "An uneasy day"])
            .with_responses(Mood::Stressed, ["Under pressure 🎯", "A lot on your plate"])
            .with_responses(Mood::Angry, ["Strong feelings surfaced 🔥", "Frustration noted"])
            .with_responses(Mood::Lonely, ["Missing connection 🤝", "A quiet, lonely day"])
            .with_responses(Mood::Happy, ["A bright day! 🌟", "Joy captured ✨"])
            .with_responses(Mood::Tired, ["Running on empty 😴", "Rest needed 🌙"])
            .with_responses(Mood::Confused, ["Searching for clarity 🧭", "An uncertain stretch"])
            .with_responses(Mood::Help, ["Reaching out 🤲", "Support requested"])
            .with_responses(Mood::Gratitude, ["Grateful heart 💚", "Counting blessings"])
            .with_responses(Mood::Neutral, ["An even-keeled day", "Steady as she goes 🕊️"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respond_returns_configured_candidate() {
        let set = ResponseSet::companion();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let response = set.respond(Mood::Sad, &mut rng).unwrap();
            assert!(!response.is_empty());
            assert!(set
                .candidates(Mood::Sad)
                .unwrap()
                .iter()
                .any(|c| c == response));
        }
    }

    #[test]
    fn test_every_mood_configured_in_builtin_sets() {
        let mut rng = StdRng::seed_from_u64(1);

        for set in [ResponseSet::companion(), ResponseSet::journal_tags()] {
            for mood in Mood::ALL {
                let response = set.respond(mood, &mut rng).unwrap();
                assert!(!response.is_empty(), "empty response for {}", mood);
            }
        }
    }

    #[test]
    fn test_unconfigured_category_is_invalid() {
        let set = ResponseSet::new().with_responses(Mood::Happy, ["🌟"]);
        let mut rng = StdRng::seed_from_u64(2);

        let err = set.respond(Mood::Sad, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::InvalidCategory(ref label) if label == "sad"));
    }

    #[test]
    fn test_empty_candidate_list_is_invalid() {
        let set = ResponseSet::new().with_responses(Mood::Happy, Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(
            set.respond(Mood::Happy, &mut rng),
            Err(AppError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let set = ResponseSet::companion();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(
                set.respond(Mood::Neutral, &mut a).unwrap(),
                set.respond(Mood::Neutral, &mut b).unwrap()
            );
        }
    }
}
