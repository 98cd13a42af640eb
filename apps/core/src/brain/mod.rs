//! # Brain Module
//!
//! Rule-based mood analysis for CalmCircle.
//! Maps free text to a mood category and supplies a canned response for it.
//!
//! ## Components
//! - `mood`: The fixed set of mood categories
//! - `classifier`: Trigger-substring mood classification (priority ordered)
//! - `responses`: Per-category response sets with injectable randomness

pub mod classifier;
pub mod mood;
pub mod responses;

pub use classifier::MoodClassifier;
pub use mood::Mood;
pub use responses::ResponseSet;
