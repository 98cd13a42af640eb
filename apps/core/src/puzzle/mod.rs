//! # Puzzle Module
//!
//! Procedural word-search generation and selection matching for the
//! calming-words mini-game.
//!
//! ## Components
//! - `grid`: The letter grid, directions, and placement records
//! - `generator`: Random word placement with best-effort backtracking and fill
//! - `session`: Selection adjudication and per-puzzle session state

pub mod generator;
pub mod grid;
pub mod session;

pub use generator::{generate, GeneratedPuzzle};
pub use grid::{Direction, PuzzleGrid, WordPlacement};
pub use session::{match_selection, PuzzleSession, SelectionResult};
