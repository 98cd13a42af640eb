//! Selection matching and per-puzzle session state.
//!
//! Adjudication concatenates the letters along the player's click trail and
//! compares against the unfound target words. No straight-line or
//! contiguity check is applied: any coordinate sequence that spells a target
//! word counts. That mirrors the original game's behavior and is kept
//! deliberately.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::generator::{generate, GeneratedPuzzle};
use super::grid::PuzzleGrid;
use crate::error::AppError;

/// The original game's word list and tuning.
pub const DEFAULT_WORDS: [&str; 8] = [
    "PEACE", "CALM", "LOVE", "HOPE", "JOY", "SMILE", "DREAM", "SHINE",
];
pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS_PER_WORD: usize = 50;

/// Outcome of matching one selection against the target words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result", content = "word")]
pub enum SelectionResult {
    /// The selection spelled a target word that was not yet found.
    Found(String),
    /// The selection spelled nothing new.
    NoMatch,
}

/// Stateless adjudication of a selection path.
///
/// Concatenates the letters at `path` in order; an exact match against a
/// word in `words` that is absent from `already_found` yields `Found`.
/// The caller owns and clears the selection buffer. Empty paths are a
/// caller bug; out-of-bounds coordinates fail with `OutOfBounds`.
pub fn match_selection(
    grid: &PuzzleGrid,
    path: &[(usize, usize)],
    words: &[&str],
    already_found: &HashSet<String>,
) -> Result<SelectionResult, AppError> {
    if path.is_empty() {
        return Err(AppError::Validation("Selection path must be non-empty".to_string()));
    }

    let mut candidate = String::with_capacity(path.len());
    for &(row, col) in path {
        candidate.push(grid.letter(row, col)?);
    }

    if words.contains(&candidate.as_str()) && !already_found.contains(&candidate) {
        return Ok(SelectionResult::Found(candidate));
    }
    Ok(SelectionResult::NoMatch)
}

/// One active puzzle: grid, target words, found-word set, and the running
/// selection buffer. Discarded and rebuilt on "new puzzle"; nothing is
/// persisted across sessions.
#[derive(Debug)]
pub struct PuzzleSession {
    puzzle: GeneratedPuzzle,
    words: Vec<String>,
    found: HashSet<String>,
    selection: Vec<(usize, usize)>,
}

impl PuzzleSession {
    /// Start a session over a custom word list.
    pub fn with_words<R: Rng + ?Sized>(
        words: &[&str],
        size: usize,
        max_attempts_per_word: usize,
        rng: &mut R,
    ) -> Result<Self, AppError> {
        let puzzle = generate(words, size, max_attempts_per_word, rng)?;
        Ok(Self {
            puzzle,
            words: words.iter().map(|w| w.to_string()).collect(),
            found: HashSet::new(),
            selection: Vec::new(),
        })
    }

    /// Start a session with the calming-words defaults.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, AppError> {
        Self::with_words(
            &DEFAULT_WORDS,
            DEFAULT_GRID_SIZE,
            DEFAULT_MAX_ATTEMPTS_PER_WORD,
            rng,
        )
    }

    pub fn grid(&self) -> &PuzzleGrid {
        &self.puzzle.grid
    }

    /// Words absent from the grid because placement gave up on them.
    pub fn skipped_words(&self) -> &[String] {
        &self.puzzle.skipped
    }

    /// Words found so far this session.
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found
    }

    /// Whether the current selection includes (row, col), for rendering.
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.iter().any(|&(r, c)| r == row && c == col)
    }

    /// Register one player click. The first click starts a selection; each
    /// further click appends a cell and re-adjudicates the whole trail.
    /// On a match the word is recorded and the selection cleared; otherwise
    /// the trail keeps growing until `reset_selection`.
    pub fn click(&mut self, row: usize, col: usize) -> Result<SelectionResult, AppError> {
        // Validate before mutating so a bad coordinate leaves the trail intact.
        self.puzzle.grid.letter(row, col)?;
        self.selection.push((row, col));

        let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        let result = match_selection(&self.puzzle.grid, &self.selection, &words, &self.found)?;

        if let SelectionResult::Found(ref word) = result {
            debug!(%word, "Word found");
            self.found.insert(word.clone());
            self.selection.clear();
        }
        Ok(result)
    }

    /// Abandon the current selection trail.
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    /// True once every placeable target word has been found.
    pub fn is_complete(&self) -> bool {
        self.words
            .iter()
            .filter(|w| !self.puzzle.skipped.contains(w))
            .all(|w| self.found.contains(w))
    }

    /// Rebuild the grid and wipe all session state.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), AppError> {
        let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        self.puzzle = generate(
            &words,
            self.puzzle.grid.size(),
            DEFAULT_MAX_ATTEMPTS_PER_WORD,
            rng,
        )?;
        self.found.clear();
        self.selection.clear();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn placements(&self) -> &[super::grid::WordPlacement] {
        &self.puzzle.placements
    }
}
