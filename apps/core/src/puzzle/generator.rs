//! Procedural word-search generation.
//!
//! For each target word, random (direction, start) triples are tried until
//! one fits or the attempt budget runs out; placements may cross where
//! letters agree. Unplaced words are skipped rather than failing the whole
//! grid, and reported back to the caller. Remaining cells are filled with
//! random letters.

use rand::Rng;
use tracing::warn;

use super::grid::{Direction, PuzzleGrid, WordPlacement};
use crate::error::AppError;

/// A generated puzzle: the playable grid plus the generation records.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The finished letter grid.
    pub grid: PuzzleGrid,
    /// Where each placed word ended up. Not shown to the player.
    pub placements: Vec<WordPlacement>,
    /// Words that exhausted their attempt budget and are absent from the grid.
    pub skipped: Vec<String>,
}

/// Build a word-search grid containing the target words.
///
/// Words are processed in input order; each gets up to
/// `max_attempts_per_word` random placement attempts before being skipped.
/// Every word must be non-empty, uppercase ASCII alphabetic, and no longer
/// than `size`.
pub fn generate<R: Rng + ?Sized>(
    words: &[&str],
    size: usize,
    max_attempts_per_word: usize,
    rng: &mut R,
) -> Result<GeneratedPuzzle, AppError> {
    if size == 0 {
        return Err(AppError::Validation("Grid size must be at least 1".to_string()));
    }
    for word in words {
        if word.is_empty() {
            return Err(AppError::Validation("Words must be non-empty".to_string()));
        }
        if !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::Validation(format!(
                "Word '{}' must be uppercase ASCII alphabetic",
                word
            )));
        }
        if word.len() > size {
            return Err(AppError::Validation(format!(
                "Word '{}' does not fit a {}x{} grid",
                word, size, size
            )));
        }
    }

    let mut grid = PuzzleGrid::empty(size);
    let mut placements = Vec::with_capacity(words.len());
    let mut skipped = Vec::new();

    for word in words {
        let mut placed = false;

        for _ in 0..max_attempts_per_word {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let start_row = rng.gen_range(0..size);
            let start_col = rng.gen_range(0..size);

            if can_place(&grid, word, start_row, start_col, direction) {
                write_word(&mut grid, word, start_row, start_col, direction);
                placements.push(WordPlacement {
                    word: word.to_string(),
                    start_row,
                    start_col,
                    direction,
                });
                placed = true;
                break;
            }
        }

        if !placed {
            warn!(%word, size, "Word exhausted its placement budget; skipping");
            skipped.push(word.to_string());
        }
    }

    // Fill every still-empty cell with a random letter
    for row in 0..size {
        for col in 0..size {
            if grid.get(row, col) == ' ' {
                let letter = (b'A' + rng.gen_range(0..26u8)) as char;
                grid.set(row, col, letter);
            }
        }
    }

    Ok(GeneratedPuzzle {
        grid,
        placements,
        skipped,
    })
}

/// A triple is valid if every cell the word would occupy is inside the grid
/// and either empty or already holding the exact letter required.
fn can_place(grid: &PuzzleGrid, word: &str, row: usize, col: usize, direction: Direction) -> bool {
    let (d_row, d_col) = direction.delta();

    for (i, letter) in word.chars().enumerate() {
        let r = row + i * d_row;
        let c = col + i * d_col;

        if r >= grid.size() || c >= grid.size() {
            return false;
        }
        let existing = grid.get(r, c);
        if existing != ' ' && existing != letter {
            return false;
        }
    }
    true
}

fn write_word(grid: &mut PuzzleGrid, word: &str, row: usize, col: usize, direction: Direction) {
    let (d_row, d_col) = direction.delta();

    for (i, letter) in word.chars().enumerate() {
        grid.set(row + i * d_row, col + i * d_col, letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_places_all_words() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = generate(&["PEACE", "CALM"], 10, 50, &mut rng).unwrap();

        assert!(puzzle.skipped.is_empty());
        assert_eq!(puzzle.placements.len(), 2);

        // Each placement spells its word on the grid
        for placement in &puzzle.placements {
            let spelled: String = placement
                .cells()
                .iter()
                .map(|&(r, c)| puzzle.grid.letter(r, c).unwrap())
                .collect();
            assert_eq!(spelled, placement.word);
        }
    }

    #[test]
    fn test_grid_fully_filled() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = generate(&["HOPE"], 6, 50, &mut rng).unwrap();

        for row in puzzle.grid.rows() {
            for &letter in row {
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_word_longer_than_grid_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&["SERENITY"], 5, 50, &mut rng).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_lowercase_word_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&["calm"], 10, 50, &mut rng),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_word_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&[""], 10, 50, &mut rng),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unplaceable_word_is_skipped_not_fatal() {
        let mut rng = StdRng::seed_from_u64(9);
        // Two 3-letter words on a 3x3 grid: the second usually conflicts,
        // and a zero-attempt budget guarantees both are skipped.
        let puzzle = generate(&["JOY", "SUN"], 3, 0, &mut rng).unwrap();

        assert_eq!(puzzle.skipped, vec!["JOY".to_string(), "SUN".to_string()]);
        assert!(puzzle.placements.is_empty());
    }

    #[test]
    fn test_compatible_crossing_allowed() {
        let mut grid = PuzzleGrid::empty(5);
        write_word(&mut grid, "CALM", 0, 0, Direction::Right);

        // "LOVE" starting at (0,2) going down shares the 'L' at (0,2)
        assert!(can_place(&grid, "LOVE", 0, 2, Direction::Down));
        // A conflicting letter at an occupied cell is rejected
        assert!(!can_place(&grid, "DREAM", 0, 0, Direction::Right));
    }

    #[test]
    fn test_full_word_list_accounts_for_every_word() {
        // The original game's configuration: 8 words, 10x10, 50 attempts.
        let words = ["PEACE", "CALM", "LOVE", "HOPE", "JOY", "SMILE", "DREAM", "SHINE"];
        let mut rng = StdRng::seed_from_u64(2024);
        let puzzle = generate(&words, 10, 50, &mut rng).unwrap();

        // Best-effort: every word is either placed or reported, never dropped.
        assert_eq!(puzzle.placements.len() + puzzle.skipped.len(), words.len());
        for placement in &puzzle.placements {
            let spelled: String = placement
                .cells()
                .iter()
                .map(|&(r, c)| puzzle.grid.letter(r, c).unwrap())
                .collect();
            assert_eq!(spelled, placement.word);
        }
    }
}
