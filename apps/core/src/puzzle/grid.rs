//! Letter grid primitives for the word-search game.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Direction a word is written in. Words read forward only; no reverse or
/// upward directions are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Row fixed, column increasing
    Right,
    /// Column fixed, row increasing
    Down,
    /// Both row and column increasing
    DiagonalDownRight,
}

impl Direction {
    /// All supported directions, indexable by the generator's random draw.
    pub const ALL: [Direction; 3] = [
        Direction::Right,
        Direction::Down,
        Direction::DiagonalDownRight,
    ];

    /// (row, col) step applied once per letter.
    pub fn delta(&self) -> (usize, usize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
        }
    }
}

/// Record of where a target word was written into the grid.
/// Internal to generation and tests; never exposed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl WordPlacement {
    /// The exact coordinate path the word occupies, in reading order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (d_row, d_col) = self.direction.delta();
        (0..self.word.len())
            .map(|i| (self.start_row + i * d_row, self.start_col + i * d_col))
            .collect()
    }
}

/// A square matrix of uppercase letters, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleGrid {
    size: usize,
    cells: Vec<char>,
}

impl PuzzleGrid {
    /// Create a grid with every cell unset (space). Used by the generator;
    /// a finished grid has no unset cells.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![' '; size * size],
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at (row, col), or `OutOfBounds` for coordinates outside
    /// the grid.
    pub fn letter(&self, row: usize, col: usize) -> Result<char, AppError> {
        if row >= self.size || col >= self.size {
            return Err(AppError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.cells[row * self.size + col])
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row * self.size + col] = letter;
    }

    /// Iterate rows as character slices, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::DiagonalDownRight.delta(), (1, 1));
    }

    #[test]
    fn test_placement_cells() {
        let placement = WordPlacement {
            word: "CALM".to_string(),
            start_row: 2,
            start_col: 3,
            direction: Direction::DiagonalDownRight,
        };

        assert_eq!(placement.cells(), vec![(2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn test_letter_out_of_bounds() {
        let grid = PuzzleGrid::empty(10);

        assert!(grid.letter(9, 9).is_ok());
        let err = grid.letter(10, 0).unwrap_err();
        assert!(matches!(err, AppError::OutOfBounds { row: 10, col: 0, size: 10 }));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = PuzzleGrid::empty(4);
        grid.set(1, 2, 'Q');

        assert_eq!(grid.letter(1, 2).unwrap(), 'Q');
        assert_eq!(grid.rows().count(), 4);
    }
}
