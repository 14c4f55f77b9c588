//! Board state: the candidate sets of all 81 cells.

use std::str::FromStr;

use derive_more::{Display, Error};

use crate::{Cell, CellSet, Digit, DigitSet};

/// Error parsing an 81-character grid string.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridParseError {
    /// The string did not contain exactly 81 characters.
    #[display("grid must be exactly 81 characters, got {len}")]
    BadLength {
        /// The actual character count.
        len: usize,
    },
    /// The string contained a character other than `1`-`9` or `.`.
    #[display("invalid character {ch:?} at position {index}")]
    BadCharacter {
        /// Offset of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

/// The candidate state of every cell on the board.
///
/// A total mapping: every cell always has a candidate set. A cell with a
/// single candidate is solved; a cell with an empty set proves the current
/// partial assignment contradictory.
///
/// Boards are plain values. The search copies one per branch, so sibling
/// branches never alias.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Board, Cell};
///
/// let board: Board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///     .parse()?;
/// assert_eq!(board.solved_count(), 17);
/// assert_eq!(board.candidates(Cell::new(0, 0)).to_string(), "2");
/// # Ok::<(), diagoku_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates a board with every candidate open in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set of `cell`.
    #[inline]
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of `cell`.
    #[inline]
    pub const fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Returns the value of `cell` if it is solved.
    #[inline]
    #[must_use]
    pub fn solved_value(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).as_single()
    }

    /// Returns the set of solved cells.
    #[must_use]
    pub fn solved_cells(&self) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.candidates(cell).len() == 1)
            .collect()
    }

    /// Returns how many cells are solved.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns the first cell (in row-major order) whose candidate set is
    /// empty, if any.
    ///
    /// An empty candidate set proves the board contradictory.
    #[must_use]
    pub fn contradicted_cell(&self) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .find(|&cell| self.candidates(cell).is_empty())
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Renders the board as an 81-character line, `.` for unsolved cells.
    ///
    /// This is the inverse of [`FromStr`] for fully parsed boards.
    #[must_use]
    pub fn to_line(&self) -> String {
        Cell::ALL
            .into_iter()
            .map(|cell| self.solved_value(cell).map_or('.', Digit::to_char))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = GridParseError;

    /// Parses an 81-character row-major grid string.
    ///
    /// A digit fixes the cell to that single candidate; `.` leaves every
    /// candidate open.
    fn from_str(s: &str) -> Result<Self, GridParseError> {
        let len = s.chars().count();
        if len != Cell::COUNT {
            return Err(GridParseError::BadLength { len });
        }
        let mut board = Self::new();
        for (index, ch) in s.chars().enumerate() {
            match Digit::from_char(ch) {
                Some(digit) => {
                    board.set_candidates(Cell::from_index(index), DigitSet::singleton(digit));
                }
                None if ch == '.' => {}
                None => return Err(GridParseError::BadCharacter { index, ch }),
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const GRID: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

    #[test]
    fn test_parse_mixed_grid() {
        let board: Board = GRID.parse().unwrap();
        assert_eq!(board.candidates(Cell::new(0, 0)), DigitSet::singleton(Digit::D2));
        assert_eq!(board.candidates(Cell::new(0, 1)), DigitSet::FULL);
        assert_eq!(board.candidates(Cell::new(8, 8)), DigitSet::singleton(Digit::D3));
        assert_eq!(board.solved_count(), 17);
        assert!(!board.is_solved());
        assert_eq!(board.contradicted_cell(), None);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(GridParseError::BadLength { len: 3 })
        );
        let long = ".".repeat(82);
        assert_eq!(
            long.parse::<Board>(),
            Err(GridParseError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let mut grid = ".".repeat(81);
        grid.replace_range(40..41, "x");
        assert_eq!(
            grid.parse::<Board>(),
            Err(GridParseError::BadCharacter { index: 40, ch: 'x' })
        );
        let zeros = "0".repeat(81);
        assert!(matches!(
            zeros.parse::<Board>(),
            Err(GridParseError::BadCharacter { index: 0, ch: '0' })
        ));
    }

    #[test]
    fn test_to_line_round_trip() {
        let board: Board = GRID.parse().unwrap();
        assert_eq!(board.to_line(), GRID);
    }

    #[test]
    fn test_contradicted_cell_reports_first_empty() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(2, 3), DigitSet::EMPTY);
        board.set_candidates(Cell::new(7, 0), DigitSet::EMPTY);
        assert_eq!(board.contradicted_cell(), Some(Cell::new(2, 3)));
    }

    proptest! {
        #[test]
        fn prop_parse_round_trips(grid in "[1-9.]{81}") {
            let board: Board = grid.parse().unwrap();
            prop_assert_eq!(board.to_line(), grid);
        }
    }
}
