//! Board cell identifiers.

use std::fmt::{self, Display};

/// One of the 81 board cells.
///
/// Cells are identified by a row `A`-`I` and a column `1`-`9`, and ordered
/// row-major: `A1, A2, ..., A9, B1, ..., I9`. That ordering is the
/// deterministic tie-break used throughout the solver.
///
/// # Examples
///
/// ```
/// use diagoku_core::Cell;
///
/// let cell = Cell::new(0, 8);
/// assert_eq!(cell.to_string(), "A9");
/// assert_eq!(Cell::ALL[80].to_string(), "I9");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// The number of cells on the board.
    pub const COUNT: usize = 81;

    /// All 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { index: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a cell from zero-based row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self {
            index: row * 9 + col,
        }
    }

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self { index }
    }

    /// Parses a cell label such as `"A1"` or `"I9"`.
    ///
    /// Returns `None` if the label is not a valid cell name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let row = chars.next()?;
        let col = chars.next()?;
        if chars.next().is_some() || !row.is_ascii_uppercase() || !col.is_ascii_digit() {
            return None;
        }
        let row = row as u8 - b'A';
        let col = (col as u8).checked_sub(b'1')?;
        if row < 9 && col < 9 {
            Some(Self::new(row, col))
        } else {
            None
        }
    }

    /// Returns the zero-based row (0 = row `A`).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the zero-based column (0 = column `1`).
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the row-major index in the range 0-80.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[inline]
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = self.col() + 1;
        write!(f, "{row}{col}")
    }
}
