//! Constraint units: rows, columns, boxes, and the two main diagonals.

use std::fmt::{self, Display};

use crate::{Cell, CellSet};

/// A group of nine cells that must contain each digit exactly once.
///
/// The board has 29 units: 9 rows, 9 columns, 9 boxes, and the two main
/// diagonals. The diagonals are what distinguish this variant from plain
/// Sudoku; only the nine cells on each diagonal participate in its
/// constraint, so an ordinary cell belongs to 3 units, a diagonal cell to 4,
/// and the centre cell (on both diagonals) to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row identified by its zero-based row index.
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its zero-based column index.
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
    /// The diagonal from `A1` to `I9`.
    MainDiagonal,
    /// The diagonal from `A9` to `I1`.
    AntiDiagonal,
}

// tinyvec's ArrayVec requires Default for its element type.
impl Default for Unit {
    fn default() -> Self {
        Self::Row { y: 0 }
    }
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// The two diagonal units.
    pub const DIAGONALS: [Self; 2] = [Self::MainDiagonal, Self::AntiDiagonal];

    /// All 29 units in row, column, box, diagonal order.
    pub const ALL: [Self; 29] = {
        let mut all = [Self::Row { y: 0 }; 29];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all[27] = Self::MainDiagonal;
        all[28] = Self::AntiDiagonal;
        all
    };

    /// Returns the nine cells of this unit in a fixed order.
    ///
    /// Rows and diagonals run left to right, columns top to bottom, boxes
    /// row-major within the box.
    #[must_use]
    pub const fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::from_index(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            let n = i as u8;
            cells[i] = match self {
                Self::Row { y } => Cell::new(y, n),
                Self::Column { x } => Cell::new(n, x),
                Self::Box { index } => {
                    Cell::new((index / 3) * 3 + n / 3, (index % 3) * 3 + n % 3)
                }
                Self::MainDiagonal => Cell::new(n, n),
                Self::AntiDiagonal => Cell::new(n, 8 - n),
            };
            i += 1;
        }
        cells
    }

    /// Returns the cells of this unit as a set.
    #[must_use]
    pub fn positions(self) -> CellSet {
        self.cells().into_iter().collect()
    }

    /// Returns `true` if `cell` belongs to this unit.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        match self {
            Self::Row { y } => cell.row() == y,
            Self::Column { x } => cell.col() == x,
            Self::Box { index } => cell.box_index() == index,
            Self::MainDiagonal => cell.row() == cell.col(),
            Self::AntiDiagonal => cell.row() + cell.col() == 8,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {}", (b'A' + y) as char),
            Self::Column { x } => write!(f, "column {}", x + 1),
            Self::Box { index } => write!(f, "box {}", index + 1),
            Self::MainDiagonal => f.write_str("main diagonal"),
            Self::AntiDiagonal => f.write_str("anti diagonal"),
        }
    }
}
