//! Sets of board cells.

use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::Cell;

/// A set of cells, backed by an 81-bit mask.
///
/// Bit `n` represents the cell with row-major index `n`. Iteration yields
/// cells in row-major order.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Cell, CellSet};
///
/// let mut set = CellSet::EMPTY;
/// set.insert(Cell::new(0, 0));
/// set.insert(Cell::new(8, 8));
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(8, 8)));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 cells.
    pub const ALL: Self = Self {
        bits: (1 << 81) - 1,
    };

    const fn bit(cell: Cell) -> u128 {
        1 << cell.index()
    }

    /// Returns `true` if the set contains `cell`.
    #[inline]
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & Self::bit(cell) != 0
    }

    /// Inserts a cell, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        let before = self.bits;
        self.bits |= Self::bit(cell);
        self.bits != before
    }

    /// Removes a cell, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> bool {
        let before = self.bits;
        self.bits &= !Self::bit(cell);
        self.bits != before
    }

    /// Returns the number of cells in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the cells in row-major order.
    #[inline]
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

/// Row-major iterator over the cells of a [`CellSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Cell::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellSet{")?;
        let mut first = true;
        for cell in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
            first = false;
        }
        f.write_str("}")
    }
}
