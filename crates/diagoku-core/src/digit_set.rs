//! Candidate sets over the digits 1-9.

use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;

use crate::Digit;

/// A set of candidate digits, backed by a 9-bit mask.
///
/// Bit `n` represents the digit `n + 1`. Iteration always yields digits in
/// ascending order, which keeps candidate enumeration deterministic.
///
/// A cell's candidate set with exactly one member means the cell is solved;
/// an empty set means the containing board is contradicted.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// set.remove(Digit::D5);
/// assert_eq!(set.len(), 8);
/// assert!(!set.contains(Digit::D5));
///
/// let pair = DigitSet::from_iter([Digit::D2, Digit::D7]);
/// assert_eq!(set.difference(pair).len(), 6);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[inline]
    #[must_use]
    pub const fn singleton(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Returns `true` if the set contains `digit`.
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::singleton(digit).bits != 0
    }

    /// Inserts a digit, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, digit: Digit) -> bool {
        let before = self.bits;
        self.bits |= Self::singleton(digit).bits;
        self.bits != before
    }

    /// Removes a digit, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, digit: Digit) -> bool {
        let before = self.bits;
        self.bits &= !Self::singleton(digit).bits;
        self.bits != before
    }

    /// Returns the number of digits in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole member if the set has exactly one, `None` otherwise.
    #[inline]
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 {
            Some(lowest_digit(self.bits))
        } else {
            None
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the digits present in either set.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the digits present in both sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[inline]
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

#[inline]
fn lowest_digit(bits: u16) -> Digit {
    debug_assert!(bits != 0);
    #[expect(clippy::cast_possible_truncation)]
    let value = bits.trailing_zeros() as u8 + 1;
    Digit::from_value(value)
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    #[inline]
    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        let digit = lowest_digit(self.bits);
        self.bits &= self.bits - 1;
        Some(digit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

impl Display for DigitSet {
    /// Formats the set as its digits in ascending order, e.g. `"27"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet({self})")
    }
}
