//! Board vocabulary for the Diagoku diagonal-Sudoku solver.
//!
//! This crate defines the structural types the solver operates on:
//!
//! - [`Digit`] and [`DigitSet`] — the digits 1-9 and candidate sets over them.
//! - [`Cell`] and [`CellSet`] — the 81 board cells and sets over them.
//! - [`Unit`] — the 29 constraint groups (9 rows, 9 columns, 9 boxes, and the
//!   two main diagonals) that must each contain every digit exactly once.
//! - [`Topology`] — the derived units-of / peers-of relations for every cell.
//! - [`Board`] — the total mapping from cell to candidate set, with
//!   grid-string parsing.
//!
//! None of these types contain solving logic; they only describe the board
//! and its constraint structure.

pub use self::{
    board::{Board, GridParseError},
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    topology::{Topology, UnitList},
    unit::Unit,
};

mod board;
mod cell;
mod cell_set;
mod digit;
mod digit_set;
mod topology;
mod unit;
