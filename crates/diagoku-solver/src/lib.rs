//! Constraint-propagation solver for the diagonal Sudoku variant.
//!
//! The solver tightens a [`Board`](diagoku_core::Board) with three local
//! reduction strategies — peer [`Eliminate`](strategy::Eliminate),
//! [`OnlyChoice`](strategy::OnlyChoice) placement, and
//! [`NakedTwins`](strategy::NakedTwins) — run to a fixed point, then resolves
//! any remaining ambiguity with depth-first backtracking search. Every
//! assignment that solves a cell is snapshotted into an [`AssignmentLog`] so
//! the solving process can be replayed afterwards.
//!
//! # Examples
//!
//! ```
//! use diagoku_solver::{AssignmentLog, Solver};
//!
//! let solver = Solver::with_all_strategies();
//! let mut log = AssignmentLog::new();
//! let grid =
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
//! let solved = solver.solve(grid, &mut log)?;
//! assert!(solved.is_solved());
//! # Ok::<(), diagoku_solver::SolveError>(())
//! ```

pub use self::{
    assignment_log::AssignmentLog,
    error::SolveError,
    solve_state::SolveState,
    solver::Solver,
    strategy::{BoxedStrategy, Strategy, all_strategies},
};

mod assignment_log;
mod error;
mod solve_state;
mod solver;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;
