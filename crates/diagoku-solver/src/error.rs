use derive_more::{Display, Error, From};
use diagoku_core::GridParseError;

/// Failure modes of a solve.
///
/// Only two things can go wrong: the grid string is malformed, or the puzzle
/// admits no solution. A contradiction reached during propagation surfaces as
/// [`SolveError::Unsolvable`] once the search has exhausted every branch; no
/// partial board is ever returned.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The grid string could not be parsed.
    #[display("invalid grid: {_0}")]
    #[from]
    Parse(GridParseError),
    /// No assignment of the remaining cells satisfies every unit.
    #[display("puzzle has no solution")]
    Unsolvable,
}
