use diagoku_core::{Board, Cell, Topology};

use crate::{AssignmentLog, BoxedStrategy, SolveError, SolveState, strategy};

/// Outcome of running the propagation loop to its fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reduction {
    /// No strategy solved another cell; the board may or may not be complete.
    Stalled,
    /// Some cell lost every candidate; this branch is inconsistent.
    Contradiction,
}

/// A solver combining fixed-point constraint propagation with depth-first
/// backtracking search.
///
/// The solver holds its reduction strategies in a fixed application order.
/// Each solve parses the grid, derives the [`Topology`] once, and hands an
/// owned board to the search; branching copies the board so sibling branches
/// never alias. Exactly one solution — the first found under the
/// deterministic branch ordering — is returned.
///
/// # Examples
///
/// ```
/// use diagoku_solver::{AssignmentLog, SolveError, Solver};
///
/// let solver = Solver::with_all_strategies();
/// let mut log = AssignmentLog::new();
///
/// // Two 2s in row A: definitively unsolvable.
/// let grid = format!("22{}", ".".repeat(79));
/// assert_eq!(solver.solve(&grid, &mut log), Err(SolveError::Unsolvable));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    strategies: Vec<BoxedStrategy>,
}

impl Solver {
    /// Creates a solver with the given strategies, applied in order on every
    /// pass of the propagation loop.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a solver with the standard strategy order of
    /// [`strategy::all_strategies`].
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self::new(strategy::all_strategies())
    }

    /// Returns the configured strategies in application order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Solves an 81-character grid string.
    ///
    /// Every assignment made on the way — including those in branches later
    /// abandoned — is snapshotted into `log`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Parse`] for a malformed grid and
    /// [`SolveError::Unsolvable`] when no completion satisfies all 29 units.
    pub fn solve(&self, grid: &str, log: &mut AssignmentLog) -> Result<Board, SolveError> {
        self.solve_board(grid.parse()?, log)
    }

    /// Solves an already-parsed board.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when no completion satisfies all
    /// 29 units.
    pub fn solve_board(&self, board: Board, log: &mut AssignmentLog) -> Result<Board, SolveError> {
        let topology = Topology::new();
        let state = SolveState::new(&topology, board, log);
        self.search(state).ok_or(SolveError::Unsolvable)
    }

    /// Depth-first search with propagation.
    ///
    /// Reduces to a fixed point, returns the board if complete, and
    /// otherwise branches on the unsolved cell with the fewest candidates
    /// (row-major order breaking ties), trying its candidates in ascending
    /// order. The first fully consistent completion wins; `None` reports
    /// that no candidate of the branch cell works, which makes the caller
    /// move on to its own next candidate.
    fn search(&self, mut state: SolveState<'_>) -> Option<Board> {
        if self.reduce(&mut state) == Reduction::Contradiction {
            return None;
        }
        if state.board().is_solved() {
            return Some(state.into_board());
        }

        let cell = Self::branch_cell(state.board())?;
        let candidates = state.candidates(cell);
        log::debug!(
            "branching on {cell} over {{{candidates}}} ({} solved)",
            state.board().solved_count()
        );
        for digit in candidates {
            let child = state.branch(cell, digit);
            if let Some(solved) = self.search(child) {
                return Some(solved);
            }
            log::trace!("dead end under {cell}={digit}, backtracking");
        }
        None
    }

    /// Runs every strategy in order, repeatedly, until a full pass solves no
    /// additional cell or a contradiction shows up.
    ///
    /// The solved-cell count is non-decreasing and bounded by 81, so the
    /// loop always terminates.
    fn reduce(&self, state: &mut SolveState<'_>) -> Reduction {
        loop {
            let solved_before = state.board().solved_count();
            for strategy in &self.strategies {
                if strategy.apply(state) {
                    log::trace!("{} made progress", strategy.name());
                }
            }
            if let Some(cell) = state.board().contradicted_cell() {
                log::debug!("contradiction: {cell} has no candidates left");
                return Reduction::Contradiction;
            }
            if state.board().solved_count() == solved_before {
                return Reduction::Stalled;
            }
        }
    }

    /// Picks the unsolved cell with the fewest candidates, first in
    /// row-major order among equals. Returns `None` on a fully solved board.
    fn branch_cell(board: &Board) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|&cell| board.candidates(cell).len() > 1)
            .min_by_key(|&cell| (board.candidates(cell).len(), cell.index()))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_all_strategies()
    }
}
