//! Test utilities for strategy implementations.

use diagoku_core::{Board, Cell, Digit, DigitSet, Topology};

use crate::{AssignmentLog, SolveState, Strategy};

/// Parses a candidate-set literal such as `"27"` or `"123456789"`.
///
/// # Panics
///
/// Panics on characters outside `1`-`9`.
pub(crate) fn digits(s: &str) -> DigitSet {
    s.chars()
        .map(|ch| Digit::from_char(ch).expect("digit literal"))
        .collect()
}

/// Looks up a cell by its label, e.g. `"E5"`.
///
/// # Panics
///
/// Panics on an invalid label.
pub(crate) fn cell(label: &str) -> Cell {
    Cell::from_label(label).expect("cell label")
}

/// A fluent harness for exercising one strategy against a board.
///
/// Tracks the board before and after application so tests can assert both
/// changes and the absence of changes. Assertion methods chain and panic
/// with the offending cell on failure.
#[derive(Debug)]
pub(crate) struct StrategyTester {
    topology: Topology,
    log: AssignmentLog,
    initial: Board,
    current: Board,
}

impl StrategyTester {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            topology: Topology::new(),
            log: AssignmentLog::new(),
            initial: board.clone(),
            current: board,
        }
    }

    /// Creates a tester from an 81-character grid string.
    #[track_caller]
    pub(crate) fn from_grid(grid: &str) -> Self {
        Self::new(grid.parse().expect("valid grid"))
    }

    /// Applies one pass of `strategy`.
    pub(crate) fn apply_once(mut self, strategy: &dyn Strategy) -> Self {
        let mut state = SolveState::new(&self.topology, self.current.clone(), &mut self.log);
        strategy.apply(&mut state);
        self.current = state.into_board();
        self
    }

    /// Asserts the cell's current candidate set.
    #[track_caller]
    pub(crate) fn assert_candidates(self, label: &str, expected: &str) -> Self {
        let cell = cell(label);
        assert_eq!(
            self.current.candidates(cell),
            digits(expected),
            "candidates of {cell}"
        );
        self
    }

    /// Asserts that the cell is solved with `digit`.
    #[track_caller]
    pub(crate) fn assert_solved(self, label: &str, digit: Digit) -> Self {
        let cell = cell(label);
        assert_eq!(
            self.current.solved_value(cell),
            Some(digit),
            "{cell} should be solved"
        );
        self
    }

    /// Asserts that the cell's candidates are unchanged from the initial board.
    #[track_caller]
    pub(crate) fn assert_no_change(self, label: &str) -> Self {
        let cell = cell(label);
        assert_eq!(
            self.current.candidates(cell),
            self.initial.candidates(cell),
            "{cell} should be unchanged"
        );
        self
    }

    pub(crate) fn board(&self) -> &Board {
        &self.current
    }

    pub(crate) fn log(&self) -> &AssignmentLog {
        &self.log
    }
}
