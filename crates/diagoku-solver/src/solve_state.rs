use diagoku_core::{Board, Cell, Digit, DigitSet, Topology};

use crate::AssignmentLog;

/// Mutable solving state: an owned board plus the shared topology and log.
///
/// `SolveState` is the only surface through which strategies and the search
/// mutate candidates. Routing every change through [`assign`](Self::assign)
/// guarantees that each true assignment — a cell newly reduced to a single
/// value — is snapshotted into the [`AssignmentLog`] in the order it
/// happened, no matter which strategy or search branch made it.
///
/// Each search branch owns an independent board copy (created by
/// [`branch`](Self::branch)); the topology and the log are shared across all
/// branches, the log being the sole state that outlives abandoned ones.
#[derive(Debug)]
pub struct SolveState<'a> {
    topology: &'a Topology,
    board: Board,
    log: &'a mut AssignmentLog,
}

impl<'a> SolveState<'a> {
    /// Creates a state over `board`.
    pub fn new(topology: &'a Topology, board: Board, log: &'a mut AssignmentLog) -> Self {
        Self {
            topology,
            board,
            log,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the state and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the shared topology.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        self.topology
    }

    /// Returns the candidate set of `cell`.
    #[inline]
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.board.candidates(cell)
    }

    /// Replaces the candidate set of `cell`, recording a snapshot if the cell
    /// just became solved.
    ///
    /// Returns `true` if the board changed. Proposing the candidate set a
    /// cell already has is a complete no-op: no mutation and no log entry,
    /// so re-assignments of the same value never bloat the log.
    pub fn assign(&mut self, cell: Cell, candidates: DigitSet) -> bool {
        if self.board.candidates(cell) == candidates {
            return false;
        }
        self.board.set_candidates(cell, candidates);
        if candidates.len() == 1 {
            self.log.record(&self.board);
        }
        true
    }

    /// Creates a child state whose board is an independent copy with `cell`
    /// fixed to `digit`.
    ///
    /// The guess goes through [`assign`](Self::assign), so it is recorded
    /// like any other assignment. The child reborrows the parent's log;
    /// sibling branches therefore append to one shared history.
    pub fn branch(&mut self, cell: Cell, digit: Digit) -> SolveState<'_> {
        let mut child = SolveState {
            topology: self.topology,
            board: self.board.clone(),
            log: &mut *self.log,
        };
        child.assign(cell, DigitSet::singleton(digit));
        child
    }
}
