use diagoku_core::Board;

/// Ordered record of board snapshots, one per solving assignment.
///
/// Whenever a cell's candidate set first shrinks to a single new value —
/// through any strategy or a search branch — a copy of the resulting board is
/// appended here. The log is an external observer: the algorithm never reads
/// it. Snapshots from abandoned search branches stay in the log, which is
/// what makes a replay show the search actually backtracking.
///
/// The log is passed by reference into the solve call rather than living in
/// process-global state, so concurrent solves (and tests) cannot contaminate
/// each other. One log is meant to span one solve.
#[derive(Debug, Default, Clone)]
pub struct AssignmentLog {
    snapshots: Vec<Board>,
}

impl AssignmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of `board`.
    pub(crate) fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }

    /// Returns the recorded snapshots in the order they were taken.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a AssignmentLog {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
