use diagoku_core::Cell;

use crate::{
    SolveState,
    strategy::{BoxedStrategy, Strategy},
};

const NAME: &str = "naked twins";

/// Eliminates the digits of a naked twin pair from the rest of their unit.
///
/// Two cells of one unit sharing an identical two-digit candidate set must
/// hold exactly those two digits between them, so the pair can be removed
/// from every other cell of that unit. The twins themselves are never
/// touched.
///
/// A pair sharing more than one unit (say a row and a box) is processed once
/// per unit. The second visit repeats eliminations the first already made,
/// which is redundant but harmless, and deliberately kept that way.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;
        let pair_cells: Vec<Cell> = Cell::ALL
            .into_iter()
            .filter(|&cell| state.candidates(cell).len() == 2)
            .collect();

        for cell in pair_cells {
            let units = state.topology().units_of(cell);
            for unit in units {
                let pair = state.candidates(cell);
                // An earlier twin in this pass may have shrunk this cell.
                if pair.len() < 2 {
                    continue;
                }

                let mut twin: Option<Cell> = None;
                let mut matching = 0;
                for other in unit.cells() {
                    if other != cell && state.candidates(other) == pair {
                        matching += 1;
                        twin = Some(other);
                    }
                }
                // Exactly one partner makes a twin pair. Three identical
                // pair cells in a unit are left for the propagation loop to
                // expose as a contradiction through elimination.
                if matching != 1 {
                    continue;
                }
                let Some(twin) = twin else { continue };
                log::debug!("naked twins {cell}/{twin} share {{{pair}}} in {unit}");

                for third in unit.cells() {
                    if third == cell || third == twin {
                        continue;
                    }
                    let candidates = state.candidates(third);
                    if candidates.len() < 2 {
                        continue;
                    }
                    let reduced = candidates.difference(pair);
                    if reduced != candidates {
                        log::trace!("naked twins reduce {third}: {candidates} -> {reduced}");
                        changed |= state.assign(third, reduced);
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::Board;

    use super::*;
    use crate::testing::{StrategyTester, cell, digits};

    fn board_with(pairs: &[(&str, &str)]) -> Board {
        let mut board = Board::new();
        for &(label, candidates) in pairs {
            board.set_candidates(cell(label), digits(candidates));
        }
        board
    }

    #[test]
    fn test_eliminates_pair_from_rest_of_row() {
        let board = board_with(&[("A1", "23"), ("A5", "23")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            .assert_candidates("A2", "1456789")
            .assert_candidates("A9", "1456789")
            // The twins themselves keep their pair.
            .assert_candidates("A1", "23")
            .assert_candidates("A5", "23");
    }

    #[test]
    fn test_eliminates_pair_on_diagonal() {
        let board = board_with(&[("B2", "47"), ("H8", "47")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            .assert_candidates("A1", "1235689")
            .assert_candidates("E5", "1235689")
            // A2 shares a box with B2 but not the diagonal; the pair only
            // constrains the unit the twins share.
            .assert_no_change("A2");
    }

    #[test]
    fn test_twins_in_shared_row_and_box() {
        // A1/A2 share both their row and their box; the pair digits must be
        // gone from the rest of each unit.
        let board = board_with(&[("A1", "15"), ("A2", "15")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            .assert_candidates("A9", "2346789")
            .assert_candidates("C3", "2346789")
            .assert_candidates("A1", "15")
            .assert_candidates("A2", "15");
    }

    #[test]
    fn test_skips_cells_already_below_pair_size() {
        let board = board_with(&[("A1", "23"), ("A5", "23"), ("A7", "2")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            // A solved third-party cell is left alone even though it holds a
            // twin digit.
            .assert_candidates("A7", "2");
    }

    #[test]
    fn test_three_identical_pairs_do_not_eliminate() {
        let board = board_with(&[("A1", "23"), ("A5", "23"), ("A9", "23")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            .assert_no_change("A2")
            .assert_no_change("A6");
    }

    #[test]
    fn test_no_twins_no_change() {
        let board = board_with(&[("A1", "23"), ("A5", "24")]);
        StrategyTester::new(board)
            .apply_once(&NakedTwins::new())
            .assert_no_change("A2")
            .assert_no_change("A9");
    }
}
