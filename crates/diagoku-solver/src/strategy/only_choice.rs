use diagoku_core::{Cell, Digit, DigitSet, Unit};

use crate::{
    SolveState,
    strategy::{BoxedStrategy, Strategy},
};

const NAME: &str = "only choice";

/// Assigns a digit to the one cell in a unit that can still take it.
///
/// For every unit and every digit, if exactly one cell of the unit keeps the
/// digit among its candidates, that cell must hold it — even when the cell
/// itself still lists other candidates. One pass covers all 29 units × 9
/// digits; the propagation loop supplies the outer iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;
        for unit in Unit::ALL {
            for digit in Digit::ALL {
                let mut sole_place: Option<Cell> = None;
                let mut places = 0;
                for cell in unit.cells() {
                    if state.candidates(cell).contains(digit) {
                        places += 1;
                        sole_place = Some(cell);
                    }
                }
                if places == 1
                    && let Some(cell) = sole_place
                {
                    changed |= state.assign(cell, DigitSet::singleton(digit));
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use diagoku_core::{Board, Digit};

    use super::*;
    use crate::testing::{StrategyTester, cell, digits};

    /// Removes `digit` from every cell of row A except `keep`.
    fn board_with_sole_place_in_row_a(digit: Digit, keep: &str) -> Board {
        let mut board = Board::new();
        for unit_cell in Unit::ROWS[0].cells() {
            if unit_cell != cell(keep) {
                let mut candidates = board.candidates(unit_cell);
                candidates.remove(digit);
                board.set_candidates(unit_cell, candidates);
            }
        }
        board
    }

    #[test]
    fn test_places_sole_candidate_in_row() {
        let board = board_with_sole_place_in_row_a(Digit::D5, "A4");
        StrategyTester::new(board)
            .apply_once(&OnlyChoice::new())
            .assert_solved("A4", Digit::D5);
    }

    #[test]
    fn test_places_sole_candidate_on_diagonal() {
        // Leave D7 possible only at E5 among the main-diagonal cells.
        let mut board = Board::new();
        for unit_cell in Unit::MainDiagonal.cells() {
            if unit_cell != cell("E5") {
                let mut candidates = board.candidates(unit_cell);
                candidates.remove(Digit::D7);
                board.set_candidates(unit_cell, candidates);
            }
        }
        StrategyTester::new(board)
            .apply_once(&OnlyChoice::new())
            .assert_solved("E5", Digit::D7);
    }

    #[test]
    fn test_no_change_without_sole_place() {
        StrategyTester::new(Board::new())
            .apply_once(&OnlyChoice::new())
            .assert_no_change("A1")
            .assert_no_change("E5")
            .assert_no_change("I9");
    }

    #[test]
    fn test_assignment_goes_through_log() {
        let board = board_with_sole_place_in_row_a(Digit::D3, "A9");
        let tester = StrategyTester::new(board).apply_once(&OnlyChoice::new());
        assert!(
            tester
                .log()
                .iter()
                .any(|snapshot| snapshot.solved_value(cell("A9")) == Some(Digit::D3))
        );
    }

    #[test]
    fn test_overwrites_wider_candidate_set() {
        // The sole-place cell keeps other candidates of its own; only-choice
        // still pins it to the unit's forced digit.
        let mut board = board_with_sole_place_in_row_a(Digit::D8, "A2");
        board.set_candidates(cell("A2"), digits("268"));
        StrategyTester::new(board)
            .apply_once(&OnlyChoice::new())
            .assert_solved("A2", Digit::D8);
    }
}
