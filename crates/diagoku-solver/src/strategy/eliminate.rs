use diagoku_core::DigitSet;

use crate::{
    SolveState,
    strategy::{BoxedStrategy, Strategy},
};

const NAME: &str = "eliminate";

/// Removes each solved cell's value from the candidates of all its peers.
///
/// The set of solved cells is snapshotted when the pass starts; peers reduced
/// to a single candidate mid-pass are picked up by the next iteration of the
/// propagation loop rather than within the same pass. Eliminations are
/// applied sequentially, so a peer's candidate set reflects all removals made
/// earlier in the pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;
        let solved = state.board().solved_cells();
        for cell in solved {
            // Another solved peer with the same value may have emptied this
            // cell earlier in the pass; there is nothing left to propagate.
            let Some(digit) = state.candidates(cell).as_single() else {
                continue;
            };
            let peers = state.topology().peers_of(cell);
            for peer in peers {
                let candidates = state.candidates(peer);
                if candidates.contains(digit) {
                    let reduced = candidates.difference(DigitSet::singleton(digit));
                    changed |= state.assign(peer, reduced);
                }
            }
        }
        changed
    }
}
