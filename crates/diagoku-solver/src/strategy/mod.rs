//! Local-consistency reduction strategies.
//!
//! Each strategy makes one pass over the board, tightening candidate sets
//! through the shared [`SolveState`]. Strategies never detect contradictions
//! themselves; they may legitimately shrink a cell to the empty set, and the
//! propagation loop is responsible for noticing.

use std::fmt::Debug;

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};
use crate::SolveState;

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns the strategies in their fixed application order: eliminate, then
/// only-choice, then naked twins.
///
/// The propagation loop runs all of them each iteration; the order matters
/// for how quickly the fixed point is reached, not for which fixed point.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A reduction strategy over the candidate board.
pub trait Strategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Applies one pass of the strategy.
    ///
    /// Returns `true` if any candidate set changed. A pass must route every
    /// mutation through [`SolveState::assign`] and must never widen a
    /// candidate set, so repeated application always reaches a fixed point.
    fn apply(&self, state: &mut SolveState<'_>) -> bool;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
