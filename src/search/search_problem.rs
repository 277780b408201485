use std::fmt::Debug;
use std::hash::Hash;

use crate::search::HeuristicValue;

/// The seam between the generic best-first engine and a concrete domain:
/// initial state, action generation, transition function, goal test and step
/// cost. The engine never looks inside states, it only clones, compares and
/// hashes them, so any value type with structural equality works.
pub trait SearchProblem {
    type State: Clone + Debug + Hash + Eq;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    /// All actions applicable in `state`, in a deterministic order. The
    /// engine relies on this order (together with FIFO tie-breaking) for
    /// reproducible plans.
    fn applicable_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The successor reached by applying `action` to `state`. Only called
    /// with actions previously returned by
    /// [`applicable_actions`](SearchProblem::applicable_actions) for the same
    /// state.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> HeuristicValue {
        HeuristicValue::from(1.)
    }
}
