use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// Estimates every state at zero. Turns A* into uniform-cost search, which
/// is the baseline the informed heuristics are measured against.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn always_zero() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let mut heuristic = ZeroHeuristic::new();
        assert_eq!(
            heuristic.evaluate(&task.initial_state(), &task),
            HeuristicValue::from(0.0)
        );
    }
}
