use crate::search::heuristics::{Heuristic, HeuristicValue, DEAD_END};
use crate::search::{Cell, RobotPose, WateringState, WateringTask};

/// An admissible and consistent lower bound on the number of actions still
/// required. Three pairwise disjoint classes of actions are bounded
/// separately and summed: every unit of outstanding demand costs one POUR,
/// demand not already carried costs one LOAD each, and the hardest
/// unsatisfied plant costs at least its distance to the best-placed robot in
/// moves (routed through a usable tap when that robot is empty). States
/// where taps and robots together hold less water than the plants still
/// need are dead ends.
#[derive(Debug, Clone, Default)]
pub struct DeliveryBound;

impl DeliveryBound {
    pub fn new() -> Self {
        DeliveryBound
    }
}

impl Heuristic<WateringTask> for DeliveryBound {
    fn evaluate(&mut self, state: &WateringState, task: &WateringTask) -> HeuristicValue {
        let outstanding = state.outstanding_demand();
        if outstanding == 0 {
            return (0.).into();
        }

        let carried = state.carried_water();
        if carried + state.remaining_supply() < outstanding {
            return DEAD_END;
        }

        let loads_needed = outstanding.saturating_sub(carried);

        let travel = match travel_bound(state, task) {
            Some(moves) => moves,
            None => return DEAD_END,
        };

        f64::from(outstanding + loads_needed + travel).into()
    }
}

/// The largest per-plant move bound: some robot eventually has to stand on
/// the hardest unsatisfied plant. [`None`] means no robot can ever water one
/// of the plants.
fn travel_bound(state: &WateringState, task: &WateringTask) -> Option<u32> {
    let mut bound = 0;
    for (plant_index, plant) in task.plants().iter().enumerate() {
        if state.plant_demand(plant_index) == 0 {
            continue;
        }
        let closest = state
            .robots()
            .iter()
            .filter_map(|robot| moves_to_water(robot, plant, state, task))
            .min()?;
        bound = bound.max(closest);
    }
    Some(bound)
}

fn moves_to_water(
    robot: &RobotPose,
    plant: &Cell,
    state: &WateringState,
    task: &WateringTask,
) -> Option<u32> {
    if robot.load > 0 {
        return Some(robot.at.manhattan_distance(plant));
    }
    // An empty robot has to pass a tap that still has water. Taps only ever
    // lose supply, so minimising over the currently usable ones keeps the
    // bound valid for the rest of the search.
    task.taps()
        .iter()
        .enumerate()
        .filter(|&(tap_index, _)| state.tap_supply(tap_index) > 0)
        .map(|(_, tap)| robot.at.manhattan_distance(tap) + tap.manhattan_distance(plant))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{apply, Plan, SearchProblem};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn exact_on_the_single_robot_instance() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let mut heuristic = DeliveryBound::new();
        // 2 pours + 2 loads + 4 moves through the tap
        assert_approx_eq!(
            heuristic.evaluate(&task.initial_state(), &task).into_inner(),
            8.0
        );
    }

    #[test]
    fn exact_on_the_walled_garden() {
        let task = load_task(WALLED_GARDEN_TEXT);
        let mut heuristic = DeliveryBound::new();
        assert_approx_eq!(
            heuristic.evaluate(&task.initial_state(), &task).into_inner(),
            8.0
        );
    }

    #[test]
    fn zero_on_goal_states() {
        let task = load_task(ALREADY_SATISFIED_TEXT);
        let mut heuristic = DeliveryBound::new();
        assert_approx_eq!(
            heuristic.evaluate(&task.initial_state(), &task).into_inner(),
            0.0
        );
    }

    #[test]
    fn never_overestimates_along_an_optimal_plan() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let plan = Plan::from_text(ONE_ROBOT_3X3_PLAN).unwrap();
        let mut heuristic = DeliveryBound::new();

        let mut state = task.initial_state();
        for (used, action) in plan.steps().iter().enumerate() {
            let remaining = (plan.len() - used) as f64;
            let estimate = heuristic.evaluate(&state, &task);
            assert!(
                estimate <= remaining.into(),
                "estimate {estimate} exceeds the {remaining} actions actually left"
            );
            state = apply(&task, &state, action).unwrap();
        }
        assert_approx_eq!(heuristic.evaluate(&state, &task).into_inner(), 0.0);
    }

    #[test]
    fn insufficient_water_is_a_dead_end() {
        let task = load_task(INSUFFICIENT_SUPPLY_TEXT);
        let mut heuristic = DeliveryBound::new();
        assert!(heuristic
            .evaluate(&task.initial_state(), &task)
            .is_infinite());
    }

    #[test]
    fn no_robots_is_a_dead_end() {
        let task = load_task(
            "WateringProblem(
                size: (2, 2),
                taps: { (0, 0): 5 },
                plants: { (1, 1): 1 },
            )",
        );
        let mut heuristic = DeliveryBound::new();
        assert!(heuristic
            .evaluate(&task.initial_state(), &task)
            .is_infinite());
    }

    #[test]
    fn loaded_robots_skip_the_tap_detour() {
        let task = load_task(
            "WateringProblem(
                size: (1, 5),
                taps: { (0, 0): 5 },
                plants: { (0, 4): 1 },
                robots: { 1: (row: 0, col: 2, load: 1, capacity: 1) },
            )",
        );
        let mut heuristic = DeliveryBound::new();
        // 1 pour + 0 loads + 2 moves, no trip back to the tap
        assert_approx_eq!(
            heuristic.evaluate(&task.initial_state(), &task).into_inner(),
            3.0
        );
    }
}
