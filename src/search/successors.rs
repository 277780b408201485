//! The transition function: the single owner of action legality checks and
//! effects. Search, plan validation and replay all go through here, so the
//! rules cannot drift apart.

use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::search::{
    Action, ActionKind, Cell, Direction, RobotId, WateringState, WateringTask,
};

/// What is standing in the way of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Wall,
    Robot,
}

impl Display for Obstacle {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Obstacle::Wall => write!(f, "wall"),
            Obstacle::Robot => write!(f, "robot"),
        }
    }
}

/// Why an action was rejected. One variant per rule in the transition
/// semantics, so replay reports can name the exact violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("robot {0} does not exist")]
    UnknownRobot(RobotId),
    #[error("robot {robot} cannot move {direction}: would leave the grid")]
    OutOfBounds { robot: RobotId, direction: Direction },
    #[error("robot {robot} cannot move {direction}: {cell} is blocked by a {obstacle}")]
    Blocked {
        robot: RobotId,
        direction: Direction,
        cell: Cell,
        obstacle: Obstacle,
    },
    #[error("robot {robot} is not standing on a tap")]
    NotOnTap { robot: RobotId },
    #[error("robot {robot} is already carrying its full capacity")]
    AtCapacity { robot: RobotId },
    #[error("the tap at {cell} has no water left")]
    TapExhausted { cell: Cell },
    #[error("robot {robot} is not standing on a plant")]
    NotOnPlant { robot: RobotId },
    #[error("robot {robot} has no water to pour")]
    NoWater { robot: RobotId },
    #[error("the plant at {cell} needs no more water")]
    PlantSatisfied { cell: Cell },
}

/// A checked effect, ready to be applied. Indices refer to the task's
/// canonical tables.
enum Effect {
    Move { robot_index: usize, to: Cell },
    Load { robot_index: usize, tap_index: usize },
    Pour { robot_index: usize, plant_index: usize },
}

/// Checks `action` against the transition rules and, if legal, returns the
/// successor state. `state` itself is never modified.
pub fn apply(
    task: &WateringTask,
    state: &WateringState,
    action: &Action,
) -> Result<WateringState, ApplyError> {
    let robot_index = task
        .robot_index(action.robot)
        .ok_or(ApplyError::UnknownRobot(action.robot))?;
    let effect = check(task, state, robot_index, action.kind)?;
    Ok(applied(state, effect))
}

/// All legal actions in `state`, robots in canonical (id-ascending) order,
/// kinds in the fixed order UP, DOWN, LEFT, RIGHT, LOAD, POUR.
pub(crate) fn applicable_actions(task: &WateringTask, state: &WateringState) -> Vec<Action> {
    let mut actions = Vec::new();
    for (robot_index, info) in task.robots().iter().enumerate() {
        for kind in action_kinds() {
            if check(task, state, robot_index, kind).is_ok() {
                actions.push(Action::new(info.id, kind));
            }
        }
    }
    actions
}

/// The successor reached by a known-legal action. Only the engine calls
/// this, with actions freshly produced by [`applicable_actions`], so a
/// rejection here is a caller bug.
pub(crate) fn result(task: &WateringTask, state: &WateringState, action: &Action) -> WateringState {
    match apply(task, state, action) {
        Ok(successor) => successor,
        Err(error) => panic!("illegal action {action}: {error}"),
    }
}

fn action_kinds() -> impl Iterator<Item = ActionKind> {
    Direction::iter()
        .map(ActionKind::Move)
        .chain([ActionKind::Load, ActionKind::Pour])
}

fn check(
    task: &WateringTask,
    state: &WateringState,
    robot_index: usize,
    kind: ActionKind,
) -> Result<Effect, ApplyError> {
    let pose = state.robot(robot_index);
    let robot = task.robots()[robot_index].id;

    match kind {
        ActionKind::Move(direction) => {
            let to = task
                .grid()
                .step(&pose.at, direction)
                .ok_or(ApplyError::OutOfBounds { robot, direction })?;
            if task.grid().is_wall(&to) {
                return Err(ApplyError::Blocked {
                    robot,
                    direction,
                    cell: to,
                    obstacle: Obstacle::Wall,
                });
            }
            // Taps and plants never block, only walls and other robots do.
            if state.robots().iter().any(|other| other.at == to) {
                return Err(ApplyError::Blocked {
                    robot,
                    direction,
                    cell: to,
                    obstacle: Obstacle::Robot,
                });
            }
            Ok(Effect::Move { robot_index, to })
        }
        ActionKind::Load => {
            let tap_index = task
                .tap_index_at(&pose.at)
                .ok_or(ApplyError::NotOnTap { robot })?;
            if pose.load >= task.robots()[robot_index].capacity {
                return Err(ApplyError::AtCapacity { robot });
            }
            if state.tap_supply(tap_index) == 0 {
                return Err(ApplyError::TapExhausted {
                    cell: task.taps()[tap_index],
                });
            }
            Ok(Effect::Load {
                robot_index,
                tap_index,
            })
        }
        ActionKind::Pour => {
            let plant_index = task
                .plant_index_at(&pose.at)
                .ok_or(ApplyError::NotOnPlant { robot })?;
            if pose.load == 0 {
                return Err(ApplyError::NoWater { robot });
            }
            if state.plant_demand(plant_index) == 0 {
                return Err(ApplyError::PlantSatisfied {
                    cell: task.plants()[plant_index],
                });
            }
            Ok(Effect::Pour {
                robot_index,
                plant_index,
            })
        }
    }
}

fn applied(state: &WateringState, effect: Effect) -> WateringState {
    let mut next = state.clone();
    match effect {
        Effect::Move { robot_index, to } => next.move_robot(robot_index, to),
        Effect::Load {
            robot_index,
            tap_index,
        } => next.load(robot_index, tap_index),
        Effect::Pour {
            robot_index,
            plant_index,
        } => next.pour(robot_index, plant_index),
    }
    next
}
