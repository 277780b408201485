use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;

use crate::search::state::TYPICAL_NUM_ROBOTS;
use crate::search::{
    successors, Action, Cell, Grid, RobotId, RobotPose, SearchProblem, WateringProblem,
    WateringState,
};

/// Static facts about one robot: its wire id and how much water it can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotInfo {
    pub id: RobotId,
    pub capacity: u16,
}

/// A validated, searchable watering task. Construction canonicalises the
/// declarative description: taps and plants are sorted by cell, robots by id,
/// and the index of an entity in these tables is the index of its dynamic
/// counterpart in every [`WateringState`].
#[derive(Debug, Clone)]
pub struct WateringTask {
    grid: Grid,
    taps: Vec<Cell>,
    plants: Vec<Cell>,
    robots: Vec<RobotInfo>,
    initial_state: WateringState,
}

/// What kind of entity a placement error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wall,
    Tap,
    Plant,
    Robot,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EntityKind::Wall => write!(f, "wall"),
            EntityKind::Tap => write!(f, "tap"),
            EntityKind::Plant => write!(f, "plant"),
            EntityKind::Robot => write!(f, "robot"),
        }
    }
}

/// Rejections raised while turning a [`WateringProblem`] into a
/// [`WateringTask`]. These are description bugs: search never starts.
#[derive(Debug, Error)]
pub enum InvalidProblem {
    #[error("{kind} at {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        kind: EntityKind,
        cell: Cell,
        rows: u16,
        cols: u16,
    },
    #[error("{kind} at {cell} is placed on a wall")]
    OnWall { kind: EntityKind, cell: Cell },
    #[error("tap and plant overlap at {cell}")]
    TapPlantOverlap { cell: Cell },
    #[error("robots {first} and {second} both start at {cell}")]
    RobotsColliding {
        first: RobotId,
        second: RobotId,
        cell: Cell,
    },
    #[error("robot {robot} starts with load {load} above its capacity {capacity}")]
    OverCapacity {
        robot: RobotId,
        load: u16,
        capacity: u16,
    },
}

impl WateringTask {
    pub fn new(problem: &WateringProblem) -> Result<Self, InvalidProblem> {
        let (rows, cols) = problem.size;

        let check_bounds = |kind: EntityKind, cell: Cell| {
            if cell.row < rows && cell.col < cols {
                Ok(())
            } else {
                Err(InvalidProblem::OutOfBounds {
                    kind,
                    cell,
                    rows,
                    cols,
                })
            }
        };

        let mut walls = HashSet::with_capacity(problem.walls.len());
        for &(row, col) in &problem.walls {
            let cell = Cell::new(row, col);
            check_bounds(EntityKind::Wall, cell)?;
            walls.insert(cell);
        }
        let grid = Grid::new(rows, cols, walls);

        let check_placement = |kind: EntityKind, cell: Cell| {
            check_bounds(kind, cell)?;
            if grid.is_wall(&cell) {
                return Err(InvalidProblem::OnWall { kind, cell });
            }
            Ok(())
        };

        // BTreeMap iteration gives the canonical order for free: taps and
        // plants by cell, robots by id.
        let mut taps = Vec::with_capacity(problem.taps.len());
        let mut tap_supply = SmallVec::new();
        for (&(row, col), &supply) in &problem.taps {
            let cell = Cell::new(row, col);
            check_placement(EntityKind::Tap, cell)?;
            taps.push(cell);
            tap_supply.push(supply);
        }

        let mut plants = Vec::with_capacity(problem.plants.len());
        let mut plant_demand = SmallVec::new();
        for (&(row, col), &demand) in &problem.plants {
            let cell = Cell::new(row, col);
            check_placement(EntityKind::Plant, cell)?;
            if taps.binary_search(&cell).is_ok() {
                return Err(InvalidProblem::TapPlantOverlap { cell });
            }
            plants.push(cell);
            plant_demand.push(demand);
        }

        let mut robots = Vec::with_capacity(problem.robots.len());
        let mut poses: SmallVec<[RobotPose; TYPICAL_NUM_ROBOTS]> = SmallVec::new();
        for (&id, desc) in &problem.robots {
            let id = RobotId(id);
            let cell = Cell::new(desc.row, desc.col);
            check_placement(EntityKind::Robot, cell)?;
            if desc.load > desc.capacity {
                return Err(InvalidProblem::OverCapacity {
                    robot: id,
                    load: desc.load,
                    capacity: desc.capacity,
                });
            }
            robots.push(RobotInfo {
                id,
                capacity: desc.capacity,
            });
            poses.push(RobotPose::new(cell, desc.load));
        }
        if let Some(((i, a), (j, _))) = poses
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|((_, a), (_, b))| a.at == b.at)
        {
            return Err(InvalidProblem::RobotsColliding {
                first: robots[i].id,
                second: robots[j].id,
                cell: a.at,
            });
        }

        let initial_state = WateringState::new(tap_supply, plant_demand, poses);

        Ok(Self {
            grid,
            taps,
            plants,
            robots,
            initial_state,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tap cells in canonical order, index-aligned with state supplies.
    pub fn taps(&self) -> &[Cell] {
        &self.taps
    }

    /// Plant cells in canonical order, index-aligned with state demands.
    pub fn plants(&self) -> &[Cell] {
        &self.plants
    }

    /// Robots in canonical order, index-aligned with state poses.
    pub fn robots(&self) -> &[RobotInfo] {
        &self.robots
    }

    pub fn tap_index_at(&self, cell: &Cell) -> Option<usize> {
        self.taps.binary_search(cell).ok()
    }

    pub fn plant_index_at(&self, cell: &Cell) -> Option<usize> {
        self.plants.binary_search(cell).ok()
    }

    pub fn robot_index(&self, id: RobotId) -> Option<usize> {
        self.robots.binary_search_by_key(&id, |info| info.id).ok()
    }
}

impl SearchProblem for WateringTask {
    type State = WateringState;
    type Action = Action;

    fn initial_state(&self) -> WateringState {
        self.initial_state.clone()
    }

    fn applicable_actions(&self, state: &WateringState) -> Vec<Action> {
        successors::applicable_actions(self, state)
    }

    fn result(&self, state: &WateringState, action: &Action) -> WateringState {
        successors::result(self, state, action)
    }

    fn is_goal(&self, state: &WateringState) -> bool {
        state.is_goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn canonical_tables_from_fixture() {
        let task = load_task(TWO_ROBOTS_WALLS_TEXT);

        assert_eq!(task.grid().rows(), 3);
        assert_eq!(task.grid().cols(), 3);
        assert_eq!(task.taps(), &[Cell::new(1, 1)]);
        assert_eq!(task.plants(), &[Cell::new(0, 2), Cell::new(2, 0)]);
        assert_eq!(
            task.robots(),
            &[
                RobotInfo {
                    id: RobotId(10),
                    capacity: 2
                },
                RobotInfo {
                    id: RobotId(11),
                    capacity: 2
                },
            ]
        );

        let state = task.initial_state();
        assert_eq!(state.tap_supplies(), &[6]);
        assert_eq!(state.plant_demands(), &[3, 2]);
        assert_eq!(state.robot(0).at, Cell::new(1, 0));
        assert_eq!(state.robot(1).at, Cell::new(1, 2));
    }

    #[test]
    fn lookups_match_tables() {
        let task = load_task(TWO_ROBOTS_WALLS_TEXT);

        assert_eq!(task.tap_index_at(&Cell::new(1, 1)), Some(0));
        assert_eq!(task.tap_index_at(&Cell::new(0, 0)), None);
        assert_eq!(task.plant_index_at(&Cell::new(2, 0)), Some(1));
        assert_eq!(task.robot_index(RobotId(11)), Some(1));
        assert_eq!(task.robot_index(RobotId(12)), None);
    }

    #[test]
    fn rejects_out_of_bounds_plant() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                taps: { (1, 1): 3 },
                plants: { (0, 5): 2 },
            )",
        )
        .unwrap();
        let error = WateringTask::new(&problem).unwrap_err();
        assert!(matches!(
            error,
            InvalidProblem::OutOfBounds {
                kind: EntityKind::Plant,
                ..
            }
        ));
    }

    #[test]
    fn rejects_tap_on_wall() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                walls: [(1, 1)],
                taps: { (1, 1): 3 },
            )",
        )
        .unwrap();
        let error = WateringTask::new(&problem).unwrap_err();
        assert!(matches!(
            error,
            InvalidProblem::OnWall {
                kind: EntityKind::Tap,
                ..
            }
        ));
    }

    #[test]
    fn rejects_tap_plant_overlap() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                taps: { (1, 1): 3 },
                plants: { (1, 1): 2 },
            )",
        )
        .unwrap();
        let error = WateringTask::new(&problem).unwrap_err();
        assert!(matches!(
            error,
            InvalidProblem::TapPlantOverlap {
                cell: Cell { row: 1, col: 1 }
            }
        ));
    }

    #[test]
    fn rejects_colliding_robots() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                robots: {
                    10: (row: 0, col: 0, load: 0, capacity: 1),
                    11: (row: 0, col: 0, load: 0, capacity: 1),
                },
            )",
        )
        .unwrap();
        let error = WateringTask::new(&problem).unwrap_err();
        assert!(matches!(
            error,
            InvalidProblem::RobotsColliding {
                first: RobotId(10),
                second: RobotId(11),
                ..
            }
        ));
    }

    #[test]
    fn rejects_overloaded_robot() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                robots: { 10: (row: 0, col: 0, load: 3, capacity: 2) },
            )",
        )
        .unwrap();
        let error = WateringTask::new(&problem).unwrap_err();
        assert!(matches!(
            error,
            InvalidProblem::OverCapacity {
                robot: RobotId(10),
                load: 3,
                capacity: 2
            }
        ));
    }

    #[test]
    fn robot_may_start_on_a_tap() {
        let problem = WateringProblem::from_ron_str(
            "WateringProblem(
                size: (3, 3),
                taps: { (1, 1): 3 },
                robots: { 10: (row: 1, col: 1, load: 0, capacity: 2) },
            )",
        )
        .unwrap();
        assert!(WateringTask::new(&problem).is_ok());
    }
}
