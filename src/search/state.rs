use smallvec::SmallVec;

use crate::search::Cell;

pub const TYPICAL_NUM_TAPS: usize = 2;
pub const TYPICAL_NUM_PLANTS: usize = 4;
pub const TYPICAL_NUM_ROBOTS: usize = 4;

/// The dynamic part of a robot: where it stands and how much water it
/// carries. Capacities are static and live in the task, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RobotPose {
    pub at: Cell,
    pub load: u16,
}

impl RobotPose {
    pub fn new(at: Cell, load: u16) -> Self {
        Self { at, load }
    }
}

/// A snapshot of everything that changes during planning: remaining tap
/// supplies, remaining plant demands and robot poses. All three vectors are
/// index-aligned with the task's canonical tap/plant/robot tables, so
/// structural equality and hashing identify states exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WateringState {
    tap_supply: SmallVec<[u16; TYPICAL_NUM_TAPS]>,
    plant_demand: SmallVec<[u16; TYPICAL_NUM_PLANTS]>,
    robots: SmallVec<[RobotPose; TYPICAL_NUM_ROBOTS]>,
}

impl WateringState {
    pub fn new(
        tap_supply: SmallVec<[u16; TYPICAL_NUM_TAPS]>,
        plant_demand: SmallVec<[u16; TYPICAL_NUM_PLANTS]>,
        robots: SmallVec<[RobotPose; TYPICAL_NUM_ROBOTS]>,
    ) -> Self {
        Self {
            tap_supply,
            plant_demand,
            robots,
        }
    }

    pub fn tap_supply(&self, tap_index: usize) -> u16 {
        self.tap_supply[tap_index]
    }

    pub fn plant_demand(&self, plant_index: usize) -> u16 {
        self.plant_demand[plant_index]
    }

    pub fn robot(&self, robot_index: usize) -> &RobotPose {
        &self.robots[robot_index]
    }

    pub fn robots(&self) -> &[RobotPose] {
        &self.robots
    }

    pub fn tap_supplies(&self) -> &[u16] {
        &self.tap_supply
    }

    pub fn plant_demands(&self) -> &[u16] {
        &self.plant_demand
    }

    /// Every plant satisfied. Demands never go below zero, so the goal is
    /// absorbing: no action can falsify it.
    pub fn is_goal(&self) -> bool {
        self.plant_demand.iter().all(|&demand| demand == 0)
    }

    /// Total demand still to be poured.
    pub fn outstanding_demand(&self) -> u32 {
        self.plant_demand.iter().map(|&d| u32::from(d)).sum()
    }

    /// Total water currently carried by robots.
    pub fn carried_water(&self) -> u32 {
        self.robots.iter().map(|r| u32::from(r.load)).sum()
    }

    /// Total water still available at taps.
    pub fn remaining_supply(&self) -> u32 {
        self.tap_supply.iter().map(|&s| u32::from(s)).sum()
    }

    pub(crate) fn move_robot(&mut self, robot_index: usize, to: Cell) {
        self.robots[robot_index].at = to;
    }

    pub(crate) fn load(&mut self, robot_index: usize, tap_index: usize) {
        debug_assert!(self.tap_supply[tap_index] > 0);
        self.tap_supply[tap_index] -= 1;
        self.robots[robot_index].load += 1;
    }

    pub(crate) fn pour(&mut self, robot_index: usize, plant_index: usize) {
        debug_assert!(self.plant_demand[plant_index] > 0);
        debug_assert!(self.robots[robot_index].load > 0);
        self.plant_demand[plant_index] -= 1;
        self.robots[robot_index].load -= 1;
    }
}
