mod action;
mod grid;
pub mod heuristics;
mod plan;
mod problem;
pub mod search_engines;
mod search_problem;
mod state;
mod successors;
mod task;
mod validate;
mod verbosity;

pub use action::{Action, ActionKind, RobotId};
pub use grid::{Cell, Direction, Grid};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, DEAD_END};
pub use plan::{Plan, PlanReadError, PlanTextError};
pub use problem::{ProblemLoadError, RobotDesc, WateringProblem};
pub use search_problem::SearchProblem;
pub use state::{RobotPose, WateringState};
pub use successors::{apply, ApplyError, Obstacle};
pub use task::{EntityKind, InvalidProblem, RobotInfo, WateringTask};
pub use validate::{replay_text, validate, ReplayError, ReplayReport, StepReport, ValidateError};
pub use verbosity::Verbosity;
