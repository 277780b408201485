//! Fixture texts shared by tests across the crate, included at compile time
//! so tests never depend on the working directory.

use crate::search::{WateringProblem, WateringTask};

pub const ONE_ROBOT_3X3_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/one_robot_3x3.ron"
));

/// A minimum-length plan for [`ONE_ROBOT_3X3_TEXT`].
pub const ONE_ROBOT_3X3_PLAN: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/one_robot_3x3.plan"
));

pub const TWO_ROBOTS_WALLS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/two_robots_walls.ron"
));

pub const CORRIDOR_SHUTTLE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/corridor_shuttle.ron"
));

pub const TWIN_CORRIDORS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/twin_corridors.ron"
));

pub const INSUFFICIENT_SUPPLY_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/insufficient_supply.ron"
));

pub const WALLED_GARDEN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/walled_garden.ron"
));

pub const OPEN_FIELD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/open_field.ron"
));

pub const ALREADY_SATISFIED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/already_satisfied.ron"
));

pub const NO_PLANTS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/no_plants.ron"
));

/// Builds the searchable task from fixture text. Panics on malformed
/// fixtures, which is the right failure mode inside tests.
pub fn load_task(text: &str) -> WateringTask {
    let problem = WateringProblem::from_ron_str(text).expect("fixture must parse");
    WateringTask::new(&problem).expect("fixture must describe a valid problem")
}
