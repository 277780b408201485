use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The declarative description of a watering problem, exactly as written in
/// a `.ron` file. This is raw data: nothing is validated here beyond what
/// deserialisation enforces. [`WateringTask::new`](crate::search::WateringTask::new)
/// turns it into a checked, searchable task.
///
/// Coordinates are `(row, col)` pairs. `BTreeMap`/`BTreeSet` keep the file
/// order-insensitive while giving the task a deterministic canonical order.
///
/// ```
/// use aquaplan::search::WateringProblem;
///
/// let problem = WateringProblem::from_ron_str(
///     "WateringProblem(
///         size: (3, 3),
///         taps: { (1, 1): 3 },
///         plants: { (0, 2): 2 },
///         robots: { 10: (row: 2, col: 0, load: 0, capacity: 2) },
///     )",
/// )
/// .unwrap();
/// assert_eq!(problem.size, (3, 3));
/// assert_eq!(problem.robots.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WateringProblem {
    /// Grid extent as `(rows, cols)`.
    pub size: (u16, u16),
    /// Cells robots can never enter.
    #[serde(default)]
    pub walls: BTreeSet<(u16, u16)>,
    /// Tap cell to initial supply.
    #[serde(default)]
    pub taps: BTreeMap<(u16, u16), u16>,
    /// Plant cell to initial demand.
    #[serde(default)]
    pub plants: BTreeMap<(u16, u16), u16>,
    /// Robot id to initial placement.
    #[serde(default)]
    pub robots: BTreeMap<u32, RobotDesc>,
}

/// Initial placement of one robot in the declarative description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RobotDesc {
    pub row: u16,
    pub col: u16,
    pub load: u16,
    pub capacity: u16,
}

#[derive(Debug, Error)]
pub enum ProblemLoadError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem description: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl WateringProblem {
    pub fn from_ron_str(text: &str) -> Result<Self, ProblemLoadError> {
        Ok(ron::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemLoadError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}
