use std::fmt::{Display, Formatter};

use crate::search::Direction;

/// Stable identifier of a robot, taken verbatim from the problem description.
/// Ids are arbitrary (they need not be dense or start at zero) and appear in
/// the wire syntax of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RobotId(pub u32);

impl Display for RobotId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a robot can do in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move(Direction),
    Load,
    Pour,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ActionKind::Move(direction) => write!(f, "{direction}"),
            ActionKind::Load => write!(f, "LOAD"),
            ActionKind::Pour => write!(f, "POUR"),
        }
    }
}

/// One step of a plan: a robot performing one [`ActionKind`]. Rendered in the
/// wire syntax `KIND{robot_id}`, e.g. `UP{10}` or `LOAD{3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub robot: RobotId,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(robot: RobotId, kind: ActionKind) -> Self {
        Self { robot, kind }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{{{}}}", self.kind, self.robot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_render_in_wire_syntax() {
        assert_eq!(
            Action::new(RobotId(10), ActionKind::Move(Direction::Up)).to_string(),
            "UP{10}"
        );
        assert_eq!(
            Action::new(RobotId(3), ActionKind::Load).to_string(),
            "LOAD{3}"
        );
        assert_eq!(
            Action::new(RobotId(0), ActionKind::Pour).to_string(),
            "POUR{0}"
        );
    }
}
