//! Plan checking, in two strictness levels. [`validate`] rejects a plan on
//! the first illegal step and demands that the goal is reached, which is what
//! the planner wants for its own output. [`replay_text`] is the tolerant
//! variant used to audit externally produced plan files: every token is
//! parsed and applied independently, failures are recorded per step and the
//! replay keeps going, exactly like feeding commands to the simulator one at
//! a time.

use thiserror::Error;
use tracing::debug;

use crate::parsers::{parse_action, Span};
use crate::search::{
    apply, Action, ApplyError, Plan, SearchProblem, WateringState, WateringTask,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("step {step} ({action}) is not applicable: {source}")]
    Inapplicable {
        /// 1-based position of the offending step.
        step: usize,
        action: Action,
        source: ApplyError,
    },
    #[error("plan executes but leaves plants unwatered")]
    GoalNotReached,
}

/// Replays `plan` from the initial state, requiring every step to be legal
/// and the final state to satisfy every plant.
pub fn validate(plan: &Plan, task: &WateringTask) -> Result<(), ValidateError> {
    let mut state = task.initial_state();
    for (index, action) in plan.steps().iter().enumerate() {
        state = apply(task, &state, action).map_err(|source| ValidateError::Inapplicable {
            step: index + 1,
            action: *action,
            source,
        })?;
    }

    if state.is_goal() {
        Ok(())
    } else {
        Err(ValidateError::GoalNotReached)
    }
}

/// Why a replayed step did nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("unrecognised action token")]
    Malformed,
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// The fate of one token in a replay.
#[derive(Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The token as it appeared in the input.
    pub token: String,
    /// The action that was applied, or why nothing happened.
    pub outcome: Result<Action, ReplayError>,
}

/// The outcome of replaying a whole plan text.
#[derive(Debug)]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    pub final_state: WateringState,
}

impl ReplayReport {
    /// Number of steps that changed the state.
    pub fn applied(&self) -> usize {
        self.steps.iter().filter(|step| step.outcome.is_ok()).count()
    }

    /// Number of steps that were rejected.
    pub fn failures(&self) -> usize {
        self.steps.len() - self.applied()
    }

    /// Whether the surviving steps watered every plant. The goal is
    /// absorbing, so checking the final state is enough.
    pub fn is_mission_complete(&self) -> bool {
        self.final_state.is_goal()
    }
}

/// Replays arbitrary plan text against the task, one token at a time. A
/// failed step leaves the state untouched and the replay continues with the
/// next token. Comments (`;` to end of line) and blank lines are skipped.
pub fn replay_text(task: &WateringTask, text: &str) -> ReplayReport {
    let mut state = task.initial_state();
    let mut steps = Vec::new();

    for token in tokens(text) {
        let outcome = match parse_token(token) {
            None => Err(ReplayError::Malformed),
            Some(action) => match apply(task, &state, &action) {
                Ok(next) => {
                    state = next;
                    Ok(action)
                }
                Err(error) => Err(ReplayError::Apply(error)),
            },
        };
        if let Err(error) = &outcome {
            debug!("step {} rejected: {}", steps.len() + 1, error);
        }
        steps.push(StepReport {
            token: token.to_string(),
            outcome,
        });
    }

    ReplayReport {
        steps,
        final_state: state,
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| match line.split_once(';') {
            Some((code, _comment)) => code,
            None => line,
        })
        .flat_map(str::split_whitespace)
}

fn parse_token(token: &str) -> Option<Action> {
    match parse_action(Span::new(token)) {
        Ok((remainder, action)) if remainder.is_empty() => Some(action),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Cell, RobotId};
    use crate::test_utils::*;

    const GOOD_PLAN: &str =
        "UP{10}\nRIGHT{10}\nLOAD{10}\nLOAD{10}\nUP{10}\nRIGHT{10}\nPOUR{10}\nPOUR{10}\n";

    #[test]
    fn validate_accepts_a_complete_plan() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let plan = Plan::from_text(GOOD_PLAN).unwrap();
        assert_eq!(validate(&plan, &task), Ok(()));
    }

    #[test]
    fn validate_rejects_an_illegal_step() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        // LOAD before reaching the tap
        let plan = Plan::from_text("UP{10}\nLOAD{10}\n").unwrap();
        let error = validate(&plan, &task).unwrap_err();
        assert_eq!(
            error,
            ValidateError::Inapplicable {
                step: 2,
                action: plan[1],
                source: ApplyError::NotOnTap {
                    robot: RobotId(10)
                },
            }
        );
    }

    #[test]
    fn validate_rejects_an_incomplete_plan() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let plan = Plan::from_text("UP{10}\nRIGHT{10}\nLOAD{10}\n").unwrap();
        assert_eq!(validate(&plan, &task), Err(ValidateError::GoalNotReached));
    }

    #[test]
    fn replay_completes_the_mission_on_a_good_plan() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let report = replay_text(&task, GOOD_PLAN);
        assert_eq!(report.applied(), 8);
        assert_eq!(report.failures(), 0);
        assert!(report.is_mission_complete());
        assert_eq!(report.final_state.plant_demand(0), 0);
        assert_eq!(report.final_state.robot(0).at, Cell::new(0, 2));
    }

    #[test]
    fn replay_continues_past_failures() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        // LOAD fails (not on a tap), JUMP is not a token, UP{99} names an
        // unknown robot; the two moves around them still execute.
        let report = replay_text(&task, "LOAD{10} UP{10} JUMP{10} UP{99} UP{10}");

        assert_eq!(report.applied(), 2);
        assert_eq!(report.failures(), 3);
        assert!(!report.is_mission_complete());
        assert_eq!(report.final_state.robot(0).at, Cell::new(0, 0));

        assert_eq!(
            report.steps[0].outcome,
            Err(ReplayError::Apply(ApplyError::NotOnTap {
                robot: RobotId(10)
            }))
        );
        assert_eq!(report.steps[2].outcome, Err(ReplayError::Malformed));
        assert_eq!(
            report.steps[3].outcome,
            Err(ReplayError::Apply(ApplyError::UnknownRobot(RobotId(99))))
        );
    }

    #[test]
    fn replay_skips_comments_and_partial_tokens_fail() {
        let task = load_task(ONE_ROBOT_3X3_TEXT);
        let report = replay_text(&task, "; intro\nUP{10} ; climb\nUP{10}x\n");
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.applied(), 1);
        assert_eq!(report.steps[1].token, "UP{10}x");
        assert_eq!(report.steps[1].outcome, Err(ReplayError::Malformed));
    }

    #[test]
    fn replay_of_nothing_on_a_satisfied_task_is_complete() {
        let task = load_task(NO_PLANTS_TEXT);
        let report = replay_text(&task, "");
        assert!(report.steps.is_empty());
        assert!(report.is_mission_complete());
    }
}
