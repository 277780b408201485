//! A plan is a sequence of actions that waters every plant when executed
//! from the initial state. This module provides the [`Plan`] struct.

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use thiserror::Error;

use crate::parsers::{parse_plan, trailing_trivia, Span};
use crate::search::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Action>,
}

/// Plan text that is not a sequence of action tokens. Unlike replay, which
/// reports bad tokens step by step, loading a plan file rejects the whole
/// file on the first unrecognised piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised plan text at line {line}: {fragment:?}")]
pub struct PlanTextError {
    pub line: u32,
    pub fragment: String,
}

#[derive(Debug, Error)]
pub enum PlanReadError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Text(#[from] PlanTextError),
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanReadError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text)?)
    }

    /// Parses plan text, requiring that nothing but action tokens,
    /// whitespace and `;` comments appear in it.
    pub fn from_text(text: &str) -> Result<Self, PlanTextError> {
        let (remainder, plan) = match parse_plan(text) {
            Ok(parsed) => parsed,
            Err(_) => (Span::new(text), Self::empty()),
        };
        let rest = match trailing_trivia(remainder) {
            Ok((rest, ())) => rest,
            Err(_) => remainder,
        };
        if rest.is_empty() {
            Ok(plan)
        } else {
            Err(PlanTextError {
                line: rest.location_line(),
                fragment: rest
                    .fragment()
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_string(),
            })
        }
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for action in &self.steps {
            writeln!(f, "{action}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl DerefMut for Plan {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}
