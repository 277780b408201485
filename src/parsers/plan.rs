//! Provides parsers for parsing a plan.

use nom::combinator::map;

use crate::parsers::{parse_action, space_separated_list0, ParseResult, Span};
use crate::search::Plan;

/// Parses a plan: whitespace separated action tokens, with `;` line comments
/// allowed anywhere between them. Trailing text is left unconsumed; use
/// [`Plan::from_text`] to reject plans with garbage in them.
///
/// ## Example
/// ```
/// # use aquaplan::parsers::{parse_plan, preamble::*};
/// # use aquaplan::search::{Action, ActionKind, Direction, Plan, RobotId};
/// let input = r#"; warm-up lap
/// UP{10}
/// RIGHT{10}
/// LOAD{10} ; fill up
/// "#;
/// assert!(parse_plan(Span::new(input)).is_value(Plan::new(vec![
///     Action::new(RobotId(10), ActionKind::Move(Direction::Up)),
///     Action::new(RobotId(10), ActionKind::Move(Direction::Right)),
///     Action::new(RobotId(10), ActionKind::Load),
/// ])));
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(space_separated_list0(parse_action), Plan::new)(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// Parses a plan.
    ///
    /// ## See also
    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}
