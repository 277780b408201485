//! Provides parsers for action tokens.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{map, map_opt, value},
    sequence::{delimited, pair},
};

use crate::parsers::{ParseResult, Span};
use crate::search::{Action, ActionKind, Direction, RobotId};

/// Parses an action kind, i.e. one of `UP`, `DOWN`, `LEFT`, `RIGHT`, `LOAD`
/// and `POUR`. Matching is case-insensitive.
///
/// ## Example
/// ```
/// # use aquaplan::parsers::{parse_action_kind, preamble::*};
/// # use aquaplan::search::{ActionKind, Direction};
/// assert!(parse_action_kind(Span::new("UP")).is_value(ActionKind::Move(Direction::Up)));
/// assert!(parse_action_kind(Span::new("down")).is_value(ActionKind::Move(Direction::Down)));
/// assert!(parse_action_kind(Span::new("Load")).is_value(ActionKind::Load));
///
/// assert!(parse_action_kind(Span::new("JUMP")).is_err());
/// assert!(parse_action_kind(Span::new("")).is_err());
/// ```
pub fn parse_action_kind<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ActionKind> {
    alt((
        value(ActionKind::Move(Direction::Up), tag_no_case("UP")),
        value(ActionKind::Move(Direction::Down), tag_no_case("DOWN")),
        value(ActionKind::Move(Direction::Left), tag_no_case("LEFT")),
        value(ActionKind::Move(Direction::Right), tag_no_case("RIGHT")),
        value(ActionKind::Load, tag_no_case("LOAD")),
        value(ActionKind::Pour, tag_no_case("POUR")),
    ))(input.into())
}

/// Parses a robot id, i.e. a plain decimal number.
///
/// ## Example
/// ```
/// # use aquaplan::parsers::{parse_robot_id, preamble::*};
/// # use aquaplan::search::RobotId;
/// assert!(parse_robot_id(Span::new("10")).is_value(RobotId(10)));
/// assert!(parse_robot_id(Span::new("0")).is_value(RobotId(0)));
///
/// assert!(parse_robot_id(Span::new("")).is_err());
/// assert!(parse_robot_id(Span::new("-1")).is_err());
/// assert!(parse_robot_id(Span::new("ten")).is_err());
/// ```
pub fn parse_robot_id<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, RobotId> {
    map_opt(digit1, |digits: Span| {
        digits.fragment().parse::<u32>().ok().map(RobotId)
    })(input.into())
}

/// Parses an action token, i.e. `KIND{robot_id}`.
///
/// ## Example
/// ```
/// # use aquaplan::parsers::{parse_action, preamble::*};
/// # use aquaplan::search::{Action, ActionKind, Direction, RobotId};
/// assert!(parse_action(Span::new("UP{10}"))
///     .is_value(Action::new(RobotId(10), ActionKind::Move(Direction::Up))));
/// assert!(parse_action(Span::new("pour{3}")).is_value(Action::new(RobotId(3), ActionKind::Pour)));
///
/// assert!(parse_action(Span::new("JUMP{1}")).is_err());
/// assert!(parse_action(Span::new("UP{}")).is_err());
/// assert!(parse_action(Span::new("UP 10")).is_err());
/// ```
pub fn parse_action<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Action> {
    map(
        pair(
            parse_action_kind,
            delimited(char('{'), parse_robot_id, char('}')),
        ),
        |(kind, robot)| Action::new(robot, kind),
    )(input.into())
}

impl crate::parsers::Parser for Action {
    type Item = Action;

    /// Parses an action token.
    ///
    /// ## Example
    /// ```
    /// # use aquaplan::parsers::Parser;
    /// # use aquaplan::search::{Action, ActionKind, RobotId};
    /// let action = Action::from_str("LOAD{7}").unwrap();
    /// assert_eq!(action, Action::new(RobotId(7), ActionKind::Load));
    /// ```
    ///
    /// ## See also
    /// See [`parse_action`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Match;

    #[test]
    fn round_trips_through_display() {
        for text in ["UP{10}", "DOWN{0}", "LEFT{3}", "RIGHT{3}", "LOAD{42}", "POUR{42}"] {
            let (remainder, action) = parse_action(text).unwrap();
            assert!(remainder.is_empty());
            assert_eq!(action.to_string(), text);
        }
    }

    #[test]
    fn kind_matching_ignores_case() {
        assert!(parse_action(Span::new("LoAd{1}")).is_exactly(Action::new(
            RobotId(1),
            ActionKind::Load
        )));
        assert!(parse_action(Span::new("right{1}")).is_exactly(Action::new(
            RobotId(1),
            ActionKind::Move(Direction::Right)
        )));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(parse_action(Span::new("JUMP{1}")).is_err());
        assert!(parse_action(Span::new("UP{}")).is_err());
        assert!(parse_action(Span::new("UP{1")).is_err());
        assert!(parse_action(Span::new("{1}")).is_err());
        assert!(parse_action(Span::new("UP{-1}")).is_err());
    }

    #[test]
    fn kind_must_touch_the_brace() {
        assert!(parse_action(Span::new("UP {1}")).is_err());
    }
}
