//! Utility parsers shared by the plan-text parsers.

use nom::{
    bytes::complete::is_not,
    character::complete::{char, multispace0, multispace1},
    combinator::{opt, value},
    multi::separated_list0,
    sequence::{pair, preceded, terminated, tuple},
};

use crate::parsers::{ParseResult, Span};

/// Consumes a `;` line comment (and any directly following comment lines),
/// if present. Never fails.
pub fn ignore_single_line_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        opt(terminated(
            pair(char(';'), opt(is_not("\r\n"))),
            tuple((multispace0, opt(ignore_single_line_comment))),
        )),
    )(input.into())
}

/// Consumes whitespace and line comments. Never fails; used to decide
/// whether leftover plan text is trivia or garbage.
pub fn trailing_trivia<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), preceded(multispace0, ignore_single_line_comment))(input.into())
}

/// A combinator that takes a parser `inner` and produces a parser for a
/// whitespace separated list of `inner`, tolerating line comments before
/// each element.
pub fn space_separated_list0<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(
        preceded(multispace0, ignore_single_line_comment),
        separated_list0(multispace1, preceded(ignore_single_line_comment, inner)),
    )
}
