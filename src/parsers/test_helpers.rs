//! Assertion helpers for parser tests and doc examples.

use crate::parsers::ParseResult;
use std::fmt::Debug;

pub trait UnwrapValue<V> {
    /// Whether the result parsed to exactly `value`, ignoring any remaining
    /// input.
    fn is_value(&self, value: V) -> bool;

    /// Unwraps the parsed value, panicking on a parse failure.
    fn unwrap_value(self) -> V;
}

impl<'a, T: PartialEq + Debug> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        match self {
            Ok((_, parsed)) => parsed == &value,
            Err(_) => false,
        }
    }

    fn unwrap_value(self) -> T {
        self.expect("parsing failed").1
    }
}

pub trait Match<V> {
    /// Whether the result parsed to exactly `value` with no input left over.
    fn is_exactly(&self, value: V) -> bool;
}

impl<'a, T: PartialEq + Debug> Match<T> for ParseResult<'a, T> {
    fn is_exactly(&self, value: T) -> bool {
        match self {
            Ok((remainder, parsed)) => remainder.is_empty() && parsed == &value,
            Err(_) => false,
        }
    }
}
