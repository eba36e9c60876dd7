//! Parsing related utilities for casting from a string to other types.
use std::marker::PhantomData;
use std::str::FromStr;

/// Logic for parsing a string into some type.
pub trait Parser {
    /// The type we'll be producing.
    type Type;

    /// Parse a string into `Type`, returning None if the parse cannot be done.
    fn parse(&mut self, s: &str) -> Option<Self::Type>;
}

/// Parser that uses the stdlib `FromStr` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FromStrParser<T: FromStr> {
    _type: PhantomData<T>,
}

impl<T: FromStr> FromStrParser<T> {
    pub const fn new() -> Self {
        FromStrParser { _type: PhantomData }
    }
}

impl<T: FromStr> Parser for FromStrParser<T> {
    type Type = T;
    fn parse(&mut self, s: &str) -> Option<Self::Type> {
        T::from_str(s).ok()
    }
}

pub type Int8Parser = FromStrParser<i8>;
pub type Int16Parser = FromStrParser<i16>;
pub type Int32Parser = FromStrParser<i32>;
pub type Int64Parser = FromStrParser<i64>;
pub type UInt8Parser = FromStrParser<u8>;
pub type UInt16Parser = FromStrParser<u16>;
pub type UInt32Parser = FromStrParser<u32>;
pub type UInt64Parser = FromStrParser<u64>;
pub type Float32Parser = FromStrParser<f32>;
pub type Float64Parser = FromStrParser<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbers() {
        assert_eq!(Some(42), UInt8Parser::new().parse("42"));
        assert_eq!(Some(-42), Int64Parser::new().parse("-42"));
        assert_eq!(Some(1.5), Float64Parser::new().parse("1.5"));
        assert_eq!(Some(1e3), Float32Parser::new().parse("1e3"));

        // Out of range for the type.
        assert_eq!(None, UInt8Parser::new().parse("256"));
        assert_eq!(None, UInt32Parser::new().parse("-1"));

        // Malformed.
        assert_eq!(None, Int32Parser::new().parse("1four2"));
        assert_eq!(None, Int16Parser::new().parse(""));
        assert_eq!(None, Int8Parser::new().parse(" 1"));
    }
}
