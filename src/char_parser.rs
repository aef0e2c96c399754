use crate::error::ParseFailure;
use crate::input::Input;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Parser that matches one specific element at the head of the input
///
/// Despite the name it works for any [`Element`](crate::Element): `char` on
/// `&str`, `u8` on byte slices, or tokens on token slices.
pub struct CharParser<I: Input> {
    expected: I::Element,
    _input: PhantomData<fn(I) -> I>,
}

impl<I: Input> CharParser<I> {
    pub fn new(expected: I::Element) -> Self {
        CharParser {
            expected,
            _input: PhantomData,
        }
    }

    pub fn expected(&self) -> I::Element {
        self.expected
    }
}

impl<I: Input> Clone for CharParser<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for CharParser<I> {}

impl<I: Input> fmt::Debug for CharParser<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharParser")
            .field("expected", &self.expected)
            .finish()
    }
}

impl<I: Input> Parser for CharParser<I> {
    type Input = I;
    type Output = I::Element;

    fn parse(&self, input: I) -> Outcome<(Self::Output, I)> {
        match input.first() {
            None => Outcome::failure(ParseFailure::NoMoreInput.to_string()),
            Some(element) if element == self.expected => {
                Outcome::success((self.expected, input.rest()))
            }
            Some(element) => {
                Outcome::failure(ParseFailure::mismatch(self.expected, element).to_string())
            }
        }
    }
}

/// Convenience function to create a CharParser
pub fn char_parser<I: Input>(expected: I::Element) -> CharParser<I> {
    CharParser::new(expected)
}
