use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The second parser runs on whatever the first one left. If the first
/// parser fails the second one is never run; if the second fails its message
/// is returned as-is, without any note of what the first already consumed.
///
/// Chaining `.and_then()` produces nested tuples like `((a, b), c)`.
///
/// ```
/// use applicomb::{AndThenExt, Outcome, Parser, char_parser};
///
/// let parser = char_parser('A').and_then(char_parser('B'));
/// assert_eq!(parser.parse("ABC"), Outcome::success((('A', 'B'), "C")));
/// ```
#[derive(Debug, Clone)]
pub struct AndThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndThen { parser1, parser2 }
    }
}

impl<P1, P2> Parser for AndThen<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: Self::Input) -> Outcome<(Self::Output, Self::Input)> {
        self.parser1.parse(input).and_then(|(value1, rest)| {
            self.parser2
                .parse(rest)
                .map(|(value2, rest)| ((value1, value2), rest))
        })
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<P1, P2>(parser1: P1, parser2: P2) -> AndThen<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    AndThen::new(parser1, parser2)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt: Parser + Sized {
    fn and_then<P>(self, other: P) -> AndThen<Self, P>
    where
        P: Parser<Input = Self::Input>,
    {
        AndThen::new(self, other)
    }
}

/// Implement AndThenExt for all parsers
impl<P> AndThenExt for P where P: Parser {}
