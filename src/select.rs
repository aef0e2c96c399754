use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The mapper only runs on success; remaining input is passed through.
pub struct Select<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Select<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Select { parser, mapper }
    }
}

impl<P, F> fmt::Debug for Select<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F, U> Parser for Select<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Input = P::Input;
    type Output = U;

    fn parse(&self, input: Self::Input) -> Outcome<(Self::Output, Self::Input)> {
        self.parser
            .parse(input)
            .map(|(value, rest)| ((self.mapper)(value), rest))
    }
}

/// Convenience function to create a Select parser
pub fn select<P, F, U>(parser: P, mapper: F) -> Select<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Select::new(parser, mapper)
}

/// Extension trait to add .select() method support for parsers
pub trait SelectExt: Parser + Sized {
    fn select<F, U>(self, mapper: F) -> Select<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Select::new(self, mapper)
    }
}

/// Implement SelectExt for all parsers
impl<P> SelectExt for P where P: Parser {}
