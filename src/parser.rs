use crate::input::Input;
use crate::outcome::Outcome;

/// Core parser trait for parser combinators
pub trait Parser {
    type Input: Input;
    type Output;

    /// Attempt to parse from the given input
    ///
    /// Returns `Success` with the parsed value and the remaining input, or
    /// `Failure` with a diagnostic. Running a parser has no side effects, so
    /// the same parser may be run any number of times.
    fn parse(&self, input: Self::Input) -> Outcome<(Self::Output, Self::Input)>;
}
