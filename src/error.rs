use thiserror::Error;

/// Diagnostics a primitive parser can produce while running
///
/// Combinators never create new kinds; they pass these through as the
/// `Failure` message of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("No more input")]
    NoMoreInput,
    #[error("Expecting '{expected}'. Got '{actual}'.")]
    Mismatch { expected: String, actual: String },
}

impl ParseFailure {
    pub fn mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        ParseFailure::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Errors raised while building a parser, before any input is seen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatorError {
    #[error("Choice on empty sequence")]
    EmptyChoice,
}
