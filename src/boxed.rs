use crate::input::Input;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;
use std::sync::Arc;

type SharedParser<'p, I, T> = Arc<dyn Parser<Input = I, Output = T> + Send + Sync + 'p>;

/// Type-erased parser behind a shared pointer
///
/// Boxing lets parsers of different concrete types live in one collection,
/// and cloning only bumps a reference count, so one composed parser can be
/// handed to several threads.
pub struct BoxedParser<'p, I, T> {
    parser: SharedParser<'p, I, T>,
}

impl<'p, I, T> Clone for BoxedParser<'p, I, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'p, I, T> fmt::Debug for BoxedParser<'p, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser(<parser>)")
    }
}

impl<'p, I: Input, T> BoxedParser<'p, I, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Input = I, Output = T> + Send + Sync + 'p,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'p, I: Input, T> Parser for BoxedParser<'p, I, T> {
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> Outcome<(T, I)> {
        self.parser.parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'p>: Parser + Send + Sync + Sized + 'p {
    fn boxed(self) -> BoxedParser<'p, Self::Input, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all thread-safe parsers
impl<'p, P> BoxedExt<'p> for P where P: Parser + Send + Sync + 'p {}
