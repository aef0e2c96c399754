//! Applicative layer: lifting plain values and functions into parsers
//!
//! [`Return`] is the unit, [`Apply`] feeds a parsed argument to a parsed
//! function, and [`lift2`] combines the two to run a binary function over
//! the results of two parsers.

use crate::and_then::AndThen;
use crate::input::Input;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Return<I, T> {
    value: T,
    _input: PhantomData<fn(I) -> I>,
}

impl<I, T> Return<I, T> {
    pub fn new(value: T) -> Self {
        Return {
            value,
            _input: PhantomData,
        }
    }
}

impl<I, T: Clone> Clone for Return<I, T> {
    fn clone(&self) -> Self {
        Return::new(self.value.clone())
    }
}

impl<I, T: fmt::Debug> fmt::Debug for Return<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Return").field("value", &self.value).finish()
    }
}

impl<I, T> Parser for Return<I, T>
where
    I: Input,
    T: Clone,
{
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> Outcome<(T, I)> {
        Outcome::success((self.value.clone(), input))
    }
}

/// Convenience function to create a Return parser
///
/// Named `ret` because `return` is a keyword.
pub fn ret<I: Input, T: Clone>(value: T) -> Return<I, T> {
    Return::new(value)
}

/// Parser combinator that applies a parsed function to a parsed argument
///
/// The function parser runs first, then the argument parser on what it left;
/// the first failure in that order is returned unchanged.
#[derive(Debug, Clone)]
pub struct Apply<PA, PF> {
    sequenced: AndThen<PF, PA>,
}

impl<PA, PF> Apply<PA, PF> {
    pub fn new(argument: PA, function: PF) -> Self {
        Apply {
            sequenced: AndThen::new(function, argument),
        }
    }
}

impl<PA, PF, F, B> Parser for Apply<PA, PF>
where
    PA: Parser,
    PF: Parser<Input = PA::Input, Output = F>,
    F: FnOnce(PA::Output) -> B,
{
    type Input = PA::Input;
    type Output = B;

    fn parse(&self, input: Self::Input) -> Outcome<(Self::Output, Self::Input)> {
        self.sequenced
            .parse(input)
            .map(|((function, argument), rest)| (function(argument), rest))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<PA, PF, F, B>(argument: PA, function: PF) -> Apply<PA, PF>
where
    PA: Parser,
    PF: Parser<Input = PA::Input, Output = F>,
    F: FnOnce(PA::Output) -> B,
{
    Apply::new(argument, function)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt: Parser + Sized {
    /// Feed this parser's result to the function produced by `function`
    fn apply<PF, F, B>(self, function: PF) -> Apply<Self, PF>
    where
        PF: Parser<Input = Self::Input, Output = F>,
        F: FnOnce(Self::Output) -> B,
    {
        Apply::new(self, function)
    }
}

/// Implement ApplyExt for all parsers
impl<P> ApplyExt for P where P: Parser {}

/// Lift a binary function over two parsers
///
/// `f` is curried into a [`Return`] parser and applied to `px` then `py`,
/// so the run order is `px` followed by `py` and the first failure wins.
///
/// ```
/// use applicomb::{Outcome, Parser, char_parser, lift2};
///
/// let pair = lift2(|a: char, b: char| format!("{b}{a}"), char_parser('x'), char_parser('y'));
/// assert_eq!(pair.parse("xyz"), Outcome::success(("yx".to_string(), "z")));
/// ```
pub fn lift2<PX, PY, F, C>(
    f: F,
    px: PX,
    py: PY,
) -> impl Parser<Input = PX::Input, Output = C>
where
    PX: Parser,
    PY: Parser<Input = PX::Input>,
    F: Fn(PX::Output, PY::Output) -> C + Clone,
{
    let curried = move |x: PX::Output| {
        let f = f.clone();
        move |y: PY::Output| f(x, y)
    };
    apply(py, apply(px, ret(curried)))
}
