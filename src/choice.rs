use crate::boxed::BoxedParser;
use crate::char_parser::CharParser;
use crate::error::CombinatorError;
use crate::input::Input;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that tries a list of parsers in order
///
/// Behaves as a left fold of [`OrElse`](crate::OrElse) over the list, so
/// `choice([p0, p1, p2])` acts like `p0.or_else(p1).or_else(p2)`: the first
/// success wins and, when all fail, only the last parser's message is kept.
/// The alternatives are kept in a flat list and tried in a loop, so a choice
/// over many thousands of parsers runs in constant stack depth.
///
/// Every alternative must be `Send + Sync`, since they are stored as
/// [`BoxedParser`]s. A `select` closure capturing an `Rc` or `RefCell` can't
/// be used, even if the parser stays on one thread.
#[derive(Debug, Clone)]
pub struct Choice<'p, I, T> {
    parsers: Vec<BoxedParser<'p, I, T>>,
}

impl<'p, I: Input + 'p, T: 'p> Choice<'p, I, T> {
    /// Collect `parsers` into a single parser
    ///
    /// Fails with [`CombinatorError::EmptyChoice`] if `parsers` is empty,
    /// since there is no parser to fall back to.
    pub fn new<P, It>(parsers: It) -> Result<Self, CombinatorError>
    where
        It: IntoIterator<Item = P>,
        P: Parser<Input = I, Output = T> + Send + Sync + 'p,
    {
        let parsers: Vec<_> = parsers.into_iter().map(BoxedParser::new).collect();
        if parsers.is_empty() {
            tracing::debug!("rejecting choice over an empty sequence");
            return Err(CombinatorError::EmptyChoice);
        }

        tracing::trace!(alternatives = parsers.len(), "built choice");
        Ok(Choice { parsers })
    }

    /// Number of parsers in this choice
    pub fn alternatives(&self) -> usize {
        self.parsers.len()
    }
}

impl<'p, I: Input, T> Parser for Choice<'p, I, T> {
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> Outcome<(T, I)> {
        // Never returned: construction rejects an empty list.
        let mut outcome = Outcome::failure(CombinatorError::EmptyChoice.to_string());

        for parser in &self.parsers {
            match parser.parse(input) {
                Outcome::Success(result) => return Outcome::Success(result),
                Outcome::Failure(message) => {
                    tracing::trace!(%message, "alternative failed");
                    outcome = Outcome::Failure(message);
                }
            }
        }

        outcome
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'p, P, It>(parsers: It) -> Result<Choice<'p, P::Input, P::Output>, CombinatorError>
where
    It: IntoIterator<Item = P>,
    P: Parser + Send + Sync + 'p,
    P::Input: 'p,
    P::Output: 'p,
{
    Choice::new(parsers)
}

/// Match the first of `elements`, in order, that equals the head of the input
///
/// Builds one [`CharParser`] per element and folds them with [`choice`], so
/// on a miss the message names the last element tried.
pub fn any_of<'p, I, It>(elements: It) -> Result<Choice<'p, I, I::Element>, CombinatorError>
where
    I: Input + 'p,
    I::Element: Send + Sync + 'p,
    It: IntoIterator<Item = I::Element>,
{
    Choice::new(elements.into_iter().map(CharParser::<I>::new))
}
