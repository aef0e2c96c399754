use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The choice is biased: a success from the first parser is returned
/// untouched and the second never runs. On failure the second parser starts
/// from the same input the first one saw and its outcome is returned as-is,
/// so only the second parser's diagnostic reaches the caller.
#[derive(Debug, Clone)]
pub struct OrElse<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrElse { parser1, parser2 }
    }
}

impl<P1, P2> Parser for OrElse<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse(&self, input: Self::Input) -> Outcome<(Self::Output, Self::Input)> {
        match self.parser1.parse(input) {
            Outcome::Success(result) => Outcome::Success(result),
            Outcome::Failure(discarded) => {
                tracing::trace!(%discarded, "first alternative failed, trying second");
                self.parser2.parse(input)
            }
        }
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrElseExt: Parser + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<Input = Self::Input, Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrElseExt for all parsers
impl<P> OrElseExt for P where P: Parser {}

/// Convenience function to create an OrElse parser
pub fn or_else<P1, P2>(parser1: P1, parser2: P2) -> OrElse<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    OrElse::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_parser::char_parser;
    use crate::select::SelectExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always fails with a fixed message, counting how often it ran
    struct CountingFailure<'a> {
        calls: &'a AtomicUsize,
    }

    impl<'a> Parser for CountingFailure<'a> {
        type Input = &'static str;
        type Output = char;

        fn parse(&self, _input: &'static str) -> Outcome<(char, &'static str)> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::failure("stub failure")
        }
    }

    #[test]
    fn test_or_else_first_succeeds() {
        let parser = or_else(char_parser('a'), char_parser('b'));
        assert_eq!(parser.parse("abc"), Outcome::success(('a', "bc")));
    }

    #[test]
    fn test_or_else_second_succeeds() {
        let parser = or_else(char_parser('a'), char_parser('b'));
        assert_eq!(parser.parse("bcd"), Outcome::success(('b', "cd")));
    }

    #[test]
    fn test_or_else_both_fail_reports_second() {
        let parser = or_else(char_parser('a'), char_parser('b'));
        assert_eq!(
            parser.parse("xyz"),
            Outcome::failure("Expecting 'b'. Got 'x'.")
        );
    }

    #[test]
    fn test_second_not_run_when_first_succeeds() {
        let calls = AtomicUsize::new(0);
        let parser = char_parser('a').or_else(CountingFailure { calls: &calls });

        assert_eq!(parser.parse("abc"), Outcome::success(('a', "bc")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(parser.parse("xbc"), Outcome::failure("stub failure"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_second_sees_unconsumed_input() {
        let first = char_parser('a').select(|_| 'z');
        let parser = first.or_else(char_parser('q'));
        assert_eq!(parser.parse("q!"), Outcome::success(('q', "!")));
    }

    #[test]
    fn test_or_else_is_biased() {
        let digit_one = char_parser('1').select(|_| "first");
        let also_one = char_parser('1').select(|_| "second");

        let parser = digit_one.or_else(also_one);
        assert_eq!(parser.parse("1"), Outcome::success(("first", "")));
    }

    #[test]
    fn test_or_else_method_chain() {
        let parser = char_parser('a')
            .or_else(char_parser('b'))
            .or_else(char_parser('c'))
            .or_else(char_parser('d'));

        assert_eq!(parser.parse("d"), Outcome::success(('d', "")));
        assert_eq!(
            parser.parse("e"),
            Outcome::failure("Expecting 'd'. Got 'e'.")
        );
    }
}
