//! # Applicomb - Applicative Parser Combinators
//!
//! A small parser combinator engine: single-element primitives composed into
//! larger parsers by sequencing, ordered alternation, mapping and
//! applicative lifting.
//!
//! - **Pure values**: building a parser runs nothing; running it has no side
//!   effects, so one parser can be reused and shared across threads
//! - **Plain diagnostics**: a failed parse carries a message, and the first
//!   failure in left-to-right order is the one reported
//! - **Element agnostic**: parse `&str` by `char`, or any `&[T]` whose
//!   elements can be compared and displayed
//!
//! ```
//! use applicomb::{Parser, SelectExt, any_of, lift2};
//!
//! let digit = || any_of("0123456789".chars()).unwrap();
//! let two_digits = lift2(|a: char, b: char| format!("{a}{b}"), digit(), digit())
//!     .select(|s| s.parse::<u32>().unwrap_or(0));
//!
//! let (value, rest) = two_digits.parse("42!").into_value().unwrap();
//! assert_eq!(value, 42);
//! assert_eq!(rest, "!");
//! ```

pub mod and_then;
pub mod applicative;
pub mod boxed;
pub mod char_parser;
pub mod choice;
pub mod element;
pub mod error;
pub mod input;
pub mod or_else;
pub mod outcome;
pub mod parser;
pub mod select;

pub use and_then::{AndThen, AndThenExt, and_then};
pub use applicative::{Apply, ApplyExt, Return, apply, lift2, ret};
pub use boxed::{BoxedExt, BoxedParser};
pub use char_parser::{CharParser, char_parser};
pub use choice::{Choice, any_of, choice};
pub use element::Element;
pub use error::{CombinatorError, ParseFailure};
pub use input::Input;
pub use or_else::{OrElse, OrElseExt, or_else};
pub use outcome::Outcome;
pub use parser::Parser;
pub use select::{Select, SelectExt, select};
