#![allow(dead_code)]

use applicomb::{Parser, SelectExt, any_of, lift2};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// One decimal digit as a char
pub fn digit() -> impl Parser<Input = &'static str, Output = char> {
    any_of("0123456789".chars()).expect("digit set is not empty")
}

/// Exactly three decimal digits, read as one number
pub fn three_digits() -> impl Parser<Input = &'static str, Output = i32> {
    let first_two = lift2(|a: char, b: char| format!("{a}{b}"), digit(), digit());
    lift2(
        |prefix: String, c: char| format!("{prefix}{c}"),
        first_two,
        digit(),
    )
    .select(|digits: String| digits.parse::<i32>().unwrap_or_default())
}
