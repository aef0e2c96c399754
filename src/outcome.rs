use std::fmt;

/// Outcome of running a parser: either a produced value or a failure message
///
/// Unlike `std::result::Result` the failure side is always a plain diagnostic
/// string. Use [`Outcome::into_result`] to cross into `?`-based code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success payload, or `None` on failure
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, or `None` on success
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    /// Transform the success payload; failures pass through untouched and
    /// `f` is not called.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Continue with `f` on success, short-circuit on failure
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success {:?}", value),
            Outcome::Failure(message) => write!(f, "Failure \"{}\"", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&42));
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.into_value(), Some(42));
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<i32> = Outcome::failure("No more input");
        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.message(), Some("No more input"));
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn test_map_skips_failure() {
        let outcome: Outcome<i32> = Outcome::failure("boom");
        let mapped = outcome.map(|_| -> i32 { panic!("mapper must not run") });
        assert_eq!(mapped, Outcome::failure("boom"));

        assert_eq!(Outcome::success(2).map(|n| n * 10), Outcome::success(20));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let chained = Outcome::success(1).and_then(|n| Outcome::success(n + 1));
        assert_eq!(chained, Outcome::success(2));

        let failed: Outcome<i32> = Outcome::success(1).and_then(|_| Outcome::failure("second"));
        assert_eq!(failed, Outcome::failure("second"));

        let skipped: Outcome<i32> =
            Outcome::<i32>::failure("first").and_then(|_| -> Outcome<i32> { panic!("must not run") });
        assert_eq!(skipped, Outcome::failure("first"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::success('a').into_result(), Ok('a'));
        assert_eq!(
            Outcome::<char>::failure("nope").into_result(),
            Err("nope".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::success(('A', "BC")).to_string(), "Success ('A', \"BC\")");
        assert_eq!(
            Outcome::<char>::failure("No more input").to_string(),
            "Failure \"No more input\""
        );
    }
}
