//! Two-variant outcome of a lookup.

use std::fmt;

/// Outcome of a lookup: a value, or a message explaining why there is none.
///
/// Expected failures such as a malformed ZIP code, a non-2xx response or an
/// unreadable body travel as [`LookupResult::Failure`] instead of an error, and
/// compose with [`map`](LookupResult::map) and
/// [`flat_map`](LookupResult::flat_map). Neither combinator calls its closure
/// on a failure.
///
/// ```rust
/// use applicant_core::lookup::LookupResult;
///
/// let ok: LookupResult<u32> = LookupResult::success(20);
/// assert_eq!(ok.map(|n| n + 1).value_or(0), 21);
///
/// let failed: LookupResult<u32> = LookupResult::failure("timeout");
/// let chained = failed.flat_map(|n| LookupResult::success(n * 2));
/// assert_eq!(chained.error_message(), Some("timeout"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LookupResult<T> {
    Success(T),
    Failure(String),
}

impl<T> LookupResult<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Build a failure from any error, using its display text as the message.
    pub fn from_error<E: fmt::Display>(error: E) -> Self {
        Self::Failure(error.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Extract the value unconditionally.
    ///
    /// # Panics
    ///
    /// Panics on a [`LookupResult::Failure`]. Extracting from a failure is a
    /// programming error; use [`value_or`](Self::value_or) or match on the
    /// variant when failure is possible.
    #[track_caller]
    pub fn get_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => {
                panic!("Cannot get value from failed result: {}", message)
            }
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    pub fn value_or_else(self, default: impl FnOnce(&str) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => default(&message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LookupResult<U> {
        match self {
            Self::Success(value) => LookupResult::Success(f(value)),
            Self::Failure(message) => LookupResult::Failure(message),
        }
    }

    /// Like [`map`](Self::map) for a fallible transformation; an error
    /// returned by `f` becomes a new failure.
    pub fn try_map<U, E: fmt::Display>(self, f: impl FnOnce(T) -> Result<U, E>) -> LookupResult<U> {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => LookupResult::Success(mapped),
                Err(error) => LookupResult::from_error(error),
            },
            Self::Failure(message) => LookupResult::Failure(message),
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> LookupResult<U>) -> LookupResult<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(message) => LookupResult::Failure(message),
        }
    }

    /// Run `f` on the value, then hand the result back unchanged.
    pub fn if_success(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the failure message, then hand the result back unchanged.
    pub fn if_failure(self, f: impl FnOnce(&str)) -> Self {
        if let Self::Failure(message) = &self {
            f(message);
        }
        self
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for LookupResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<LookupResult<T>> for Result<T, String> {
    fn from(result: LookupResult<T>) -> Self {
        match result {
            LookupResult::Success(value) => Ok(value),
            LookupResult::Failure(message) => Err(message),
        }
    }
}

impl<T: fmt::Display> fmt::Display for LookupResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            Self::Failure(message) => write!(f, "Failure({})", message),
        }
    }
}
