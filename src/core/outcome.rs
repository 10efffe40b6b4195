use std::fmt;

/// Result of an operation whose failures are recovered locally.
///
/// The DB and HTTP wrappers log connectivity failures and keep going instead
/// of propagating an error; callers treat `Failed` as "the operation did not
/// happen". Unlike a bare `Option`, the failure reason stays inspectable.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation completed and produced a value.
    Ok(T),
    /// The operation was swallowed; the reason is kept for inspection.
    Failed(String),
}

impl<T> Outcome<T> {
    /// Wrap a failure reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Outcome::Failed(reason.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Convert into `Option`, discarding the failure reason.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// The failure reason, if the operation failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Failed(reason) => Some(reason),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Failed(reason) => Outcome::Failed(reason.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Failed(reason) => Outcome::Failed(reason),
        }
    }

    /// Unwrap the value, panicking with the failure reason otherwise.
    ///
    /// Intended for test bodies that require the operation to have happened.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Failed(reason) => panic!("{msg}: {reason}"),
        }
    }
}

impl<T, E: fmt::Display> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}
