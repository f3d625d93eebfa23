//! Assertion failure signaling
//!
//! All assertion failures flow through the single [`Failure`] type; test
//! bodies propagate it with `?` and the session converts it into an outcome.
//! [`TestError`] adds the separate channel for non-assertion errors a body
//! may surface.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe, Location};
use thiserror::Error;

/// Origin placeholder when no location information was recorded.
const UNKNOWN: &str = "unknown";

/// A failed assertion, carrying the diagnostic message and its origin.
///
/// Raised by the predicates in [`crate::assert`] the moment a condition is
/// observed to be violated, and propagated until the session catches it.
/// Never stored beyond that point except as its rendered text inside a
/// [`crate::TestOutcome`].
#[derive(Debug, Clone, Error)]
#[error("{message} at {file}:{line} in {function}")]
pub struct Failure {
    message: String,
    file: String,
    line: u32,
    function: String,
}

impl Failure {
    /// Create a failure with no origin information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: UNKNOWN.to_string(),
            line: 0,
            function: UNKNOWN.to_string(),
        }
    }

    /// Create a failure located at the caller of the innermost
    /// `#[track_caller]` chain, i.e. the assertion call site in the test body.
    #[track_caller]
    pub fn here(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            file: location.file().to_string(),
            line: location.line(),
            function: UNKNOWN.to_string(),
        }
    }

    /// The diagnostic explanation, without origin.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source file of the failed assertion.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Source line of the failed assertion.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Enclosing test name, if one was recorded.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Attach the enclosing test name unless one was already recorded.
    pub(crate) fn in_test(&mut self, name: &str) {
        if self.function == UNKNOWN {
            self.function = name.to_string();
        }
    }
}

/// Everything that can abort a test body.
#[derive(Debug, Error)]
pub enum TestError {
    /// A predicate observed a violated condition.
    #[error(transparent)]
    Assertion(#[from] Failure),
    /// Any other error the body chose to surface.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl TestError {
    /// Wrap a non-assertion error into the unexpected channel.
    pub fn unexpected<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        TestError::Unexpected(err.into())
    }
}

/// Catch an unwinding panic with the default panic hook suppressed, so an
/// absorbed panic leaves no `thread '…' panicked at …` report on stderr.
/// The previous hook is reinstalled before returning.
pub(crate) fn catch_silent<R>(f: impl FnOnce() -> R) -> Result<R, Box<dyn Any + Send>> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = catch_unwind(AssertUnwindSafe(f));
    std::panic::set_hook(previous);
    result
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
