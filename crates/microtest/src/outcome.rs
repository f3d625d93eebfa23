//! Recorded result of a single test execution.

/// How a test finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    /// Body returned normally.
    Pass,
    /// Body aborted on a failed assertion.
    Fail {
        /// Fully formatted failure text (explanation plus origin).
        error: String,
    },
    /// Body aborted with a non-assertion error or a panic.
    Error {
        /// The error's own description.
        error: String,
    },
}

impl TestStatus {
    /// Check if this status is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }

    /// Error text; `None` exactly when the test passed.
    pub fn error(&self) -> Option<&str> {
        match self {
            TestStatus::Pass => None,
            TestStatus::Fail { error } | TestStatus::Error { error } => Some(error),
        }
    }
}

/// Immutable record of one executed test, owned by the session in
/// execution order.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    /// Test name.
    pub name: String,
    /// Group label; `None` means ungrouped.
    pub group: Option<String>,
    /// How the test finished.
    pub status: TestStatus,
    /// Wall-clock duration of the body in milliseconds.
    pub elapsed_ms: f64,
}

impl TestOutcome {
    /// Check if this outcome is a pass.
    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }

    /// `Group::Name` for grouped tests, the bare name otherwise.
    pub fn display_name(&self) -> String {
        match &self.group {
            Some(group) => format!("{}::{}", group, self.name),
            None => self.name.clone(),
        }
    }
}
