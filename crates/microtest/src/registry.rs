//! Explicit test registration.
//!
//! Tests are registered as ordinary (group, name, body) triples and executed
//! in insertion order by [`TestRegistry::run_all`] — registration and
//! execution are separate steps, so the host can build the run
//! programmatically before driving it through a session.

use crate::failure::TestError;
use crate::runner::TestSession;

type TestBody = Box<dyn FnOnce() -> Result<(), TestError>>;

struct RegisteredTest {
    group: Option<String>,
    name: String,
    body: TestBody,
}

/// Ordered collection of registered, not-yet-executed tests.
#[derive(Default)]
pub struct TestRegistry {
    tests: Vec<RegisteredTest>,
}

impl TestRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ungrouped test.
    pub fn register<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), TestError> + 'static,
    {
        self.tests.push(RegisteredTest {
            group: None,
            name: name.to_string(),
            body: Box::new(body),
        });
    }

    /// Register a test under a group label.
    pub fn register_in<F>(&mut self, group: &str, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), TestError> + 'static,
    {
        self.tests.push(RegisteredTest {
            group: Some(group.to_string()),
            name: name.to_string(),
            body: Box::new(body),
        });
    }

    /// Number of registered tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if no tests are registered.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Run every registered test through the session, in insertion order.
    pub fn run_all(self, session: &mut TestSession) {
        for test in self.tests {
            match test.group {
                Some(group) => session.run_in(&group, &test.name, test.body),
                None => session.run(&test.name, test.body),
            }
        }
    }
}
