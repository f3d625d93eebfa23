//! Test execution: the single recovery boundary for failing bodies.

use crate::config::RunConfig;
use crate::failure::{catch_silent, panic_message, TestError};
use crate::outcome::{TestOutcome, TestStatus};
use crate::reporter::{RunSummary, TestReporter};
use std::time::Instant;

/// Verbose announcement printed before a body runs.
fn announcement(display: &str) -> String {
    format!("Running test: {}", display)
}

/// Immediate console line for a passing test.
fn success_line(config: &RunConfig, display: &str, timing: &str) -> String {
    format!(
        "{} Test [{}] succeeded{}",
        config.painted_success_mark(),
        display,
        timing
    )
}

/// Immediate console line for a failing test. `label` names the failure
/// source: `failed!` for assertions, `failed with unexpected error!` or
/// `failed with unexpected panic!` otherwise.
fn failure_line(config: &RunConfig, display: &str, label: &str, error: &str, timing: &str) -> String {
    format!(
        "{} Test [{}] {}, error: {}{}",
        config.painted_fail_mark(),
        display,
        label,
        error,
        timing
    )
}

/// Owns the run configuration and the ordered outcomes of one test run.
///
/// A fresh session starts empty, so independent runs within one process
/// never see each other's outcomes. All errors a body can produce — a
/// failed assertion, a returned non-assertion error, or a panic — are
/// absorbed here and converted into exactly one recorded [`TestOutcome`];
/// [`TestSession::run`] itself never fails.
pub struct TestSession {
    config: RunConfig,
    outcomes: Vec<TestOutcome>,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl TestSession {
    /// Create a session with the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            outcomes: Vec::new(),
        }
    }

    /// The configuration this session runs under.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Outcomes recorded so far, in execution order.
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Execute one ungrouped test body.
    pub fn run<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), TestError>,
    {
        self.run_test(None, name, body);
    }

    /// Execute one test body under a group label.
    ///
    /// Identical semantics to [`TestSession::run`] except for the group
    /// field and the `Group::Name` display form.
    pub fn run_in<F>(&mut self, group: &str, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), TestError>,
    {
        self.run_test(Some(group), name, body);
    }

    fn run_test<F>(&mut self, group: Option<&str>, name: &str, body: F)
    where
        F: FnOnce() -> Result<(), TestError>,
    {
        let display = match group {
            Some(group) => format!("{}::{}", group, name),
            None => name.to_string(),
        };

        if self.config.verbose {
            println!("{}", announcement(&display));
        }

        let start = Instant::now();
        let result = catch_silent(body);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let timing = if self.config.show_performance {
            format!(" ({:.3}ms)", elapsed_ms)
        } else {
            String::new()
        };

        let (status, line) = match result {
            Ok(Ok(())) => (
                TestStatus::Pass,
                success_line(&self.config, &display, &timing),
            ),
            Ok(Err(TestError::Assertion(mut failure))) => {
                failure.in_test(&display);
                let error = failure.to_string();
                let line = failure_line(&self.config, &display, "failed!", &error, &timing);
                (TestStatus::Fail { error }, line)
            }
            Ok(Err(TestError::Unexpected(err))) => {
                let error = err.to_string();
                let line = failure_line(
                    &self.config,
                    &display,
                    "failed with unexpected error!",
                    &error,
                    &timing,
                );
                (TestStatus::Error { error }, line)
            }
            Err(payload) => {
                let error = panic_message(payload.as_ref());
                let line = failure_line(
                    &self.config,
                    &display,
                    "failed with unexpected panic!",
                    &error,
                    &timing,
                );
                (TestStatus::Error { error }, line)
            }
        };
        println!("{}", line);

        self.outcomes.push(TestOutcome {
            name: name.to_string(),
            group: group.map(str::to_string),
            status,
            elapsed_ms,
        });
    }

    /// Print the grouped summary block and produce the run verdict.
    pub fn finalize(&self) -> RunSummary {
        TestReporter::new(&self.config).report(&self.outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;
    use crate::failure::Failure;

    fn quiet() -> TestSession {
        TestSession::new(RunConfig::default().with_no_color(true))
    }

    #[test]
    fn passing_body_records_pass() {
        let mut session = quiet();
        session.run("ok", || Ok(()));

        assert_eq!(session.outcomes().len(), 1);
        let outcome = &session.outcomes()[0];
        assert!(outcome.is_pass());
        assert_eq!(outcome.name, "ok");
        assert_eq!(outcome.group, None);
        assert!(outcome.elapsed_ms >= 0.0);
    }

    #[test]
    fn assertion_failure_records_full_diagnostic() {
        let mut session = quiet();
        session.run("bad", || {
            assert::eq(5, 6)?;
            Ok(())
        });

        let outcome = &session.outcomes()[0];
        assert!(!outcome.is_pass());
        let error = outcome.status.error().unwrap();
        assert!(error.contains("Assertion failed: 5 != 6"));
        assert!(error.contains("runner.rs"));
        assert!(error.contains("in bad"));
    }

    #[test]
    fn grouped_failure_uses_display_name_in_origin() {
        let mut session = quiet();
        session.run_in("Math", "bad", || Err(Failure::here("nope").into()));

        let outcome = &session.outcomes()[0];
        assert_eq!(outcome.group.as_deref(), Some("Math"));
        assert!(outcome.status.error().unwrap().contains("in Math::bad"));
    }

    #[test]
    fn unexpected_error_is_distinct_from_assertion() {
        let mut session = quiet();
        session.run("io", || {
            Err(TestError::unexpected(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        });

        let outcome = &session.outcomes()[0];
        assert_eq!(
            outcome.status,
            TestStatus::Error {
                error: "disk on fire".to_string()
            }
        );
    }

    #[test]
    fn panicking_body_is_absorbed() {
        let mut session = quiet();
        session.run("explodes", || panic!("kaboom"));
        session.run("after", || Ok(()));

        assert_eq!(session.outcomes().len(), 2);
        assert_eq!(
            session.outcomes()[0].status,
            TestStatus::Error {
                error: "kaboom".to_string()
            }
        );
        assert!(session.outcomes()[1].is_pass());
    }

    #[test]
    fn exact_progress_line_formats() {
        let config = RunConfig::default().with_no_color(true);

        assert_eq!(
            success_line(&config, "alpha", " (1.000ms)"),
            "[OK] Test [alpha] succeeded (1.000ms)"
        );
        assert_eq!(success_line(&config, "alpha", ""), "[OK] Test [alpha] succeeded");

        assert_eq!(
            failure_line(
                &config,
                "Math::beta",
                "failed!",
                "Assertion failed: 5 != 6 at t.rs:1 in Math::beta",
                " (2.500ms)"
            ),
            "[FAIL] Test [Math::beta] failed!, error: \
             Assertion failed: 5 != 6 at t.rs:1 in Math::beta (2.500ms)"
        );
        assert_eq!(
            failure_line(
                &config,
                "io",
                "failed with unexpected error!",
                "disk on fire",
                ""
            ),
            "[FAIL] Test [io] failed with unexpected error!, error: disk on fire"
        );
        assert_eq!(
            failure_line(
                &config,
                "explodes",
                "failed with unexpected panic!",
                "kaboom",
                ""
            ),
            "[FAIL] Test [explodes] failed with unexpected panic!, error: kaboom"
        );
    }

    #[test]
    fn progress_lines_use_configured_marks() {
        let config = RunConfig::default()
            .with_no_color(true)
            .with_unicode_checkmarks();

        assert_eq!(success_line(&config, "alpha", ""), "✓ Test [alpha] succeeded");
        assert_eq!(
            failure_line(&config, "beta", "failed!", "boom", ""),
            "✗ Test [beta] failed!, error: boom"
        );
    }

    #[test]
    fn verbose_announcement_format() {
        assert_eq!(
            announcement("Strings::contains"),
            "Running test: Strings::contains"
        );
    }

    #[test]
    fn absorbed_panic_does_not_invoke_the_panic_hook() {
        use std::sync::atomic::{AtomicBool, Ordering};

        static HOOK_FIRED: AtomicBool = AtomicBool::new(false);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| HOOK_FIRED.store(true, Ordering::SeqCst)));

        let mut session = quiet();
        session.run("explodes", || panic!("kaboom"));

        std::panic::set_hook(previous);
        assert!(!HOOK_FIRED.load(Ordering::SeqCst));
        assert!(!session.outcomes()[0].is_pass());
    }

    #[test]
    fn one_outcome_per_invocation_in_execution_order() {
        let mut session = quiet();
        session.run("first", || Ok(()));
        session.run_in("G", "second", || Err(Failure::new("x").into()));
        session.run("third", || Ok(()));

        let names: Vec<_> = session.outcomes().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
