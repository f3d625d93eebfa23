//! End-to-end tests: session execution, aggregation, and reporting.

use microtest::{assert, RunConfig, TestError, TestOutcome, TestReporter, TestSession, TestStatus};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn quiet_config() -> RunConfig {
    RunConfig::default().with_no_color(true)
}

#[test]
fn three_tests_one_failure_end_to_end() {
    let mut session = TestSession::new(quiet_config());

    session.run("first", || {
        assert::eq(1 + 1, 2)?;
        Ok(())
    });
    session.run("second", || {
        assert::eq(5, 6)?;
        Ok(())
    });
    session.run("third", || {
        assert::str_contains("hello world", "world")?;
        Ok(())
    });

    let summary = session.finalize();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.success);

    let (text, _) = TestReporter::new(session.config()).render(session.outcomes());
    assert!(text.contains("Total: 3 tests, 2 passed [OK], 1 failed [FAIL]"));
    assert!(text.contains("Assertion failed: 5 != 6"));
    assert!(text.contains("FAILURE"));
}

#[test]
fn all_passing_run_succeeds() {
    let mut session = TestSession::new(quiet_config());
    session.run("a", || Ok(()));
    session.run("b", || Ok(()));

    let summary = session.finalize();
    assert_eq!((summary.total, summary.passed, summary.failed), (2, 2, 0));
    assert!(summary.success);
}

#[test]
fn empty_run_is_a_failure_unless_allowed() {
    let session = TestSession::new(quiet_config());
    assert!(!session.finalize().success);

    let session = TestSession::new(quiet_config().with_allow_empty(true));
    let summary = session.finalize();
    assert!(summary.success);
    assert_eq!(summary.total, 0);
}

#[test]
fn empty_run_rule_is_independent_of_failure_rule() {
    // allow_empty does not rescue a run that actually failed
    let mut session = TestSession::new(quiet_config().with_allow_empty(true));
    session.run("bad", || {
        assert::is_true(false, "false")?;
        Ok(())
    });
    assert!(!session.finalize().success);
}

#[test]
fn grouped_outcomes_share_a_heading_in_original_order() {
    let mut session = TestSession::new(quiet_config());
    session.run_in("Calculator", "Addition", || Ok(()));
    session.run("standalone", || Ok(()));
    session.run_in("Calculator", "Subtraction", || Ok(()));

    let (text, _) = TestReporter::new(session.config()).render(session.outcomes());

    // one shared heading, members in execution order
    assert_eq!(text.matches("Calculator:").count(), 1);
    let addition = text.find("[OK] Addition").unwrap();
    let subtraction = text.find("[OK] Subtraction").unwrap();
    assert!(addition < subtraction);

    // ungrouped outcome appears before any named heading
    let standalone = text.find("[OK] standalone").unwrap();
    let heading = text.find("Calculator:").unwrap();
    assert!(standalone < heading);
}

#[test]
fn unexpected_error_and_panic_both_fail_the_run() {
    let mut session = TestSession::new(quiet_config());
    session.run("io_error", || {
        Err(TestError::unexpected(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        )))
    });
    session.run("panics", || panic!("kaboom"));

    assert_eq!(session.outcomes().len(), 2);
    assert_eq!(
        session.outcomes()[0].status,
        TestStatus::Error {
            error: "disk on fire".to_string()
        }
    );
    assert_eq!(
        session.outcomes()[1].status,
        TestStatus::Error {
            error: "kaboom".to_string()
        }
    );

    let summary = session.finalize();
    assert_eq!(summary.failed, 2);
    assert!(!summary.success);
}

#[test]
fn failure_origin_names_the_enclosing_test() {
    let mut session = TestSession::new(quiet_config());
    session.run_in("Strings", "contains", || {
        assert::str_contains("hello", "absent")?;
        Ok(())
    });

    let error = session.outcomes()[0].status.error().unwrap().to_string();
    assert!(error.contains("session_tests.rs"));
    assert!(error.contains("in Strings::contains"));
}

#[test]
fn timing_can_be_hidden() {
    let mut session = TestSession::new(quiet_config().with_show_performance(false));
    session.run("a", || Ok(()));

    let (text, _) = TestReporter::new(session.config()).render(session.outcomes());
    assert!(!text.contains("ms"));
}

#[test]
fn elapsed_time_reflects_body_duration() {
    let mut session = TestSession::new(quiet_config());
    session.run("sleepy", || {
        std::thread::sleep(std::time::Duration::from_millis(10));
        Ok(())
    });

    assert!(session.outcomes()[0].elapsed_ms >= 10.0);
}

proptest! {
    // For any sequence of N tests with F failing, the reporter reports
    // exactly N total, N-F passed, F failed, and fails iff F > 0.
    #[test]
    fn totals_always_match_outcomes(flags in proptest::collection::vec(any::<bool>(), 1..20)) {
        let config = quiet_config();
        let outcomes: Vec<TestOutcome> = flags
            .iter()
            .enumerate()
            .map(|(i, &pass)| TestOutcome {
                name: format!("t{}", i),
                group: None,
                status: if pass {
                    TestStatus::Pass
                } else {
                    TestStatus::Fail {
                        error: "boom".to_string(),
                    }
                },
                elapsed_ms: 0.0,
            })
            .collect();

        let failing = flags.iter().filter(|&&pass| !pass).count();
        let (_, summary) = TestReporter::new(&config).render(&outcomes);

        prop_assert_eq!(summary.total, flags.len());
        prop_assert_eq!(summary.passed, flags.len() - failing);
        prop_assert_eq!(summary.failed, failing);
        prop_assert_eq!(summary.success, failing == 0);
    }
}
