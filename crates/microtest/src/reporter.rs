//! Summary reporting and run verdict.

use crate::config::RunConfig;
use crate::outcome::TestOutcome;
use colored::Colorize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::process::ExitCode;

const BANNER: &str = "======================================";
const RULE: &str = "--------------------------------------";

/// Aggregate verdict of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of executed tests.
    pub total: usize,
    /// Number of passing tests.
    pub passed: usize,
    /// Number of failing tests, whatever the failure source.
    pub failed: usize,
    /// Sum of all elapsed times in milliseconds.
    pub total_ms: f64,
    /// Overall verdict: no failures, and the run was non-empty or empty
    /// runs were explicitly allowed.
    pub success: bool,
}

impl RunSummary {
    /// Process exit status for this verdict.
    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Renders the grouped summary block for a finished run.
///
/// Grouping is a derived view: outcomes are partitioned by group label at
/// report time, the unnamed partition first and named groups in alphabetical
/// order, with execution order preserved inside each partition.
pub struct TestReporter<'a> {
    config: &'a RunConfig,
}

impl<'a> TestReporter<'a> {
    /// Create a reporter reading the given configuration.
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Print the summary block and return the verdict.
    pub fn report(&self, outcomes: &[TestOutcome]) -> RunSummary {
        let (text, summary) = self.render(outcomes);
        print!("{}", text);
        summary
    }

    /// Build the summary block without printing it.
    pub fn render(&self, outcomes: &[TestOutcome]) -> (String, RunSummary) {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", BANNER);
        let _ = writeln!(out, "Test Summary:");
        let _ = writeln!(out, "{}", BANNER);

        if outcomes.is_empty() {
            let _ = writeln!(out, "No tests were run!");
            let _ = writeln!(out, "{}", BANNER);
            let success = self.config.allow_empty;
            if success {
                let _ = writeln!(out, "{} (empty tests allowed)", self.verdict_text(true));
            } else {
                let _ = writeln!(out, "{}", self.verdict_text(false));
            }
            return (
                out,
                RunSummary {
                    total: 0,
                    passed: 0,
                    failed: 0,
                    total_ms: 0.0,
                    success,
                },
            );
        }

        // Derived grouping view; "" keys the implicit ungrouped partition
        // and sorts ahead of every named group.
        let mut groups: BTreeMap<&str, Vec<&TestOutcome>> = BTreeMap::new();
        let mut total_ms = 0.0;
        for outcome in outcomes {
            groups
                .entry(outcome.group.as_deref().unwrap_or(""))
                .or_default()
                .push(outcome);
            total_ms += outcome.elapsed_ms;
        }

        let mut passed = 0;
        let mut failed = 0;
        for (group, members) in &groups {
            if !group.is_empty() {
                let _ = writeln!(out, "\n{}:", group);
            }
            for outcome in members {
                let timing = self.timing_suffix(outcome.elapsed_ms);
                match outcome.status.error() {
                    None => {
                        let _ = writeln!(
                            out,
                            "{} {}{}",
                            self.config.painted_success_mark(),
                            outcome.name,
                            timing
                        );
                        passed += 1;
                    }
                    Some(error) => {
                        let _ = writeln!(
                            out,
                            "{} {} - {}{}",
                            self.config.painted_fail_mark(),
                            outcome.name,
                            error,
                            timing
                        );
                        failed += 1;
                    }
                }
            }
        }

        let _ = writeln!(out, "{}", RULE);
        let _ = write!(
            out,
            "Total: {} tests, {} passed {}, {} failed {}",
            passed + failed,
            passed,
            self.config.painted_success_mark(),
            failed,
            self.config.painted_fail_mark()
        );
        if self.config.show_performance {
            let _ = write!(out, " (Total time: {:.3}ms)", total_ms);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", BANNER);

        let success = failed == 0;
        let _ = writeln!(out, "{}", self.verdict_text(success));

        (
            out,
            RunSummary {
                total: outcomes.len(),
                passed,
                failed,
                total_ms,
                success,
            },
        )
    }

    fn timing_suffix(&self, elapsed_ms: f64) -> String {
        if self.config.show_performance {
            format!(" ({:.3}ms)", elapsed_ms)
        } else {
            String::new()
        }
    }

    fn verdict_text(&self, success: bool) -> String {
        match (success, self.config.no_color) {
            (true, true) => "SUCCESS".to_string(),
            (false, true) => "FAILURE".to_string(),
            (true, false) => "SUCCESS".green().bold().to_string(),
            (false, false) => "FAILURE".red().bold().to_string(),
        }
    }
}
