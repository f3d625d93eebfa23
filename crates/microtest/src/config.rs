//! Run-wide output configuration.

use colored::Colorize;

/// Output toggles for a test run.
///
/// Every flag is an independent boolean with no combination constraints.
/// Defaults favor terminal compatibility: ASCII checkmarks and timing on,
/// verbosity off. The config is set up by the host before running tests and
/// only read afterwards, by the session and the reporter.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Render `[OK]`/`[FAIL]` instead of `✓`/`✗`.
    pub ascii_checkmarks: bool,
    /// Append per-test and total elapsed times to output lines.
    pub show_performance: bool,
    /// Announce each test name before executing it.
    pub verbose: bool,
    /// Treat a run with zero executed tests as a success.
    pub allow_empty: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ascii_checkmarks: true,
            show_performance: true,
            verbose: false,
            allow_empty: false,
            no_color: false,
        }
    }
}

impl RunConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use ASCII checkmarks.
    pub fn with_ascii_checkmarks(mut self, ascii: bool) -> Self {
        self.ascii_checkmarks = ascii;
        self
    }

    /// Use `✓`/`✗` instead of `[OK]`/`[FAIL]`.
    pub fn with_unicode_checkmarks(mut self) -> Self {
        self.ascii_checkmarks = false;
        self
    }

    /// Set whether to show timing information.
    pub fn with_show_performance(mut self, show: bool) -> Self {
        self.show_performance = show;
        self
    }

    /// Set whether to announce tests before execution.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set whether a run of zero tests counts as success.
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Disable colored output.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Checkmark for a passing line.
    pub fn success_mark(&self) -> &'static str {
        if self.ascii_checkmarks {
            "[OK]"
        } else {
            "✓"
        }
    }

    /// Checkmark for a failing line.
    pub fn fail_mark(&self) -> &'static str {
        if self.ascii_checkmarks {
            "[FAIL]"
        } else {
            "✗"
        }
    }

    /// Success mark, green unless colors are off.
    pub(crate) fn painted_success_mark(&self) -> String {
        if self.no_color {
            self.success_mark().to_string()
        } else {
            self.success_mark().green().to_string()
        }
    }

    /// Fail mark, red unless colors are off.
    pub(crate) fn painted_fail_mark(&self) -> String {
        if self.no_color {
            self.fail_mark().to_string()
        } else {
            self.fail_mark().red().to_string()
        }
    }
}
