//! microtest - Lightweight embeddable unit testing
//!
//! This library lets a host program define test cases, run them sequentially,
//! capture pass/fail outcomes with diagnostic context, and print a
//! human-readable summary with a matching process exit code:
//!
//! ```
//! use microtest::{assert, RunConfig, TestSession};
//!
//! let mut session = TestSession::new(RunConfig::default().with_no_color(true));
//! session.run("addition", || {
//!     assert::eq(2 + 2, 4)?;
//!     Ok(())
//! });
//! session.run_in("Strings", "contains", || {
//!     assert::str_contains("hello world", "world")?;
//!     Ok(())
//! });
//! let summary = session.finalize();
//! assert!(summary.success);
//! ```
//!
//! Tests run strictly sequentially in one thread. A body aborts on its first
//! failed assertion; the session absorbs the failure (and any unexpected
//! error or panic), records an outcome, and moves on to the next test.

/// microtest version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assert;
pub mod config;
pub mod failure;
pub mod outcome;
pub mod registry;
pub mod render;
pub mod reporter;
pub mod runner;

// Re-export commonly used types
pub use config::RunConfig;
pub use failure::{Failure, TestError};
pub use outcome::{TestOutcome, TestStatus};
pub use registry::TestRegistry;
pub use render::{Opaque, Render};
pub use reporter::{RunSummary, TestReporter};
pub use runner::TestSession;
