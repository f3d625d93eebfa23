//! Behavior of a run with zero executed tests.
//!
//! An empty run fails by default (it usually means a wiring bug); opting in
//! with `allow_empty` turns it into a success.

use microtest::{RunConfig, TestSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("======================================");
    println!("microtest - No Tests Demo");
    println!("======================================\n");

    println!("No tests registered or executed; this run fails by default.");

    let session = TestSession::new(RunConfig::default());
    // No tests executed on purpose.
    session.finalize().exit_code()
}
