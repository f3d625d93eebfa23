//! A run containing a deliberate failure: exits with a failing status.

use microtest::{assert, RunConfig, TestSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("======================================");
    println!("microtest - Failure Demo");
    println!("======================================\n");

    let mut session = TestSession::new(RunConfig::default());

    session.run("passing_before", || {
        assert::eq(1 + 1, 2)?;
        Ok(())
    });

    session.run("deliberate_failure", || {
        assert::eq(5, 6)?;
        Ok(())
    });

    session.run("passing_after", || {
        assert::str_contains("the run continues", "continues")?;
        Ok(())
    });

    session.finalize().exit_code()
}
