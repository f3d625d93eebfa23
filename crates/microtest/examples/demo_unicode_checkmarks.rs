//! Unicode checkmarks: ✓/✗ instead of the default [OK]/[FAIL].

use microtest::{assert, RunConfig, TestSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("======================================");
    println!("microtest - Unicode Checkmarks Demo");
    println!("======================================\n");

    let config = RunConfig::default().with_unicode_checkmarks();
    let mut session = TestSession::new(config);

    session.run("looks_nice", || {
        assert::str_contains("✓ unicode output", "unicode")?;
        Ok(())
    });

    session.run("fails_nicely_too", || {
        assert::eq(1, 2)?;
        Ok(())
    });

    session.finalize().exit_code()
}
