//! Verbose mode: each test name is announced before its body runs.

use microtest::{assert, RunConfig, TestSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("======================================");
    println!("microtest - Verbose Mode Demo");
    println!("======================================\n");

    let mut session = TestSession::new(RunConfig::default().with_verbose(true));

    session.run("quick_math", || {
        assert::eq(6 * 7, 42)?;
        Ok(())
    });

    session.run_in("Strings", "concatenation", || {
        let joined = format!("{}{}", "foo", "bar");
        assert::str_eq(joined, "foobar")?;
        Ok(())
    });

    session.run("slow_loop", || {
        let mut sum = 0u64;
        for i in 0..100_000 {
            sum += i;
        }
        assert::gt(sum, 0u64)?;
        Ok(())
    });

    session.finalize().exit_code()
}
