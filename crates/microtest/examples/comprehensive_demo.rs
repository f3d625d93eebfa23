//! Feature tour: every predicate family, grouping, and the summary.

use microtest::{assert, check_none, check_some, check_true, RunConfig, TestRegistry, TestSession};
use std::fmt;
use std::process::ExitCode;

struct Point {
    x: i32,
    y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn main() -> ExitCode {
    println!("======================================");
    println!("microtest - Comprehensive Demo");
    println!("======================================\n");

    let mut registry = TestRegistry::new();

    registry.register("basic_assertions", || {
        let a = 5;
        let b = 5;
        let c = 10;
        assert::eq(a, b)?;
        assert::ne(a, c)?;
        check_true!(a == b)?;
        assert::is_false(a != b, "a != b")?;
        Ok(())
    });

    registry.register("string_assertions", || {
        assert::str_eq("hello", "hello")?;
        assert::str_ne("hello", "world")?;
        assert::str_eq(String::from("hello"), "hello")?;
        assert::str_contains("hello world", "world")?;
        assert::str_not_contains("success message", "error")?;
        Ok(())
    });

    registry.register("comparison_assertions", || {
        assert::gt(10, 5)?;
        assert::ge(10, 5)?;
        assert::ge(5, 5)?;
        assert::lt(5, 10)?;
        assert::le(5, 5)?;
        assert::gt(3.14, 2.71)?;
        Ok(())
    });

    registry.register("panic_assertions", || {
        assert::panics(|| panic!("expected panic"))?;
        assert::panics_msg(
            || {
                let v = vec![1, 2, 3];
                let _ = v[10];
            },
            "out-of-bounds indexing should panic",
        )?;
        assert::does_not_panic(|| {
            let _ = 2 + 2;
        })?;
        Ok(())
    });

    registry.register("option_assertions", || {
        let missing: Option<i32> = None;
        let present = Some(42);
        check_none!(missing)?;
        check_some!(present)?;
        Ok(())
    });

    registry.register("pointer_assertions", || {
        let value = 42;
        let other = 42;
        assert::ptr_eq(&value, &value)?;
        assert::ptr_ne(&value, &other)?;
        Ok(())
    });

    registry.register("custom_display_rendering", || {
        let origin = Point { x: 0, y: 0 };
        let unit = Point { x: 1, y: 1 };
        assert::str_contains(origin.to_string(), "(0, 0)")?;
        assert::ne(origin.to_string(), unit.to_string())?;
        Ok(())
    });

    registry.register_in("Calculator", "Addition", || {
        assert::eq(2 + 3, 5)?;
        Ok(())
    });
    registry.register_in("Calculator", "Subtraction", || {
        assert::eq(5 - 3, 2)?;
        Ok(())
    });
    registry.register_in("Calculator", "Multiplication", || {
        assert::eq_msg(4 * 3, 12, "multiplication table")?;
        Ok(())
    });

    let mut session = TestSession::new(RunConfig::default());
    registry.run_all(&mut session);

    session.finalize().exit_code()
}
