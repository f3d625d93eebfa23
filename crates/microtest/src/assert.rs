//! Assertion predicates.
//!
//! Every predicate returns `Ok(())` when its condition holds and a
//! [`Failure`] carrying the rendered diagnostic when it does not. Test
//! bodies propagate with `?`, which aborts the body at the first failed
//! check; there is no resumption. All predicates are `#[track_caller]`, so
//! the recorded origin is the call site inside the test body.
//!
//! Value predicates ([`eq`], [`ne`], the orderings) compare values and
//! require operands to be renderable; identity comparison is the separate
//! [`ptr_eq`]/[`ptr_ne`] pair over references, so mixing the two up is a
//! compile error rather than a silent address comparison.
//!
//! Each predicate has a `_msg` variant with identical violation logic where
//! the caller-supplied message replaces or prefixes the auto-generated
//! diagnostic.

use crate::failure::{catch_silent, panic_message, Failure};
use crate::render::Render;

/// Assert that a condition is true.
///
/// `expr` is the source text of the condition, echoed in the diagnostic.
/// The [`crate::check_true!`] macro captures it automatically.
#[track_caller]
pub fn is_true(condition: bool, expr: &str) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::here(format!("condition is false: '{expr}'")))
    }
}

/// [`is_true`] with a custom message.
#[track_caller]
pub fn is_true_msg(condition: bool, msg: &str) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::here(format!("assertion failed, '{msg}'")))
    }
}

/// Assert that a condition is false.
#[track_caller]
pub fn is_false(condition: bool, expr: &str) -> Result<(), Failure> {
    if !condition {
        Ok(())
    } else {
        Err(Failure::here(format!("condition is true: '{expr}'")))
    }
}

/// [`is_false`] with a custom message.
#[track_caller]
pub fn is_false_msg(condition: bool, msg: &str) -> Result<(), Failure> {
    if !condition {
        Ok(())
    } else {
        Err(Failure::here(format!("assertion failed, '{msg}'")))
    }
}

/// Assert that two values are equal.
#[track_caller]
pub fn eq<T, U>(x: T, y: U) -> Result<(), Failure>
where
    T: PartialEq<U> + Render,
    U: Render,
{
    if x == y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed: {} != {}",
            x.render(),
            y.render()
        )))
    }
}

/// [`eq`] with a custom message.
#[track_caller]
pub fn eq_msg<T, U>(x: T, y: U, msg: &str) -> Result<(), Failure>
where
    T: PartialEq<U> + Render,
    U: Render,
{
    if x == y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, '{msg}': {} != {}",
            x.render(),
            y.render()
        )))
    }
}

/// Assert that two values are not equal.
#[track_caller]
pub fn ne<T, U>(x: T, y: U) -> Result<(), Failure>
where
    T: PartialEq<U> + Render,
    U: Render,
{
    if x != y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed: {} == {}",
            x.render(),
            y.render()
        )))
    }
}

/// [`ne`] with a custom message.
#[track_caller]
pub fn ne_msg<T, U>(x: T, y: U, msg: &str) -> Result<(), Failure>
where
    T: PartialEq<U> + Render,
    U: Render,
{
    if x != y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, '{msg}': {} == {}",
            x.render(),
            y.render()
        )))
    }
}

macro_rules! ordering_predicate {
    ($name:ident, $name_msg:ident, $op:tt, $direction:literal) => {
        /// Assert the ordering relation between two values.
        #[track_caller]
        pub fn $name<T, U>(x: T, y: U) -> Result<(), Failure>
        where
            T: PartialOrd<U> + Render,
            U: Render,
        {
            if x $op y {
                Ok(())
            } else {
                Err(Failure::here(format!(
                    concat!("Assertion failed: {} is not ", $direction, " {}"),
                    x.render(),
                    y.render()
                )))
            }
        }

        /// Same relation, with a custom message.
        #[track_caller]
        pub fn $name_msg<T, U>(x: T, y: U, msg: &str) -> Result<(), Failure>
        where
            T: PartialOrd<U> + Render,
            U: Render,
        {
            if x $op y {
                Ok(())
            } else {
                Err(Failure::here(format!(
                    concat!("Assertion failed, '{}': {} is not ", $direction, " {}"),
                    msg,
                    x.render(),
                    y.render()
                )))
            }
        }
    };
}

ordering_predicate!(gt, gt_msg, >, "greater than");
ordering_predicate!(ge, ge_msg, >=, "greater than or equal to");
ordering_predicate!(lt, lt_msg, <, "less than");
ordering_predicate!(le, le_msg, <=, "less than or equal to");

/// Assert that two strings have equal content.
#[track_caller]
pub fn str_eq(x: impl AsRef<str>, y: impl AsRef<str>) -> Result<(), Failure> {
    let (x, y) = (x.as_ref(), y.as_ref());
    if x == y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed: \"{x}\" != \"{y}\""
        )))
    }
}

/// [`str_eq`] with a custom message.
#[track_caller]
pub fn str_eq_msg(x: impl AsRef<str>, y: impl AsRef<str>, msg: &str) -> Result<(), Failure> {
    let (x, y) = (x.as_ref(), y.as_ref());
    if x == y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed, '{msg}': \"{x}\" != \"{y}\""
        )))
    }
}

/// Assert that two strings differ in content.
#[track_caller]
pub fn str_ne(x: impl AsRef<str>, y: impl AsRef<str>) -> Result<(), Failure> {
    let (x, y) = (x.as_ref(), y.as_ref());
    if x != y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed: \"{x}\" == \"{y}\""
        )))
    }
}

/// [`str_ne`] with a custom message.
#[track_caller]
pub fn str_ne_msg(x: impl AsRef<str>, y: impl AsRef<str>, msg: &str) -> Result<(), Failure> {
    let (x, y) = (x.as_ref(), y.as_ref());
    if x != y {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed, '{msg}': \"{x}\" == \"{y}\""
        )))
    }
}

/// Assert that `text` contains `needle`.
///
/// The empty needle is contained in every string, including the empty one.
#[track_caller]
pub fn str_contains(text: impl AsRef<str>, needle: impl AsRef<str>) -> Result<(), Failure> {
    let (text, needle) = (text.as_ref(), needle.as_ref());
    if text.contains(needle) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed: \"{text}\" does not contain \"{needle}\""
        )))
    }
}

/// [`str_contains`] with a custom message.
#[track_caller]
pub fn str_contains_msg(
    text: impl AsRef<str>,
    needle: impl AsRef<str>,
    msg: &str,
) -> Result<(), Failure> {
    let (text, needle) = (text.as_ref(), needle.as_ref());
    if text.contains(needle) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed, '{msg}': \"{text}\" does not contain \"{needle}\""
        )))
    }
}

/// Assert that `text` does not contain `needle`.
#[track_caller]
pub fn str_not_contains(text: impl AsRef<str>, needle: impl AsRef<str>) -> Result<(), Failure> {
    let (text, needle) = (text.as_ref(), needle.as_ref());
    if !text.contains(needle) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed: \"{text}\" contains \"{needle}\""
        )))
    }
}

/// [`str_not_contains`] with a custom message.
#[track_caller]
pub fn str_not_contains_msg(
    text: impl AsRef<str>,
    needle: impl AsRef<str>,
    msg: &str,
) -> Result<(), Failure> {
    let (text, needle) = (text.as_ref(), needle.as_ref());
    if !text.contains(needle) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "String assertion failed, '{msg}': \"{text}\" contains \"{needle}\""
        )))
    }
}

/// Assert that an option is `None`.
///
/// `expr` is the source text of the option expression; the
/// [`crate::check_none!`] macro captures it automatically.
#[track_caller]
pub fn is_none<T>(value: &Option<T>, expr: &str) -> Result<(), Failure> {
    if value.is_none() {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, value is not None: '{expr}'"
        )))
    }
}

/// [`is_none`] with a custom message.
#[track_caller]
pub fn is_none_msg<T>(value: &Option<T>, expr: &str, msg: &str) -> Result<(), Failure> {
    if value.is_none() {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, '{msg}': value is not None: '{expr}'"
        )))
    }
}

/// Assert that an option is `Some`.
#[track_caller]
pub fn is_some<T>(value: &Option<T>, expr: &str) -> Result<(), Failure> {
    if value.is_some() {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, value is None: '{expr}'"
        )))
    }
}

/// [`is_some`] with a custom message.
#[track_caller]
pub fn is_some_msg<T>(value: &Option<T>, expr: &str, msg: &str) -> Result<(), Failure> {
    if value.is_some() {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Assertion failed, '{msg}': value is None: '{expr}'"
        )))
    }
}

/// Assert that two references point at the same object.
#[track_caller]
pub fn ptr_eq<T: ?Sized>(x: &T, y: &T) -> Result<(), Failure> {
    if std::ptr::eq(x, y) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Pointer assertion failed: {x:p} != {y:p}"
        )))
    }
}

/// [`ptr_eq`] with a custom message.
#[track_caller]
pub fn ptr_eq_msg<T: ?Sized>(x: &T, y: &T, msg: &str) -> Result<(), Failure> {
    if std::ptr::eq(x, y) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Pointer assertion failed, '{msg}': {x:p} != {y:p}"
        )))
    }
}

/// Assert that two references point at different objects.
#[track_caller]
pub fn ptr_ne<T: ?Sized>(x: &T, y: &T) -> Result<(), Failure> {
    if !std::ptr::eq(x, y) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Pointer assertion failed: {x:p} == {y:p}"
        )))
    }
}

/// [`ptr_ne`] with a custom message.
#[track_caller]
pub fn ptr_ne_msg<T: ?Sized>(x: &T, y: &T, msg: &str) -> Result<(), Failure> {
    if !std::ptr::eq(x, y) {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "Pointer assertion failed, '{msg}': {x:p} == {y:p}"
        )))
    }
}

/// Assert that invoking the callable panics.
///
/// The panic is absorbed without tripping the default panic hook, so no
/// stray panic report reaches stderr.
#[track_caller]
pub fn panics<F: FnOnce()>(f: F) -> Result<(), Failure> {
    match catch_silent(f) {
        Err(_) => Ok(()),
        Ok(()) => Err(Failure::here("Expected panic was not raised".to_string())),
    }
}

/// [`panics`] with a description of the expectation.
#[track_caller]
pub fn panics_msg<F: FnOnce()>(f: F, msg: &str) -> Result<(), Failure> {
    match catch_silent(f) {
        Err(_) => Ok(()),
        Ok(()) => Err(Failure::here(format!(
            "Expected panic was not raised: {msg}"
        ))),
    }
}

/// Assert that invoking the callable completes without panicking.
///
/// The caught panic's own message is included in the diagnostic.
#[track_caller]
pub fn does_not_panic<F: FnOnce()>(f: F) -> Result<(), Failure> {
    match catch_silent(f) {
        Ok(()) => Ok(()),
        Err(payload) => Err(Failure::here(format!(
            "Unexpected panic raised: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

/// [`does_not_panic`] with a description of the expectation.
#[track_caller]
pub fn does_not_panic_msg<F: FnOnce()>(f: F, msg: &str) -> Result<(), Failure> {
    match catch_silent(f) {
        Ok(()) => Ok(()),
        Err(payload) => Err(Failure::here(format!(
            "Unexpected panic raised: {msg} - {}",
            panic_message(payload.as_ref())
        ))),
    }
}

/// Check a boolean expression, capturing its source text for the diagnostic.
///
/// ```
/// # fn main() -> Result<(), microtest::Failure> {
/// let value = 5;
/// microtest::check_true!(value > 0)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! check_true {
    ($cond:expr) => {
        $crate::assert::is_true($cond, stringify!($cond))
    };
    ($cond:expr, $msg:expr) => {
        $crate::assert::is_true_msg($cond, $msg)
    };
}

/// Check that a boolean expression is false, capturing its source text.
#[macro_export]
macro_rules! check_false {
    ($cond:expr) => {
        $crate::assert::is_false($cond, stringify!($cond))
    };
    ($cond:expr, $msg:expr) => {
        $crate::assert::is_false_msg($cond, $msg)
    };
}

/// Check that an option expression is `Some`, capturing its source text.
#[macro_export]
macro_rules! check_some {
    ($opt:expr) => {
        $crate::assert::is_some(&$opt, stringify!($opt))
    };
    ($opt:expr, $msg:expr) => {
        $crate::assert::is_some_msg(&$opt, stringify!($opt), $msg)
    };
}

/// Check that an option expression is `None`, capturing its source text.
#[macro_export]
macro_rules! check_none {
    ($opt:expr) => {
        $crate::assert::is_none(&$opt, stringify!($opt))
    };
    ($opt:expr, $msg:expr) => {
        $crate::assert::is_none_msg(&$opt, stringify!($opt), $msg)
    };
}
