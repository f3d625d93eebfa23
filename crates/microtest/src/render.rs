//! Diagnostic rendering of assertion operands.
//!
//! Classification is capability-based and resolved at compile time: anything
//! with a [`std::fmt::Display`] implementation renders through it, everything
//! else goes through the [`Opaque`] fallback.

use std::any::type_name;
use std::fmt;

/// Capability of producing diagnostic text for an assertion message.
///
/// The blanket implementation over `Display` gives the expected forms for
/// free: strings render as their content (unquoted), booleans as
/// `true`/`false`, `char` as the single character, and integers and floats in
/// locale-independent decimal form. `u8` and friends are numeric, never
/// code points; only `char` is character-like. Custom types opt in by
/// implementing `Display`.
///
/// Rendering is pure: it never mutates the value, and rendering the same
/// value twice yields identical text.
pub trait Render {
    /// Produce the diagnostic form of the value.
    fn render(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Render for T {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Fallback rendering for values with no `Display` implementation.
///
/// Shows the type name and storage address, bracketed:
/// `[demo::Widget at 0x7ffd3a2b1c40]`. This guarantees every value has some
/// diagnostic form. The address varies between runs; only the bracketed
/// shape and the type identifier are stable.
///
/// ```
/// use microtest::{Opaque, Render};
///
/// struct Widget;
///
/// let w = Widget;
/// assert!(Opaque(&w).render().starts_with('['));
/// ```
pub struct Opaque<'a, T>(pub &'a T);

impl<T> fmt::Display for Opaque<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} at {:p}]", type_name::<T>(), self.0)
    }
}
