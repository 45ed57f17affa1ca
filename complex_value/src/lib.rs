//! complex_value
//!
//! An immutable complex number value type with a dual representation:
//! rectangular (real, imaginary) plus a derived polar view (magnitude,
//! argument), kept consistent on every construction path.
//!
//! This crate provides:
//!
//! - `ComplexValue` with zero, rectangular, and polar constructors
//! - Arithmetic through the standard operator traits; every result
//!   re-derives its polar view
//! - Exact equality and a deterministic, equality-consistent hash
//! - The canonical `"a + bi"` text form (`Display`) and its parser
//!   (`FromStr`)
//! - `ComplexError` for constructor misuse and parse failures
//!
//! # Example
//!
//! ```
//! use complex_value::prelude::*;
//!
//! let a = ComplexValue::from_rectangular(1.0, 2.0);
//! let b = ComplexValue::from_rectangular(3.0, 4.0);
//! assert_eq!((a * b).to_string(), "-5 + 10i");
//!
//! let parsed: ComplexValue = "3 + 4i".parse().unwrap();
//! assert_eq!(parsed, ComplexValue::from_rectangular(3.0, 4.0));
//! ```

pub mod arith;
pub mod error;
pub mod format;
pub mod parse;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_value::prelude::*;
/// ```
pub mod prelude {
    pub use super::error::{ComplexError, ComplexResult};
    pub use super::value::{ComplexValue, Form};
}

pub use prelude::*;

/// Parse a complex number from its canonical `"a + bi"` form
///
/// # Example
///
/// ```
/// use complex_value::parse;
///
/// let v = parse("3 + 4i").unwrap();
/// assert_eq!(v.real(), 3.0);
/// assert_eq!(v.imaginary(), 4.0);
/// ```
pub fn parse(s: &str) -> ComplexResult<ComplexValue> {
    ComplexValue::parse(s)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
