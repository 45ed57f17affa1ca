//! Canonical text form for `ComplexValue`
//!
//! The canonical form is `"{real} + {imaginary}i"`: default float
//! formatting, the literal `" + "` separator, a trailing `i`. The
//! separator stays literal even when the imaginary part is negative
//! (`3 + -4i`); the parser in [`crate::parse`] depends on this shape.

use std::fmt;

use crate::value::ComplexValue;

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real(), self.imaginary())
    }
}
