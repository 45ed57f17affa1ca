//! Parsing of the canonical `"a + bi"` text form
//!
//! The algorithm is split-then-trim-then-parse: split the input on the
//! characters `'+'` and `'i'`, drop empty fragments, require exactly two,
//! then trim each fragment and parse it as `f64`. This is deliberately
//! not a grammar. The split cannot tell a separator `+` from a `+` inside
//! a number, so exponent forms like `"1e+5 + 2i"` break into three
//! fragments and fail. The canonical form itself always round-trips,
//! including negative imaginary parts: `"3 + -4i"` splits into `"3 "`
//! and `" -4"`.

use std::str::FromStr;

use crate::error::{ComplexError, ComplexResult};
use crate::value::ComplexValue;

impl ComplexValue {
    /// Parse a complex number from its canonical `"a + bi"` form
    ///
    /// Fails with a `FormatError`-class [`ComplexError`] when the input
    /// does not split into exactly two fragments, or when a fragment is
    /// not a valid floating-point literal. The result is constructed
    /// through [`ComplexValue::from_rectangular`].
    pub fn parse(input: &str) -> ComplexResult<Self> {
        let components: Vec<&str> = input
            .split(['+', 'i'])
            .filter(|fragment| !fragment.is_empty())
            .collect();

        if components.len() != 2 {
            return Err(ComplexError::component_count(input, components.len()));
        }

        let real = parse_component(components[0])?;
        let imaginary = parse_component(components[1])?;
        Ok(ComplexValue::from_rectangular(real, imaginary))
    }
}

/// Trim a fragment and parse it as a float literal
fn parse_component(fragment: &str) -> ComplexResult<f64> {
    let trimmed = fragment.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ComplexError::invalid_component(trimmed))
}

impl FromStr for ComplexValue {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplexValue::parse(s)
    }
}
