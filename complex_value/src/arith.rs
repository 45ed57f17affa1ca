//! Arithmetic operators for `ComplexValue`
//!
//! All four operators take their operands by value (`ComplexValue` is
//! `Copy`), never mutate them, and construct their result through
//! [`ComplexValue::from_rectangular`], so the polar view of every result
//! is re-derived rather than copied from an operand.

use std::ops::{Add, Div, Mul, Sub};

use crate::value::ComplexValue;

impl Add for ComplexValue {
    type Output = ComplexValue;

    fn add(self, other: ComplexValue) -> ComplexValue {
        ComplexValue::from_rectangular(
            self.real() + other.real(),
            self.imaginary() + other.imaginary(),
        )
    }
}

impl Sub for ComplexValue {
    type Output = ComplexValue;

    fn sub(self, other: ComplexValue) -> ComplexValue {
        ComplexValue::from_rectangular(
            self.real() - other.real(),
            self.imaginary() - other.imaginary(),
        )
    }
}

impl Mul for ComplexValue {
    type Output = ComplexValue;

    fn mul(self, other: ComplexValue) -> ComplexValue {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        ComplexValue::from_rectangular(
            self.real() * other.real() - self.imaginary() * other.imaginary(),
            self.real() * other.imaginary() + self.imaginary() * other.real(),
        )
    }
}

impl Div for ComplexValue {
    type Output = ComplexValue;

    /// Division is not guarded against a zero divisor: the denominator
    /// becomes `0.0` and the components follow IEEE float division,
    /// producing infinities or NaNs rather than an error.
    fn div(self, other: ComplexValue) -> ComplexValue {
        let denominator = other.real() * other.real() + other.imaginary() * other.imaginary();
        ComplexValue::from_rectangular(
            (self.real() * other.real() + self.imaginary() * other.imaginary()) / denominator,
            (self.imaginary() * other.real() - self.real() * other.imaginary()) / denominator,
        )
    }
}
