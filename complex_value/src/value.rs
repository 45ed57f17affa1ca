//! The `ComplexValue` type and its construction paths
//!
//! A `ComplexValue` owns both a rectangular representation (real,
//! imaginary) and a polar representation (magnitude, argument). The polar
//! fields are a cached derived view: every construction path leaves them
//! consistent with the rectangular fields, and no mutator exists that
//! could desynchronize the two.

use std::hash::{Hash, Hasher};

use crate::error::{ComplexError, ComplexResult};

/// Coordinate form selector for [`ComplexValue::from_polar`]
///
/// The polar constructor shares its `(f64, f64)` arity with the
/// rectangular one; the form argument disambiguates the call. Only
/// [`Form::Polar`] is accepted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Rectangular (real, imaginary) coordinates
    Rectangular,
    /// Polar (magnitude, argument) coordinates
    Polar,
}

/// An immutable complex number
///
/// Stores the rectangular components together with the derived polar
/// components. Values are `Copy`; arithmetic produces new instances and
/// nothing mutates in place, so values can be shared across threads
/// without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct ComplexValue {
    real: f64,
    imaginary: f64,
    magnitude: f64,
    argument: f64,
}

impl ComplexValue {
    /// The additive identity, `0 + 0i`
    pub fn zero() -> Self {
        Self::from_rectangular(0.0, 0.0)
    }

    /// Create a value from rectangular coordinates
    ///
    /// The polar fields are derived immediately: magnitude as
    /// `sqrt(real² + imaginary²)`, argument as `atan2(imaginary, real)`.
    /// `atan2(0, 0)` is `0`, so the zero value has argument `0`.
    pub fn from_rectangular(real: f64, imaginary: f64) -> Self {
        let (magnitude, argument) = derive_polar(real, imaginary);
        Self {
            real,
            imaginary,
            magnitude,
            argument,
        }
    }

    /// Create a value from polar coordinates
    ///
    /// `form` must be [`Form::Polar`]; passing [`Form::Rectangular`] fails
    /// with [`ComplexError::InvalidArgument`]. The magnitude is not
    /// range-checked: a negative magnitude is stored verbatim and yields
    /// the algebraically consistent rectangular components.
    pub fn from_polar(magnitude: f64, argument: f64, form: Form) -> ComplexResult<Self> {
        if form != Form::Polar {
            return Err(ComplexError::invalid_argument(
                "only polar construction accepts a coordinate form",
            ));
        }
        Ok(Self {
            real: magnitude * argument.cos(),
            imaginary: magnitude * argument.sin(),
            magnitude,
            argument,
        })
    }

    /// The real component
    pub fn real(&self) -> f64 {
        self.real
    }

    /// The imaginary component
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// The magnitude (distance from the origin)
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The argument (angle from the positive real axis, in radians)
    pub fn argument(&self) -> f64 {
        self.argument
    }

    /// Deterministic hash of the rectangular components
    ///
    /// Accumulates the component bit patterns from seed 17 with
    /// multiply-by-23 mixing. `0.0` and `-0.0` compare equal, so both map
    /// to the same bit pattern before mixing, keeping the hash consistent
    /// with `==`. Stable across runs.
    pub fn hash_code(&self) -> u64 {
        let mut hash: u64 = 17;
        hash = hash.wrapping_mul(23).wrapping_add(component_bits(self.real));
        hash = hash
            .wrapping_mul(23)
            .wrapping_add(component_bits(self.imaginary));
        hash
    }
}

impl Default for ComplexValue {
    fn default() -> Self {
        Self::zero()
    }
}

/// Derive the polar view from rectangular components
fn derive_polar(real: f64, imaginary: f64) -> (f64, f64) {
    let magnitude = (real * real + imaginary * imaginary).sqrt();
    let argument = imaginary.atan2(real);
    (magnitude, argument)
}

/// Bit pattern of a component for hashing, with both zeros unified
fn component_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

// Exact comparison of the rectangular components, no tolerance. The polar
// fields do not participate: they are derived from the rectangular ones.
// A NaN component makes a value unequal to everything, itself included,
// which is why there is no `Eq` impl.
impl PartialEq for ComplexValue {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.imaginary == other.imaginary
    }
}

impl Hash for ComplexValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn test_zero_has_all_zero_components() {
        let z = ComplexValue::zero();
        assert_eq!(z.real(), 0.0);
        assert_eq!(z.imaginary(), 0.0);
        assert_eq!(z.magnitude(), 0.0);
        assert_eq!(z.argument(), 0.0, "atan2(0, 0) must yield 0");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(ComplexValue::default(), ComplexValue::zero());
    }

    #[test]
    fn test_from_rectangular_stores_components() {
        let v = ComplexValue::from_rectangular(3.0, -4.0);
        assert_eq!(v.real(), 3.0);
        assert_eq!(v.imaginary(), -4.0);
    }

    #[test]
    fn test_from_rectangular_derives_polar_view() {
        // 3-4-5 triangle
        let v = ComplexValue::from_rectangular(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-15);
        assert!((v.argument() - 4.0_f64.atan2(3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_from_rectangular_argument_range() {
        let left = ComplexValue::from_rectangular(-1.0, 0.0);
        assert!((left.argument() - std::f64::consts::PI).abs() < 1e-15);

        let down = ComplexValue::from_rectangular(0.0, -1.0);
        assert!((down.argument() + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_from_polar_derives_rectangular_view() {
        let v = ComplexValue::from_polar(2.0, std::f64::consts::FRAC_PI_2, Form::Polar)
            .expect("polar construction failed");
        assert!(v.real().abs() < 1e-15, "real part should be ~0, got {}", v.real());
        assert!((v.imaginary() - 2.0).abs() < 1e-15);
        assert_eq!(v.magnitude(), 2.0);
        assert_eq!(v.argument(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_from_polar_rejects_rectangular_form() {
        let err = ComplexValue::from_polar(1.0, 0.0, Form::Rectangular).unwrap_err();
        assert!(matches!(err, ComplexError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_polar_accepts_negative_magnitude_verbatim() {
        // No range validation: magnitude -1 at argument 0 lands at -1 + 0i
        // and the stored magnitude stays -1.
        let v = ComplexValue::from_polar(-1.0, 0.0, Form::Polar).expect("polar construction failed");
        assert_eq!(v.real(), -1.0);
        assert_eq!(v.magnitude(), -1.0);
    }

    // ── Equality ──────────────────────────────────────────────────────────────

    #[test]
    fn test_equality_is_exact() {
        let a = ComplexValue::from_rectangular(1.5, -2.5);
        let b = ComplexValue::from_rectangular(1.5, -2.5);
        let c = ComplexValue::from_rectangular(1.5, -2.5 + 1e-12);
        assert_eq!(a, b);
        assert_ne!(a, c, "no epsilon tolerance in equality");
    }

    #[test]
    fn test_equality_ignores_polar_fields() {
        // from_polar(-1, 0) stores magnitude -1 but lands on the same
        // rectangular point as from_rectangular(-1, 0), whose derived
        // magnitude is 1. Equality only sees the rectangular components.
        let polar = ComplexValue::from_polar(-1.0, 0.0, Form::Polar).expect("polar construction failed");
        let rect = ComplexValue::from_rectangular(-1.0, 0.0);
        assert_ne!(polar.magnitude(), rect.magnitude());
        assert_eq!(polar, rect);
    }

    #[test]
    fn test_negative_zero_equals_positive_zero() {
        let a = ComplexValue::from_rectangular(0.0, -0.0);
        let b = ComplexValue::from_rectangular(0.0, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_nan_component_is_not_equal_to_itself() {
        let v = ComplexValue::from_rectangular(f64::NAN, 0.0);
        assert_ne!(v, v);
    }

    // ── Hashing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_hash_is_consistent_with_equality() {
        let a = ComplexValue::from_rectangular(3.0, 4.0);
        let b = ComplexValue::from_rectangular(3.0, 4.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_unifies_signed_zeros() {
        let a = ComplexValue::from_rectangular(0.0, -0.0);
        let b = ComplexValue::from_rectangular(-0.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_distinguishes_swapped_components() {
        let a = ComplexValue::from_rectangular(3.0, 4.0);
        let b = ComplexValue::from_rectangular(4.0, 3.0);
        assert_ne!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_is_stable() {
        // Seed 17, multiply-by-23 accumulation over the component bits:
        // the zero value always hashes to (17 * 23) * 23 = 8993.
        assert_eq!(ComplexValue::zero().hash_code(), 8993);
    }

    // ── Concurrency ───────────────────────────────────────────────────────────

    #[test]
    fn test_value_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<ComplexValue>();
    }
}
