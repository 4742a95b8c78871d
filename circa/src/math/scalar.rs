//! Scalar helpers to write the circular math once for f32 and f64.

use nalgebra::{convert, RealField};

/// Lift an `f64` constant into the working scalar type.
#[inline(always)]
pub(crate) fn lit<T: RealField + Copy>(value: f64) -> T {
    convert::<f64, T>(value)
}

/// Clamp into `[-1, 1]` so rounding never pushes `acos` out of its domain.
#[inline(always)]
pub(crate) fn clamp_unit<T: RealField + Copy>(value: T) -> T {
    value.clamp(-T::one(), T::one())
}

/// Tolerance under which a mean resultant length counts as zero.
///
/// `sqrt(ε)` is roughly where the cancellation error of summing unit vectors
/// lives: ~1.5e-8 for f64 and ~3.5e-4 for f32.
#[inline(always)]
pub(crate) fn degenerate_tolerance<T: RealField + Copy>() -> T {
    T::default_epsilon().sqrt()
}
