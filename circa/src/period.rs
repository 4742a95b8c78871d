//! Periods and cyclic values.
//!
//! A [`Period`] is the length of one full turn in the caller's unit: 24 for
//! hours of the day, 360 for degrees, 2π for radians. Every circular operation
//! in this crate is parameterised by one. Values themselves are never required
//! to be pre-normalised; normalisation is done here, totally, for any finite
//! input.

use nalgebra::RealField;

use crate::embedding;
use crate::error::CircularError;
use crate::math::scalar::lit;

/// Validated length of one full cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Period<T>
where
    T: RealField + Copy,
{
    length: T,
}

impl<T> Period<T>
where
    T: RealField + Copy,
{
    /// Construct a period, rejecting zero, negative and non-finite lengths.
    pub fn new(length: T) -> Result<Self, CircularError> {
        if !length.is_finite() || length <= T::zero() {
            return Err(CircularError::InvalidPeriod(length.to_string()));
        }
        Ok(Self { length })
    }

    /// Hours of the day (24).
    pub fn hours() -> Self {
        Self { length: lit(24.0) }
    }

    /// Compass or hue degrees (360).
    pub fn degrees() -> Self {
        Self { length: lit(360.0) }
    }

    /// Radians (2π).
    pub fn radians() -> Self {
        Self { length: T::two_pi() }
    }

    /// Length of one cycle.
    pub fn length(&self) -> T {
        self.length
    }

    /// Half a cycle, the largest possible circular distance.
    pub fn half(&self) -> T {
        self.length * lit(0.5)
    }

    /// Fold `value` into `[0, P)`.
    pub fn normalize(&self, value: T) -> T {
        let mut folded = value % self.length;
        if folded < T::zero() {
            folded += self.length;
        }
        // Tiny negative remainders round up to exactly `P`.
        if folded >= self.length {
            T::zero()
        } else {
            folded
        }
    }

    /// Fold `value` into `[-P/2, P/2)`.
    pub fn wrap_signed(&self, value: T) -> T {
        self.normalize(value + self.half()) - self.half()
    }

    /// Convert a value in this period's unit to radians.
    pub fn to_radians(&self, value: T) -> T {
        value * T::two_pi() / self.length
    }

    /// Convert radians back to this period's unit.
    pub fn from_radians(&self, radians: T) -> T {
        radians * self.length / T::two_pi()
    }

    /// Fail with [`CircularError::PeriodMismatch`] unless both periods agree.
    pub fn ensure_matches(&self, other: &Self) -> Result<(), CircularError> {
        if self.length == other.length {
            Ok(())
        } else {
            Err(CircularError::PeriodMismatch {
                left: self.length.to_string(),
                right: other.length.to_string(),
            })
        }
    }
}

/// A scalar together with the period it cycles over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CyclicValue<T>
where
    T: RealField + Copy,
{
    pub value: T,
    pub period: Period<T>,
}

impl<T> CyclicValue<T>
where
    T: RealField + Copy,
{
    pub fn new(value: T, period: Period<T>) -> Self {
        Self { value, period }
    }

    /// The same value folded into `[0, P)`.
    pub fn normalized(&self) -> Self {
        Self::new(self.period.normalize(self.value), self.period)
    }

    /// Circular distance to `other`, in `[0, P/2]`.
    pub fn distance_to(&self, other: &Self) -> Result<T, CircularError> {
        self.period.ensure_matches(&other.period)?;
        Ok(embedding::circular_distance(
            self.value,
            other.value,
            self.period,
        ))
    }

    /// Signed shortest step from `self` to `other`, in `[-P/2, P/2)`.
    pub fn signed_delta_to(&self, other: &Self) -> Result<T, CircularError> {
        self.period.ensure_matches(&other.period)?;
        Ok(embedding::shortest_signed_delta(
            self.value,
            other.value,
            self.period,
        ))
    }

    /// Shortest-arc midpoint between `self` and `other`.
    pub fn midpoint_with(&self, other: &Self) -> Result<Self, CircularError> {
        self.period.ensure_matches(&other.period)?;
        let mid = embedding::shortest_midpoint(self.value, other.value, self.period);
        Ok(Self::new(mid, self.period))
    }

    /// Rotate by `other`, normalised into `[0, P)`.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CircularError> {
        self.period.ensure_matches(&other.period)?;
        Ok(Self::new(
            self.period.normalize(self.value + other.value),
            self.period,
        ))
    }

    /// Rotate back by `other`, normalised into `[0, P)`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, CircularError> {
        self.period.ensure_matches(&other.period)?;
        Ok(Self::new(
            self.period.normalize(self.value - other.value),
            self.period,
        ))
    }
}
