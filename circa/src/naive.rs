//! Naive linear arithmetic on cyclic values, kept for contrast.
//!
//! These are the calculations that look right and are not: plain subtraction,
//! plain averaging, plain lerp. The only wraparound handling on offer is
//! [`NaivePolicy::FoldOnce`], which adds one period to a negative result. That
//! fixes the sign and nothing else: `naive_delta(1, 23)` still reports 22 hours
//! where the clock says 2.
//!
//! One policy is chosen per [`NaiveComparator`] and applied to every naive
//! operation it performs.

use nalgebra::RealField;
use serde::{Deserialize, Serialize};

use crate::embedding::{circular_distance, circular_mean, interpolate, shortest_midpoint};
use crate::error::CircularError;
use crate::manifold::{geodesic_samples, LinePoint, Manifold};
use crate::math::scalar::lit;
use crate::period::Period;

/// What naive arithmetic does with a result outside `[0, P)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaivePolicy {
    /// Report the raw, possibly negative result.
    Raw,
    /// Add the period once if the result is negative.
    #[default]
    FoldOnce,
}

impl NaivePolicy {
    pub fn apply<T>(self, value: T, period: Period<T>) -> T
    where
        T: RealField + Copy,
    {
        match self {
            NaivePolicy::Raw => value,
            NaivePolicy::FoldOnce if value < T::zero() => value + period.length(),
            NaivePolicy::FoldOnce => value,
        }
    }
}

/// The same inputs run through naive and circular arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison<T> {
    pub naive: T,
    pub circular: T,
    /// How far apart the two answers are.
    pub divergence: T,
    /// `divergence` exceeds the comparator's threshold.
    pub differs: bool,
}

/// How far the naive answer lands from the circular one, in `[0, P/2]`.
pub fn divergence<T>(naive: T, circular: T, period: Period<T>) -> T
where
    T: RealField + Copy,
{
    circular_distance(naive, circular, period)
}

/// Gap between two magnitudes (durations, waits) that are not positions on
/// the cycle and so must not be wrapped.
pub fn magnitude_gap<T>(naive: T, circular: T) -> T
where
    T: RealField + Copy,
{
    (naive - circular).abs()
}

/// `divergence > threshold`.
pub fn is_meaningful<T>(divergence: T, threshold: T) -> bool
where
    T: RealField + Copy,
{
    divergence > threshold
}

/// Naive arithmetic under one policy, plus the comparisons against the
/// circular answers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaiveComparator<T>
where
    T: RealField + Copy,
{
    period: Period<T>,
    policy: NaivePolicy,
    threshold: T,
}

impl<T> NaiveComparator<T>
where
    T: RealField + Copy,
{
    /// Comparator with the default [`NaivePolicy`] and a zero threshold, so
    /// any divergence at all counts as a difference.
    pub fn new(period: Period<T>) -> Self {
        Self {
            period,
            policy: NaivePolicy::default(),
            threshold: T::zero(),
        }
    }

    pub fn with_policy(mut self, policy: NaivePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Divergence above which the two methods are reported as different.
    ///
    /// # Errors
    /// [`CircularError::InvalidThreshold`] for negative or non-finite values.
    pub fn with_threshold(mut self, threshold: T) -> Result<Self, CircularError> {
        if !threshold.is_finite() || threshold < T::zero() {
            return Err(CircularError::InvalidThreshold(threshold.to_string()));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn period(&self) -> Period<T> {
        self.period
    }

    pub fn policy(&self) -> NaivePolicy {
        self.policy
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// `b - a`, then the policy.
    pub fn naive_delta(&self, a: T, b: T) -> T {
        self.policy.apply(b - a, self.period)
    }

    /// `(a + b) / 2`, then the policy.
    pub fn naive_mean(&self, a: T, b: T) -> T {
        self.policy.apply((a + b) * lit(0.5), self.period)
    }

    /// `a + t (b - a)`, then the policy.
    pub fn naive_interpolate(&self, a: T, b: T, t: T) -> T {
        let point = LinePoint(a).interpolate(&LinePoint(b), t);
        self.policy.apply(point.value(), self.period)
    }

    /// `steps + 1` evenly spaced values on the straight line from `a` to `b`,
    /// each passed through the policy.
    pub fn sample_line(&self, a: T, b: T, steps: usize) -> Vec<T> {
        geodesic_samples(&LinePoint(a), &LinePoint(b), steps)
            .iter()
            .map(|point| self.policy.apply(point.value(), self.period))
            .collect()
    }

    /// Naive `(a + b) / 2` against the circular mean of `[a, b]`.
    pub fn compare_mean(&self, a: T, b: T) -> Result<Comparison<T>, CircularError> {
        let circular = circular_mean(&[a, b], self.period)?.mean;
        Ok(self.positions(self.naive_mean(a, b), circular))
    }

    /// Naive `(a + b) / 2` against the shortest-arc midpoint.
    pub fn compare_midpoint(&self, a: T, b: T) -> Comparison<T> {
        let circular = shortest_midpoint(a, b, self.period);
        self.positions(self.naive_mean(a, b), circular)
    }

    /// Naive `b - a` against the circular distance. Both are magnitudes, so
    /// they are compared with [`magnitude_gap`].
    pub fn compare_delta(&self, a: T, b: T) -> Comparison<T> {
        let naive = self.naive_delta(a, b);
        let circular = circular_distance(a, b, self.period);
        let divergence = magnitude_gap(naive, circular);
        Comparison {
            naive,
            circular,
            divergence,
            differs: is_meaningful(divergence, self.threshold),
        }
    }

    /// Naive lerp against shortest-arc interpolation at the same `t`.
    pub fn compare_interpolation(&self, a: T, b: T, t: T) -> Comparison<T> {
        let circular = interpolate(a, b, t, self.period);
        self.positions(self.naive_interpolate(a, b, t), circular)
    }

    fn positions(&self, naive: T, circular: T) -> Comparison<T> {
        let distance = divergence(naive, circular, self.period);
        Comparison {
            naive,
            circular,
            divergence: distance,
            differs: is_meaningful(distance, self.threshold),
        }
    }
}
