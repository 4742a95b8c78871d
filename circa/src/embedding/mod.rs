//! Unit-circle embedding of cyclic scalars
//!
//! Averaging or subtracting angles directly is wrong near the wraparound.
//! Embedding each value as `(cos θ, sin θ)` with `θ = 2π v / P` and doing the
//! arithmetic on those vectors is not: distance comes from the dot product,
//! the mean from the direction of the vector sum.
//!
//! The free functions use a zero phase. [`Embedding`] adds a phase offset for
//! callers that need a specific reference direction (a clock face with
//! midnight at the top uses `-π/2`). Distances, deltas and means do not depend
//! on the phase.

use nalgebra::{RealField, Vector2};
use tracing::debug;

use crate::error::CircularError;
use crate::manifold::{geodesic_samples, CirclePoint, Manifold};
use crate::math::scalar::{degenerate_tolerance, lit};
use crate::period::Period;

/// Maps values of one period onto the unit circle and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Embedding<T>
where
    T: RealField + Copy,
{
    period: Period<T>,
    phase: T,
}

impl<T> Embedding<T>
where
    T: RealField + Copy,
{
    pub fn new(period: Period<T>) -> Self {
        Self {
            period,
            phase: T::zero(),
        }
    }

    /// Rotate the embedding so that value 0 lands at `phase` radians.
    pub fn with_phase(mut self, phase: T) -> Self {
        self.phase = phase;
        self
    }

    pub fn period(&self) -> Period<T> {
        self.period
    }

    pub fn phase(&self) -> T {
        self.phase
    }

    /// Embed `value` as a point on the unit circle.
    ///
    /// Total over finite input: no range restriction, `v` and `v + kP` map to
    /// the same point.
    pub fn embed(&self, value: T) -> CirclePoint<T> {
        // Reduce first so large inputs do not lose precision in cos/sin.
        let reduced = self.period.normalize(value);
        CirclePoint::from_angle(self.period.to_radians(reduced) + self.phase)
    }

    /// Value in `[0, P)` whose embedding is `point`.
    pub fn unembed(&self, point: &CirclePoint<T>) -> T {
        self.period
            .normalize(self.period.from_radians(point.angle() - self.phase))
    }

    /// Value under an arbitrary planar point, e.g. a drag handle position
    /// relative to the wheel centre. `None` at the centre itself.
    pub fn value_at(&self, x: T, y: T) -> Option<T> {
        CirclePoint::from_vector(Vector2::new(x, y)).map(|point| self.unembed(&point))
    }
}

/// Index of the candidate value circularly closest to `position`; ties keep
/// the first. Decides which drag handle a click on the ring moves.
///
/// # Errors
/// [`CircularError::EmptyInput`] if `candidates` is empty.
pub fn nearest_index<T>(
    position: T,
    candidates: &[T],
    period: Period<T>,
) -> Result<usize, CircularError>
where
    T: RealField + Copy,
{
    let embedding = Embedding::new(period);
    let handles: Vec<_> = candidates.iter().map(|&c| embedding.embed(c)).collect();
    let offsets = embedding.embed(position).batch_local_from_base(&handles);

    let mut best: Option<(usize, T)> = None;
    for (i, offset) in offsets.iter().enumerate() {
        let distance = offset.x.abs();
        match best {
            None => best = Some((i, distance)),
            Some((_, best_distance)) if distance < best_distance => best = Some((i, distance)),
            _ => {}
        }
    }
    best.map(|(i, _)| i).ok_or(CircularError::EmptyInput)
}

/// Result of [`circular_mean`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularMean<T> {
    /// Mean value in `[0, P)`.
    pub mean: T,
    /// `|Σ embeddings| / n`, in `[0, 1]`. Near 1 the inputs cluster tightly;
    /// near 0 they are spread around the cycle or cancel out.
    pub resultant_length: T,
    /// The vector sum vanished, so there is no mean direction. `mean` then
    /// holds the first input, normalised.
    pub degenerate: bool,
}

/// Embed `value` with a zero phase.
pub fn embed<T>(value: T, period: Period<T>) -> CirclePoint<T>
where
    T: RealField + Copy,
{
    Embedding::new(period).embed(value)
}

/// Shortest distance between `a` and `b` around the cycle, in `[0, P/2]`.
///
/// Symmetric, zero exactly when `a ≡ b (mod P)`, and `P/2` for antipodes.
pub fn circular_distance<T>(a: T, b: T, period: Period<T>) -> T
where
    T: RealField + Copy,
{
    let embedding = Embedding::new(period);
    // acos of the clamped dot product
    let radians = embedding.embed(a).distance(&embedding.embed(b));
    period.from_radians(radians)
}

/// Signed shortest step from `a` to `b`, in `[-P/2, P/2)`.
///
/// Positive means `b` is reached by increasing the value; an exactly
/// antipodal `b` gives `-P/2`.
pub fn shortest_signed_delta<T>(a: T, b: T, period: Period<T>) -> T
where
    T: RealField + Copy,
{
    period.wrap_signed(b - a)
}

/// Midpoint of the shorter arc between `a` and `b`, in `[0, P)`.
///
/// Agrees with `circular_mean(&[a, b])` whenever that mean is not
/// degenerate.
pub fn shortest_midpoint<T>(a: T, b: T, period: Period<T>) -> T
where
    T: RealField + Copy,
{
    interpolate(a, b, lit(0.5), period)
}

/// Point a fraction `t` along the shorter arc from `a` to `b`, in `[0, P)`.
pub fn interpolate<T>(a: T, b: T, t: T, period: Period<T>) -> T
where
    T: RealField + Copy,
{
    period.normalize(a + t * shortest_signed_delta(a, b, period))
}

/// `steps + 1` evenly spaced values along the shorter arc from `a` to `b`.
///
/// Adjacent samples are equally far apart on the circle, which is what makes
/// a hue gradient between 340° and 40° pass through red instead of cyan.
pub fn sample_arc<T>(a: T, b: T, steps: usize, period: Period<T>) -> Vec<T>
where
    T: RealField + Copy,
{
    let embedding = Embedding::new(period);
    geodesic_samples(&embedding.embed(a), &embedding.embed(b), steps)
        .iter()
        .map(|point| embedding.unembed(point))
        .collect()
}

/// Circular mean of `values` using the default degeneracy tolerance.
///
/// # Errors
/// [`CircularError::EmptyInput`] if `values` is empty.
pub fn circular_mean<T>(values: &[T], period: Period<T>) -> Result<CircularMean<T>, CircularError>
where
    T: RealField + Copy,
{
    circular_mean_with_tolerance(values, period, degenerate_tolerance())
}

/// Circular mean of `values`; the mean counts as degenerate when the
/// resultant length is below `tolerance`.
pub fn circular_mean_with_tolerance<T>(
    values: &[T],
    period: Period<T>,
    tolerance: T,
) -> Result<CircularMean<T>, CircularError>
where
    T: RealField + Copy,
{
    let first = *values.first().ok_or(CircularError::EmptyInput)?;
    let embedding = Embedding::new(period);

    let sum = values
        .iter()
        .map(|&v| embedding.embed(v).into_unit_vector().into_inner())
        .fold(Vector2::zeros(), |acc, v| acc + v);

    let count: T = lit(values.len() as f64);
    let resultant_length = (sum.norm() / count).min(T::one());

    if resultant_length < tolerance {
        debug!(
            count = values.len(),
            resultant_length = %resultant_length,
            "mean direction undefined, falling back to first value"
        );
        return Ok(CircularMean {
            mean: period.normalize(first),
            resultant_length,
            degenerate: true,
        });
    }

    let mean = period.normalize(period.from_radians(sum.y.atan2(sum.x)));
    Ok(CircularMean {
        mean,
        resultant_length,
        degenerate: false,
    })
}

/// How a renderer should sweep the arc from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSweep<T> {
    /// Length of the arc, in `[0, P/2]`.
    pub span: T,
    /// The arc covers more than half the cycle.
    pub large_arc: bool,
    /// The arc runs in the direction of increasing value.
    pub positive: bool,
}

impl<T> ArcSweep<T>
where
    T: RealField + Copy,
{
    /// Sweep along the shorter arc from `a` to `b`.
    pub fn between(a: T, b: T, period: Period<T>) -> Self {
        let delta = shortest_signed_delta(a, b, period);
        Self::from_delta(delta, period)
    }

    /// Sweep for an explicit signed span, which may exceed half the cycle.
    pub fn from_delta(delta: T, period: Period<T>) -> Self {
        let span = delta.abs();
        Self {
            span,
            large_arc: span > period.half(),
            positive: delta > T::zero(),
        }
    }
}

/// Successive signed steps of a sequence, each in `[-P/2, P/2)`.
///
/// Empty for fewer than two values.
pub fn angular_steps<T>(values: &[T], period: Period<T>) -> Vec<T>
where
    T: RealField + Copy,
{
    values
        .windows(2)
        .map(|pair| shortest_signed_delta(pair[0], pair[1], period))
        .collect()
}

#[cfg(test)]
mod tests;
