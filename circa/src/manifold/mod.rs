//! Manifold view of cyclic and linear quantities
//!
//! A cyclic quantity lives on the circle S^1, whose tangent space is one
//! dimensional. Treating the same quantity as a point on the real line gives
//! the naive arithmetic that breaks at the wraparound. Both geometries
//! implement [`Manifold`], so anything written against the trait (interpolation,
//! path sampling) runs unchanged under either and the two can be compared.

use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OVector, RealField};

use crate::math::scalar::lit;

/// A point on a manifold with a tangent space of dimension `TangentDim`.
///
/// - `retract`: tangent space to manifold (exponential map)
/// - `local`: manifold to tangent space (logarithmic map)
///
/// # Properties
///
/// Implementations must satisfy:
/// 1. `retract(x, local(x, y)) ≈ y` for all `x`, `y`
/// 2. `local(x, retract(x, delta)) ≈ delta` for small `delta`
/// 3. `local(x, x) = 0`
/// 4. `retract(x, 0) = x`
pub trait Manifold<TangentDim: DimName, T: RealField + Copy>: Clone + Sized
where
    DefaultAllocator: Allocator<TangentDim>,
{
    /// Move away from `self` along the tangent vector `delta`.
    fn retract(&self, delta: &OVector<T, TangentDim>) -> Self;

    /// Tangent vector at `self` that `retract`s onto `other`.
    fn local(&self, other: &Self) -> OVector<T, TangentDim>;

    /// Length of the tangent vector from `self` to `other`.
    fn distance(&self, other: &Self) -> T {
        self.local(other).norm()
    }

    /// Point a fraction `t` of the way from `self` to `other` along the geodesic.
    ///
    /// `t = 0` gives `self`, `t = 1` gives `other`.
    fn interpolate(&self, other: &Self, t: T) -> Self {
        let delta = self.local(other) * t;
        self.retract(&delta)
    }

    /// Tangent vectors from `self` to each of `targets`, in order.
    fn batch_local_from_base(&self, targets: &[Self]) -> Vec<OVector<T, TangentDim>> {
        targets.iter().map(|target| self.local(target)).collect()
    }
}

/// `steps + 1` evenly spaced points from `start` to `end` along the geodesic.
///
/// With `steps == 0` only `start` is returned.
pub fn geodesic_samples<M, D, T>(start: &M, end: &M, steps: usize) -> Vec<M>
where
    M: Manifold<D, T>,
    D: DimName,
    T: RealField + Copy,
    DefaultAllocator: Allocator<D>,
{
    if steps == 0 {
        return vec![start.clone()];
    }

    let delta = start.local(end);
    let count: T = lit(steps as f64);
    (0..=steps)
        .map(|i| {
            let t = lit::<T>(i as f64) / count;
            start.retract(&(delta.clone() * t))
        })
        .collect()
}

pub mod circle;
pub mod line;

pub use circle::CirclePoint;
pub use line::LinePoint;
