//! The real line as a (flat) manifold.
//!
//! This is the geometry naive arithmetic assumes for a cyclic quantity:
//! - retract(x, delta) = x + delta
//! - local(x, y) = y - x
//!
//! Nothing wraps, so 350° and 10° are 340 apart and their midpoint is 180°.

use nalgebra::{RealField, Vector1, U1};

use super::Manifold;

/// A point on the real line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint<T>(pub T);

impl<T> LinePoint<T>
where
    T: RealField + Copy,
{
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T> Manifold<U1, T> for LinePoint<T>
where
    T: RealField + Copy,
{
    fn retract(&self, delta: &Vector1<T>) -> Self {
        Self(self.0 + delta.x)
    }

    fn local(&self, other: &Self) -> Vector1<T> {
        Vector1::new(other.0 - self.0)
    }
}
