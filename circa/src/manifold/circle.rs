//! S^1 manifold (unit circle in R^2) implementation.
//!
//! A point is a unit vector `(cos θ, sin θ)`. The tangent space is the line
//! orthogonal to it, so a tangent vector is a single signed angle in radians.

use nalgebra::{RealField, Unit, Vector1, Vector2, U1};

use super::Manifold;
use crate::math::scalar::clamp_unit;
use crate::period::Period;

/// A point on the unit circle.
///
/// `(x, y)` is the canonical representation used for dot products and vector
/// sums. The angle is carried alongside for convenience. It is the `atan2` of
/// the stored vector with `-π` folded onto `π`, so it lies in `(-π, π]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePoint<T>
where
    T: RealField + Copy,
{
    point: Unit<Vector2<T>>,
    angle: T,
}

/// `atan2` of the point, folded into `(-π, π]`.
///
/// `atan2(-0.0, x < 0)` is `-π`, which sits on the same point as `π`.
fn principal_angle<T>(point: &Unit<Vector2<T>>) -> T
where
    T: RealField + Copy,
{
    let angle = point.y.atan2(point.x);
    if angle <= -T::pi() {
        T::pi()
    } else {
        angle
    }
}

impl<T> CirclePoint<T>
where
    T: RealField + Copy,
{
    /// Point at angle `theta` radians. Any finite angle is accepted.
    pub fn from_angle(theta: T) -> Self {
        let point = Unit::new_normalize(Vector2::new(theta.cos(), theta.sin()));
        let angle = principal_angle(&point);
        Self { point, angle }
    }

    /// Project a planar vector onto the circle; `None` for the zero vector.
    pub fn from_vector(vector: Vector2<T>) -> Option<Self> {
        Unit::try_new(vector, T::default_epsilon()).map(|point| {
            let angle = principal_angle(&point);
            Self { point, angle }
        })
    }

    /// The point at angle zero, `(1, 0)`.
    pub fn identity() -> Self {
        Self {
            point: Vector2::x_axis(),
            angle: T::zero(),
        }
    }

    pub fn x(&self) -> T {
        self.point.x
    }

    pub fn y(&self) -> T {
        self.point.y
    }

    /// Angle in radians, in `(-π, π]`.
    pub fn angle(&self) -> T {
        self.angle
    }

    /// Borrow the underlying unit vector.
    pub fn as_unit_vector(&self) -> &Unit<Vector2<T>> {
        &self.point
    }

    /// Consume the wrapper and return the unit vector.
    pub fn into_unit_vector(self) -> Unit<Vector2<T>> {
        self.point
    }

    /// Cosine of the angle between the two points, clamped into `[-1, 1]`.
    pub fn dot(&self, other: &Self) -> T {
        clamp_unit(self.point.as_ref().dot(other.point.as_ref()))
    }
}

impl<T> Manifold<U1, T> for CirclePoint<T>
where
    T: RealField + Copy,
{
    fn retract(&self, delta: &Vector1<T>) -> Self {
        Self::from_angle(self.angle + delta.x)
    }

    fn local(&self, other: &Self) -> Vector1<T> {
        // Antipodal points resolve to -π, matching `Period::wrap_signed`.
        Vector1::new(Period::radians().wrap_signed(other.angle - self.angle))
    }

    fn distance(&self, other: &Self) -> T {
        self.dot(other).acos()
    }
}
