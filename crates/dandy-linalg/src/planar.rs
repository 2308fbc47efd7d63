//! Functions that only make sense for 2-vectors.

use dandy_core::{Cast, Expr, Scalar, Vector};

/// Angles of 2-vectors.
pub trait Planar: Expr<2> {
    /// Angle from the positive x axis in radians, `atan2(y, x)`.
    fn angle(&self) -> f64
    where
        Self::Scalar: Cast<f64>,
    {
        let x: f64 = self.at(0).cast();
        let y: f64 = self.at(1).cast();
        y.atan2(x)
    }
}

impl<E: Expr<2> + ?Sized> Planar for E {}

/// Construction from an angle.
pub trait FromAngle {
    /// The vector `(cos theta, sin theta)`.
    fn from_angle(theta: f64) -> Self;
}

impl<T: Scalar> FromAngle for Vector<T, 2>
where
    f64: Cast<T>,
{
    fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Vector::new([cos.cast(), sin.cast()])
    }
}
