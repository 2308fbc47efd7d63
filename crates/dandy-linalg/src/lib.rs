//! Vector math for dandy expressions.
//!
//! Every function here is written once against [`Expr<N>`], so it works on
//! stored vectors and on unevaluated operation nodes alike:
//!
//! ```
//! use dandy_linalg::prelude::*;
//!
//! let a = vec3(1, 2, 3);
//! let b = vec3(4, 5, 6);
//!
//! assert_eq!(a.dot(&b), 32);
//! assert_eq!(a.cross(&b), vec3(-3, 6, -3));
//! // `&a + &b` is never materialized; `length` reads it component by component.
//! assert_eq!((&a + &b).length2(), 155);
//! assert!((vec2(1, 1).length() - 2f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! # Functions
//!
//! | Function | Trait | Result |
//! |----------|-------|--------|
//! | `sum()`, `product()` | [`VectorMath`] | scalar |
//! | `nonzero()`, `contains(s)` | [`VectorMath`] | `bool` |
//! | `dot(b)`, `length2()`, `distance2(b)` | [`VectorMath`] | promoted scalar |
//! | `length()`, `distance(b)`, `delta_angle(b)` | [`VectorMath`] | `f64` |
//! | `normalize()`, `set_length(l)`, `lerp(b, t)`, `reflect(n)` | [`VectorMath`] | `Vector<f64, N>` |
//! | `hadamard(b)` | [`VectorMath`] | lazy node |
//! | `apply(f)`, `zip_with(b, f)`, `cast::<T>()` | [`Elementwise`] | lazy node |
//! | `abs()` | [`Elementwise`] | lazy node, signed scalars only |
//! | `round()`, `floor()`, `ceil()` | [`Elementwise`] | lazy node, float scalars only |
//! | `angle()` | [`Planar`] | `f64`, 2-vectors only |
//! | `from_angle(theta)` | [`FromAngle`] | `Vector<T, 2>` |
//! | `cross(b)` | [`Spatial`] | `Vector`, 3-vectors only |
//!
//! Calling a function on a scalar type it does not support (`abs` on `u32`,
//! `floor` on `i32`, `sum` on `bool`) is a compile error.

use dandy_core::{Binary, BinaryFn, Cast, Expr, MulOp, Scalar, Splat, SubOp, Vector};
use num_traits::{One, Zero};

mod funcs;
mod planar;
mod spatial;

pub use funcs::{AbsOp, CastOp, CeilOp, Elementwise, FloorOp, RoundOp};
pub use planar::{FromAngle, Planar};
pub use spatial::Spatial;

/// Everything needed to write vector math: the core types and traits plus
/// the math traits from this crate.
pub mod prelude {
    pub use crate::{Elementwise, FromAngle, Planar, Spatial, VectorMath};
    pub use dandy_core::{Compare, Expr, Vector, vec2, vec3, vec4};
}

// ============================================================================
// VectorMath
// ============================================================================

/// Reductions and geometric functions over any expression.
///
/// Functions returning `f64` (and `Vector<f64, N>`) convert the components
/// to `f64` first, so they behave the same for integer and float vectors.
/// The others stay in the (promoted) scalar type and follow its native
/// overflow behavior.
pub trait VectorMath<const N: usize>: Expr<N> {
    /// Sum of the components.
    fn sum(&self) -> Self::Scalar
    where
        Self::Scalar: Zero,
    {
        (0..N).fold(<Self::Scalar as Zero>::zero(), |acc, i| acc + self.at(i))
    }

    /// Product of the components.
    fn product(&self) -> Self::Scalar
    where
        Self::Scalar: One,
    {
        (0..N).fold(<Self::Scalar as One>::one(), |acc, i| acc * self.at(i))
    }

    /// `true` if any component is non-zero.
    fn nonzero(&self) -> bool {
        (0..N).any(|i| self.at(i) != <Self::Scalar as Scalar>::ZERO)
    }

    /// `true` if any component equals `value`.
    fn contains(&self, value: Self::Scalar) -> bool {
        (0..N).any(|i| self.at(i) == value)
    }

    fn dot<R>(&self, other: &R) -> <MulOp as BinaryFn<Self::Scalar, R::Scalar>>::Output
    where
        R: Expr<N> + ?Sized,
        MulOp: BinaryFn<Self::Scalar, R::Scalar>,
        <MulOp as BinaryFn<Self::Scalar, R::Scalar>>::Output: Zero,
    {
        Binary::<_, _, _, N>::new(MulOp, self, other).sum()
    }

    /// Squared length, `self.dot(self)`.
    fn length2(&self) -> Self::Scalar
    where
        MulOp: BinaryFn<Self::Scalar, Self::Scalar, Output = Self::Scalar>,
        Self::Scalar: Zero,
    {
        self.dot(self)
    }

    fn length(&self) -> f64
    where
        Self::Scalar: Cast<f64>,
    {
        self.eval_as::<f64>().length2().sqrt()
    }

    /// Squared distance, the squared length of `self - other`.
    fn distance2<R>(&self, other: &R) -> <SubOp as BinaryFn<Self::Scalar, R::Scalar>>::Output
    where
        R: Expr<N> + ?Sized,
        SubOp: BinaryFn<Self::Scalar, R::Scalar>,
        MulOp: BinaryFn<
                <SubOp as BinaryFn<Self::Scalar, R::Scalar>>::Output,
                <SubOp as BinaryFn<Self::Scalar, R::Scalar>>::Output,
                Output = <SubOp as BinaryFn<Self::Scalar, R::Scalar>>::Output,
            >,
        <SubOp as BinaryFn<Self::Scalar, R::Scalar>>::Output: Zero,
    {
        Binary::<_, _, _, N>::new(SubOp, self, other).length2()
    }

    fn distance<R>(&self, other: &R) -> f64
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Cast<f64>,
        R::Scalar: Cast<f64>,
    {
        (self.eval_as::<f64>() - other.eval_as::<f64>()).length()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector has no direction and normalizes to NaN components.
    fn normalize(&self) -> Vector<f64, N>
    where
        Self::Scalar: Cast<f64>,
    {
        let v = self.eval_as::<f64>();
        (v / v.length()).eval()
    }

    /// Vector in the same direction with length `length`.
    fn set_length(&self, length: f64) -> Vector<f64, N>
    where
        Self::Scalar: Cast<f64>,
    {
        (self.normalize() * length).eval()
    }

    /// Angle between `self` and `other` in radians, in `[0, pi]`.
    fn delta_angle<R>(&self, other: &R) -> f64
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Cast<f64>,
        R::Scalar: Cast<f64>,
    {
        let a = self.eval_as::<f64>();
        let b = other.eval_as::<f64>();
        // Rounding can push the cosine of (anti)parallel vectors past 1.
        let cos = a.dot(&b) / (a.length2() * b.length2()).sqrt();
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Lazy component-wise product.
    fn hadamard<'a, R>(&'a self, other: &'a R) -> Binary<MulOp, &'a Self, &'a R, N>
    where
        R: Expr<N> + ?Sized,
        MulOp: BinaryFn<Self::Scalar, R::Scalar>,
    {
        Binary::new(MulOp, self, other)
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`.
    fn lerp<R>(&self, other: &R, t: f64) -> Vector<f64, N>
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Cast<f64>,
        R::Scalar: Cast<f64>,
    {
        let a = self.eval_as::<f64>();
        let b = other.eval_as::<f64>();
        (a + (b - a) * t).eval()
    }

    /// Reflects `self` about the plane with the given normal:
    /// `v - 2 * dot(v, n) * n`. The normal is expected to be unit length.
    fn reflect<R>(&self, normal: &R) -> Vector<f64, N>
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Cast<f64>,
        R::Scalar: Cast<f64>,
    {
        let v = self.eval_as::<f64>();
        let n = normal.eval_as::<f64>();
        (v - n * Splat(2.0 * v.dot(&n))).eval()
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> VectorMath<N> for E {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dandy_core::{vec2, vec3, vec4};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_sum_product() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.sum(), 10);
        assert_eq!(v.product(), 24);
        assert_eq!((&v * 2).sum(), 20);
        assert_eq!(vec2(0.5, 4.0).product(), 2.0);
    }

    #[test]
    fn test_nonzero_contains() {
        assert!(vec3(0, 0, 1).nonzero());
        assert!(!vec3(0, 0, 0).nonzero());
        assert!(vec2(false, true).nonzero());
        assert!(!(vec2(3, 3) - 3).nonzero());

        let v = vec3(1.5, 2.5, 3.5);
        assert!(v.contains(2.5));
        assert!(!v.contains(2.0));
    }

    #[test]
    fn test_dot() {
        assert_eq!(vec2(1, 0).dot(&vec2(0, 1)), 0);
        assert_eq!(vec2(1, 2).dot(&vec2(3, 4)), 11);
        assert_eq!(vec3(1, 2, 3).dot(&vec3(0.5, 0.5, 0.5)), 3.0);
    }

    #[test]
    fn test_length() {
        assert!(close(vec2(1, 1).length(), 2f64.sqrt()));
        assert_eq!(vec2(3, 4).length(), 5.0);
        assert_eq!(vec2(3, 4).length2(), 25);
        assert_eq!(vec3(200u8, 0, 0).length(), 200.0);
    }

    #[test]
    fn test_distance() {
        let a = vec2(1, 1);
        let b = vec2(4, 5);
        assert_eq!(a.distance2(&b), 25);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(vec2(0u32, 0).distance(&vec2(3u32, 4)), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = vec2(3, 4).normalize();
        assert!(close(n[0], 0.6));
        assert!(close(n[1], 0.8));
        assert!(close(n.length(), 1.0));

        let s = vec3(0.0, 0.0, 2.0).set_length(5.0);
        assert_eq!(s, vec3(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = vec2(0, 0).normalize();
        assert!(n[0].is_nan() && n[1].is_nan());
    }

    #[test]
    fn test_delta_angle() {
        assert!(close(vec2(1, 0).delta_angle(&vec2(0, 1)), FRAC_PI_2));
        assert!(close(vec2(1, 0).delta_angle(&vec2(-2, 0)), PI));
        assert_eq!(vec3(1.0, 2.0, 3.0).delta_angle(&vec3(2.0, 4.0, 6.0)), 0.0);
    }

    #[test]
    fn test_hadamard_is_lazy() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let h = a.hadamard(&b);
        assert_eq!(h.at(2), 18);
        assert_eq!(h.eval(), vec3(4, 10, 18));
        assert_eq!(h.sum(), a.dot(&b));
    }

    #[test]
    fn test_lerp() {
        let a = vec2(0, 10);
        let b = vec2(10, 20);
        assert_eq!(a.lerp(&b, 0.0), vec2(0.0, 10.0));
        assert_eq!(a.lerp(&b, 0.5), vec2(5.0, 15.0));
        assert_eq!(a.lerp(&b, 1.0), vec2(10.0, 20.0));
    }

    #[test]
    fn test_reflect() {
        let v = vec2(1.0, -1.0);
        let n = vec2(0.0, 1.0);
        assert_eq!(v.reflect(&n), vec2(1.0, 1.0));
    }

    #[test]
    fn test_math_on_nodes() {
        let a = vec2(1, 2);
        let b = vec2(2, 2);
        let diff = &b - &a;
        assert_eq!(diff.length2(), 1);
        assert_eq!((&a * 3).dot(&diff), 3);
        assert!(close((-&a).normalize().length(), 1.0));
    }
}

// ============================================================================
// Property-based tests (proptest)
// ============================================================================

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn float3() -> impl Strategy<Value = Vector<f64, 3>> {
        prop::array::uniform3(-100.0f64..100.0).prop_map(Vector::new)
    }

    fn int3() -> impl Strategy<Value = Vector<i64, 3>> {
        prop::array::uniform3(-1000i64..1000).prop_map(Vector::new)
    }

    proptest! {
        /// dot is symmetric
        #[test]
        fn dot_is_symmetric(a in int3(), b in int3()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        /// cross is perpendicular to both operands
        #[test]
        fn cross_is_perpendicular(a in int3(), b in int3()) {
            let c = a.cross(&b);
            prop_assert_eq!(c.dot(&a), 0);
            prop_assert_eq!(c.dot(&b), 0);
        }

        /// normalized vectors have unit length
        #[test]
        fn normalize_has_unit_length(v in float3()) {
            prop_assume!(v.length() > 1e-6);
            prop_assert!((v.normalize().length() - 1.0).abs() < 1e-9);
        }

        /// distance agrees with the length of the difference
        #[test]
        fn distance_matches_difference(a in float3(), b in float3()) {
            let d = a.distance(&b);
            prop_assert!((d - (&a - &b).length()).abs() < 1e-9);
            prop_assert!((d * d - a.distance2(&b)).abs() < 1e-6);
        }

        /// the angle between two vectors is in [0, pi]
        #[test]
        fn delta_angle_in_range(a in float3(), b in float3()) {
            prop_assume!(a.length() > 1e-6 && b.length() > 1e-6);
            let angle = a.delta_angle(&b);
            prop_assert!((0.0..=std::f64::consts::PI).contains(&angle));
        }
    }
}
