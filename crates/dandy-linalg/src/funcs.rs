//! Elementwise functions: lazy nodes applying a scalar function per component.

use dandy_core::{Binary, Cast, Expr, Map, Scalar, Unary, UnaryFn, Zip};
use num_traits::{Float, Signed};
use std::marker::PhantomData;

// ============================================================================
// Scalar functions
// ============================================================================

/// Absolute value. Signed integers and floats only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AbsOp;

impl<A: Scalar + Signed> UnaryFn<A> for AbsOp {
    type Output = A;

    #[inline]
    fn call(&self, a: A) -> A {
        a.abs()
    }
}

macro_rules! float_op {
    ($($(#[$meta:meta])* $name:ident => $method:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<A: Scalar + Float> UnaryFn<A> for $name {
            type Output = A;

            #[inline]
            fn call(&self, a: A) -> A {
                Float::$method(a)
            }
        }
    )*};
}

float_op! {
    /// Round half away from zero.
    RoundOp => round;
    FloorOp => floor;
    CeilOp => ceil;
}

/// Conversion to `T` with `as` semantics.
pub struct CastOp<T>(PhantomData<T>);

impl<T> CastOp<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CastOp<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CastOp<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CastOp<T> {}

impl<T> std::fmt::Debug for CastOp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CastOp<{}>", std::any::type_name::<T>())
    }
}

impl<A: Cast<T>, T: Scalar> UnaryFn<A> for CastOp<T> {
    type Output = T;

    #[inline]
    fn call(&self, a: A) -> T {
        a.cast()
    }
}

// ============================================================================
// Elementwise
// ============================================================================

/// Lazy elementwise functions over any expression.
///
/// Each method borrows `self` and returns a node; nothing is computed until
/// the node is read or evaluated.
///
/// ```
/// use dandy_linalg::prelude::*;
///
/// let v = vec3(-1.5, 0.25, 2.5);
/// assert_eq!(v.abs().eval(), vec3(1.5, 0.25, 2.5));
/// assert_eq!(v.floor().eval(), vec3(-2.0, 0.0, 2.0));
/// assert_eq!(v.cast::<i32>().eval(), vec3(-1, 0, 2));
/// assert_eq!(v.apply(|x| x * 2.0).eval(), vec3(-3.0, 0.5, 5.0));
/// ```
pub trait Elementwise<const N: usize>: Expr<N> {
    fn apply<F, R>(&self, f: F) -> Unary<Map<F>, &Self, N>
    where
        F: Fn(Self::Scalar) -> R,
        R: Scalar,
    {
        Unary::new(Map(f), self)
    }

    fn zip_with<'a, E, F, R>(&'a self, other: &'a E, f: F) -> Binary<Zip<F>, &'a Self, &'a E, N>
    where
        E: Expr<N> + ?Sized,
        F: Fn(Self::Scalar, E::Scalar) -> R,
        R: Scalar,
    {
        Binary::new(Zip(f), self, other)
    }

    /// Lazy absolute value. Unsigned and `bool` vectors have no `abs`:
    ///
    /// ```compile_fail
    /// use dandy_linalg::prelude::*;
    ///
    /// let _ = vec2(1u32, 2).abs().eval();
    /// ```
    fn abs(&self) -> Unary<AbsOp, &Self, N>
    where
        Self::Scalar: Signed,
    {
        Unary::new(AbsOp, self)
    }

    fn round(&self) -> Unary<RoundOp, &Self, N>
    where
        Self::Scalar: Float,
    {
        Unary::new(RoundOp, self)
    }

    /// Lazy floor. Only float vectors can be rounded:
    ///
    /// ```compile_fail
    /// use dandy_linalg::prelude::*;
    ///
    /// let _ = vec2(1i32, 2).floor().eval();
    /// ```
    fn floor(&self) -> Unary<FloorOp, &Self, N>
    where
        Self::Scalar: Float,
    {
        Unary::new(FloorOp, self)
    }

    fn ceil(&self) -> Unary<CeilOp, &Self, N>
    where
        Self::Scalar: Float,
    {
        Unary::new(CeilOp, self)
    }

    /// Lazily converts each component to `T`.
    fn cast<T: Scalar>(&self) -> Unary<CastOp<T>, &Self, N>
    where
        Self::Scalar: Cast<T>,
    {
        Unary::new(CastOp::new(), self)
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> Elementwise<N> for E {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dandy_core::{Vector, vec2, vec3, vec4};

    #[test]
    fn test_abs() {
        assert_eq!(vec3(-1, 0, 5).abs().eval(), vec3(1, 0, 5));
        assert_eq!(vec2(-0.5f32, 0.5).abs().eval(), vec2(0.5f32, 0.5));
    }

    #[test]
    fn test_rounding() {
        let v = vec4(-1.5, -0.4, 0.5, 2.7);
        assert_eq!(v.round().eval(), vec4(-2.0, -0.0, 1.0, 3.0));
        assert_eq!(v.floor().eval(), vec4(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(v.ceil().eval(), vec4(-1.0, -0.0, 1.0, 3.0));
    }

    #[test]
    fn test_cast() {
        let v = vec3(1.9, -1.9, 300.0);
        assert_eq!(v.cast::<i32>().eval(), vec3(1, -1, 300));
        assert_eq!(v.cast::<u8>().eval(), vec3(1u8, 0, 255));
        assert_eq!(vec2(0, 2).cast::<bool>().eval(), vec2(false, true));
        assert_eq!(v.cast::<f32>().scalar_type(), "f32");
    }

    #[test]
    fn test_apply_and_zip() {
        let a = vec3(1, 2, 3);
        let b = vec3(3, 2, 1);
        assert_eq!(a.apply(|x| x * x).eval(), vec3(1, 4, 9));
        assert_eq!(a.apply(|x| x > 1).eval(), vec3(false, true, true));
        assert_eq!(a.zip_with(&b, i32::max).eval(), vec3(3, 2, 3));
    }

    #[test]
    fn test_chained_on_nodes() {
        let a = vec2(-1.25, 2.75);
        let b = vec2(0.5, 0.5);
        let node = &a + &b;
        let rounded = node.floor();
        assert_eq!(rounded.eval(), vec2(-1.0, 3.0));
        let as_int: Vector<i64, 2> = rounded.cast::<i64>().eval();
        assert_eq!(as_int, vec2(-1, 3));
        assert_eq!((-&a).abs().eval(), vec2(1.25, 2.75));
    }
}
