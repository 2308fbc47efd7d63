//! The expression abstraction shared by vector values and operation nodes.

use crate::display::Named;
use crate::op::{Identity, Unary};
use crate::scalar::{Cast, Scalar};
use crate::vector::Vector;

// ============================================================================
// Expr Trait
// ============================================================================

/// A vector-valued expression of size `N`.
///
/// Implemented by [`Vector`] (the only expression with storage), by the lazy
/// operation nodes [`Unary`](crate::Unary) and [`Binary`](crate::Binary), by
/// [`Splat`] (a broadcast scalar), and by shared references to any of them.
///
/// The size lives in the type, so two expressions can only be combined when
/// their `N` agree:
///
/// ```
/// use dandy_core::{Expr, vec2};
///
/// assert_eq!((vec2(1, 2) + vec2(3, 4)).eval(), vec2(4, 6));
/// ```
///
/// ```compile_fail
/// use dandy_core::{Expr, vec2, vec3};
///
/// let _ = (vec2(1, 2) + vec3(3, 4, 5)).eval();
/// ```
pub trait Expr<const N: usize> {
    /// Component type produced by [`at`](Expr::at).
    type Scalar: Scalar;

    /// Computes the component at `index`.
    ///
    /// Operation nodes recompute on every call; nothing is cached.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    fn at(&self, index: usize) -> Self::Scalar;

    /// Number of components.
    fn size(&self) -> usize {
        N
    }

    /// Name of the component type, e.g. `"f64"`.
    fn scalar_type(&self) -> &'static str {
        std::any::type_name::<Self::Scalar>()
    }

    /// Evaluates every component into a new vector.
    fn eval(&self) -> Vector<Self::Scalar, N> {
        Vector::from_fn(|i| self.at(i))
    }

    /// Evaluates every component, casting each to `T`.
    fn eval_as<T: Scalar>(&self) -> Vector<T, N>
    where
        Self::Scalar: Cast<T>,
    {
        Vector::from_fn(|i| self.at(i).cast())
    }

    /// Unary plus: a node that yields each component unchanged.
    fn pos(&self) -> Unary<Identity, &Self, N> {
        Unary::new(Identity, self)
    }

    /// Displays as `name(v0, v1, ...)`.
    ///
    /// ```
    /// use dandy_core::{Expr, vec4};
    ///
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.named("Point").to_string(), "Point(1, 2, 3, 4)");
    /// ```
    fn named<'a>(&'a self, name: &'a str) -> Named<'a, Self, N> {
        Named::new(name, self)
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> Expr<N> for &E {
    type Scalar = E::Scalar;

    #[inline]
    fn at(&self, index: usize) -> Self::Scalar {
        (**self).at(index)
    }
}

// ============================================================================
// Scalar operands
// ============================================================================

/// A scalar broadcast to every component.
///
/// This is how bare scalars take part in operations: `v * 2` builds a node
/// whose right operand is `Splat(2)`. A splat fits any size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Splat<T>(pub T);

impl<T: Scalar, const N: usize> Expr<N> for Splat<T> {
    type Scalar = T;

    #[inline]
    fn at(&self, _index: usize) -> T {
        self.0
    }
}

/// Anything that can appear as an operand of size `N`: an expression, or a
/// primitive scalar which is wrapped in [`Splat`].
pub trait Operand<const N: usize> {
    type Node: Expr<N>;

    fn into_node(self) -> Self::Node;
}

impl<E: Expr<N>, const N: usize> Operand<N> for E {
    type Node = E;

    #[inline]
    fn into_node(self) -> E {
        self
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {$(
        impl<const N: usize> Operand<N> for $t {
            type Node = Splat<$t>;

            #[inline]
            fn into_node(self) -> Splat<$t> {
                Splat(self)
            }
        }
    )*};
}

impl_scalar_operand!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

// ============================================================================
// Tests
// ============================================================================
