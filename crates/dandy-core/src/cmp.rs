//! Equality and the per-component partial order.
//!
//! Comparisons never build nodes: they read both sides component by
//! component and return a `bool` straight away. Mixed scalar types are
//! compared after promotion, so `vec2(1, 2) == vec2(1.0, 2.0)`.

use crate::expr::Expr;
use crate::op::{Binary, Unary};
use crate::scalar::{Promote, Scalar};
use crate::vector::Vector;

fn all_components<L, R, const N: usize>(
    lhs: &L,
    rhs: &R,
    pred: impl Fn(
        <L::Scalar as Promote<R::Scalar>>::Output,
        <L::Scalar as Promote<R::Scalar>>::Output,
    ) -> bool,
) -> bool
where
    L: Expr<N> + ?Sized,
    R: Expr<N> + ?Sized,
    L::Scalar: Promote<R::Scalar>,
{
    (0..N).all(|i| {
        let (a, b) = <L::Scalar as Promote<R::Scalar>>::promote(lhs.at(i), rhs.at(i));
        pred(a, b)
    })
}

// ============================================================================
// Equality
// ============================================================================

impl<T, Rhs, const N: usize> PartialEq<Rhs> for Vector<T, N>
where
    T: Scalar + Promote<Rhs::Scalar>,
    Rhs: Expr<N>,
{
    fn eq(&self, other: &Rhs) -> bool {
        all_components::<_, _, N>(self, other, |a, b| a == b)
    }
}

impl<F, E, Rhs, const N: usize> PartialEq<Rhs> for Unary<F, E, N>
where
    Self: Expr<N>,
    Rhs: Expr<N>,
    <Self as Expr<N>>::Scalar: Promote<Rhs::Scalar>,
{
    fn eq(&self, other: &Rhs) -> bool {
        all_components::<_, _, N>(self, other, |a, b| a == b)
    }
}

impl<F, L, R, Rhs, const N: usize> PartialEq<Rhs> for Binary<F, L, R, N>
where
    Self: Expr<N>,
    Rhs: Expr<N>,
    <Self as Expr<N>>::Scalar: Promote<Rhs::Scalar>,
{
    fn eq(&self, other: &Rhs) -> bool {
        all_components::<_, _, N>(self, other, |a, b| a == b)
    }
}

// ============================================================================
// Partial order
// ============================================================================

/// Per-component ordering between same-size expressions.
///
/// `a.all_lt(&b)` holds when every component of `a` is strictly less than
/// the matching component of `b`. This is not lexicographic: `(1, 2)` and
/// `(2, 1)` are unordered, so neither `all_lt` holds in either direction.
///
/// | Method | Holds when, for every `i` |
/// |--------|---------------------------|
/// | `all_lt` | `a[i] < b[i]` |
/// | `all_le` | `a[i] <= b[i]` |
/// | `all_gt` | `b[i] < a[i]` |
/// | `all_ge` | `b[i] <= a[i]` |
pub trait Compare<const N: usize>: Expr<N> {
    fn all_lt<R>(&self, other: &R) -> bool
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Promote<R::Scalar>,
    {
        all_components::<_, _, N>(self, other, |a, b| a < b)
    }

    fn all_le<R>(&self, other: &R) -> bool
    where
        R: Expr<N> + ?Sized,
        Self::Scalar: Promote<R::Scalar>,
    {
        all_components::<_, _, N>(self, other, |a, b| a <= b)
    }

    fn all_gt<R>(&self, other: &R) -> bool
    where
        R: Expr<N> + ?Sized,
        R::Scalar: Promote<Self::Scalar>,
    {
        all_components::<_, _, N>(other, self, |a, b| a < b)
    }

    fn all_ge<R>(&self, other: &R) -> bool
    where
        R: Expr<N> + ?Sized,
        R::Scalar: Promote<Self::Scalar>,
    {
        all_components::<_, _, N>(other, self, |a, b| a <= b)
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> Compare<N> for E {}

// ============================================================================
// Tests
// ============================================================================
