//! Lazy operation nodes and the elementwise combinators they apply.
//!
//! A node stores a combinator and its operands and nothing else. Reading
//! component `i` reads component `i` of every operand and feeds the values
//! through the combinator, recursively down the tree.

use crate::expr::{Expr, Operand};
use crate::scalar::{Cast, Promote, Scalar};
use std::fmt;
use std::ops;

// ============================================================================
// Combinator traits
// ============================================================================

/// A pure elementwise function of one scalar.
pub trait UnaryFn<A: Scalar> {
    type Output: Scalar;

    fn call(&self, a: A) -> Self::Output;
}

/// A pure elementwise function of two scalars.
///
/// The output type is decided per operand pair, which is where scalar
/// promotion happens for the arithmetic combinators.
pub trait BinaryFn<A: Scalar, B: Scalar> {
    type Output: Scalar;

    fn call(&self, a: A, b: B) -> Self::Output;
}

// ============================================================================
// Operation nodes
// ============================================================================

/// A lazy node applying a [`UnaryFn`] to one operand.
#[derive(Debug, Clone, Copy)]
pub struct Unary<F, E, const N: usize> {
    func: F,
    operand: E,
}

impl<F, E, const N: usize> Unary<F, E, N> {
    pub const fn new(func: F, operand: E) -> Self {
        Self { func, operand }
    }

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn operand(&self) -> &E {
        &self.operand
    }
}

impl<F, E, const N: usize> Expr<N> for Unary<F, E, N>
where
    E: Expr<N>,
    F: UnaryFn<E::Scalar>,
{
    type Scalar = F::Output;

    #[inline]
    fn at(&self, index: usize) -> F::Output {
        self.func.call(self.operand.at(index))
    }
}

/// A lazy node applying a [`BinaryFn`] to two operands of the same size.
#[derive(Debug, Clone, Copy)]
pub struct Binary<F, L, R, const N: usize> {
    func: F,
    lhs: L,
    rhs: R,
}

impl<F, L, R, const N: usize> Binary<F, L, R, N> {
    pub const fn new(func: F, lhs: L, rhs: R) -> Self {
        Self { func, lhs, rhs }
    }

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<F, L, R, const N: usize> Expr<N> for Binary<F, L, R, N>
where
    L: Expr<N>,
    R: Expr<N>,
    F: BinaryFn<L::Scalar, R::Scalar>,
{
    type Scalar = F::Output;

    #[inline]
    fn at(&self, index: usize) -> F::Output {
        self.func.call(self.lhs.at(index), self.rhs.at(index))
    }
}

/// Builds a unary node. Scalars are accepted and broadcast.
///
/// ```
/// use dandy_core::{Expr, Map, unary, vec3};
///
/// let v = vec3(1, 2, 3);
/// let squares = unary(Map(|x: i32| x * x), &v);
/// assert_eq!(squares.eval(), vec3(1, 4, 9));
/// ```
pub fn unary<F, E, const N: usize>(func: F, operand: E) -> Unary<F, E::Node, N>
where
    E: Operand<N>,
    F: UnaryFn<<E::Node as Expr<N>>::Scalar>,
{
    Unary::new(func, operand.into_node())
}

/// Builds a binary node. Either operand may be a scalar.
///
/// The size comes from the expression operands. With scalars on both sides
/// nothing fixes `N`, so such a node does not compile:
///
/// ```compile_fail
/// use dandy_core::{AddOp, Expr, binary};
///
/// let _ = binary(AddOp, 1i32, 2i32).eval();
/// ```
///
/// Naming `N` explicitly builds a broadcast node of that size instead, just
/// like evaluating a [`Splat`](crate::Splat) at a chosen size:
///
/// ```
/// use dandy_core::{AddOp, Expr, binary, vec3};
///
/// let node = binary::<_, _, _, 3>(AddOp, 1i32, 2i32);
/// assert_eq!(node.eval(), vec3(3, 3, 3));
/// ```
pub fn binary<F, L, R, const N: usize>(func: F, lhs: L, rhs: R) -> Binary<F, L::Node, R::Node, N>
where
    L: Operand<N>,
    R: Operand<N>,
    F: BinaryFn<<L::Node as Expr<N>>::Scalar, <R::Node as Expr<N>>::Scalar>,
{
    Binary::new(func, lhs.into_node(), rhs.into_node())
}

// ============================================================================
// Arithmetic and bitwise combinators
// ============================================================================

macro_rules! promoted_op {
    ($($(#[$meta:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<A, B> BinaryFn<A, B> for $name
        where
            A: Promote<B>,
            B: Scalar,
            A::Output: ops::$trait<Output = A::Output>,
        {
            type Output = A::Output;

            #[inline]
            fn call(&self, a: A, b: B) -> A::Output {
                let (a, b) = A::promote(a, b);
                ops::$trait::$method(a, b)
            }
        }
    )*};
}

promoted_op! {
    /// `a + b` in the promoted type.
    AddOp => Add::add;
    /// `a - b` in the promoted type.
    SubOp => Sub::sub;
    /// `a * b` in the promoted type.
    MulOp => Mul::mul;
    /// `a / b` in the promoted type.
    DivOp => Div::div;
    /// `a % b` in the promoted type.
    RemOp => Rem::rem;
    BitAndOp => BitAnd::bitand;
    BitOrOp => BitOr::bitor;
    BitXorOp => BitXor::bitxor;
}

macro_rules! shift_op {
    ($($(#[$meta:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<A, B> BinaryFn<A, B> for $name
        where
            A: Scalar + ops::$trait<u32, Output = A>,
            B: Cast<u32>,
        {
            type Output = A;

            #[inline]
            fn call(&self, a: A, b: B) -> A {
                ops::$trait::$method(a, b.cast())
            }
        }
    )*};
}

shift_op! {
    /// `a << b`, keeping the type of `a`.
    ShlOp => Shl::shl;
    /// `a >> b`, keeping the type of `a`.
    ShrOp => Shr::shr;
}

/// `-a`. Only signed integers and floats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NegOp;

impl<A: Scalar + ops::Neg<Output = A>> UnaryFn<A> for NegOp {
    type Output = A;

    #[inline]
    fn call(&self, a: A) -> A {
        -a
    }
}

/// `!a`: bitwise not on integers, logical not on `bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotOp;

impl<A: Scalar + ops::Not<Output = A>> UnaryFn<A> for NotOp {
    type Output = A;

    #[inline]
    fn call(&self, a: A) -> A {
        !a
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<A: Scalar> UnaryFn<A> for Identity {
    type Output = A;

    #[inline]
    fn call(&self, a: A) -> A {
        a
    }
}

// ============================================================================
// Closure combinators
// ============================================================================

/// Wraps a closure `Fn(A) -> R` as a [`UnaryFn`].
#[derive(Clone, Copy)]
pub struct Map<F>(pub F);

impl<F> fmt::Debug for Map<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

impl<F, A, R> UnaryFn<A> for Map<F>
where
    F: Fn(A) -> R,
    A: Scalar,
    R: Scalar,
{
    type Output = R;

    #[inline]
    fn call(&self, a: A) -> R {
        (self.0)(a)
    }
}

/// Wraps a closure `Fn(A, B) -> R` as a [`BinaryFn`].
#[derive(Clone, Copy)]
pub struct Zip<F>(pub F);

impl<F> fmt::Debug for Zip<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip").finish_non_exhaustive()
    }
}

impl<F, A, B, R> BinaryFn<A, B> for Zip<F>
where
    F: Fn(A, B) -> R,
    A: Scalar,
    B: Scalar,
    R: Scalar,
{
    type Output = R;

    #[inline]
    fn call(&self, a: A, b: B) -> R {
        (self.0)(a, b)
    }
}

// ============================================================================
// Tests
// ============================================================================
