//! Operator overloading.
//!
//! Every operator builds a node and returns it; none of them evaluate.
//! Expressions accept any [`Operand`] on the right. A scalar on the left is
//! only accepted for the commutative operators, so `2i32 * v` works and
//! `2i32 - v` does not compile. A left-hand scalar needs a known type: the
//! operator is implemented once per primitive, so an unsuffixed literal
//! (`2 * v`) leaves the result type ambiguous. Compound assignment is defined
//! on [`Vector`] only and evaluates immediately, casting back to the vector's
//! scalar type.

use crate::expr::{Expr, Operand, Splat};
use crate::op::{
    AddOp, Binary, BinaryFn, BitAndOp, BitOrOp, BitXorOp, DivOp, MulOp, NegOp, NotOp, RemOp,
    ShlOp, ShrOp, SubOp, Unary, UnaryFn,
};
use crate::scalar::{Cast, Scalar};
use crate::vector::Vector;
use std::ops;

// ============================================================================
// Expression on the left
// ============================================================================

macro_rules! expr_operators {
    (@one [$($gen:tt)*] $lhs:ty, $trait:ident $method:ident $op:ident) => {
        impl<$($gen)*, Rhs> ops::$trait<Rhs> for $lhs
        where
            $lhs: Expr<N>,
            Rhs: Operand<N>,
            $op: BinaryFn<<$lhs as Expr<N>>::Scalar, <<Rhs as Operand<N>>::Node as Expr<N>>::Scalar>,
        {
            type Output = Binary<$op, $lhs, <Rhs as Operand<N>>::Node, N>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                Binary::new($op, self, rhs.into_node())
            }
        }
    };
    (@unary [$($gen:tt)*] $operand:ty, $trait:ident $method:ident $op:ident) => {
        impl<$($gen)*> ops::$trait for $operand
        where
            $operand: Expr<N>,
            $op: UnaryFn<<$operand as Expr<N>>::Scalar>,
        {
            type Output = Unary<$op, $operand, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                Unary::new($op, self)
            }
        }
    };
    ([$($gen:tt)*] $lhs:ty) => {
        expr_operators!(@one [$($gen)*] $lhs, Add add AddOp);
        expr_operators!(@one [$($gen)*] $lhs, Sub sub SubOp);
        expr_operators!(@one [$($gen)*] $lhs, Mul mul MulOp);
        expr_operators!(@one [$($gen)*] $lhs, Div div DivOp);
        expr_operators!(@one [$($gen)*] $lhs, Rem rem RemOp);
        expr_operators!(@one [$($gen)*] $lhs, BitAnd bitand BitAndOp);
        expr_operators!(@one [$($gen)*] $lhs, BitOr bitor BitOrOp);
        expr_operators!(@one [$($gen)*] $lhs, BitXor bitxor BitXorOp);
        expr_operators!(@one [$($gen)*] $lhs, Shl shl ShlOp);
        expr_operators!(@one [$($gen)*] $lhs, Shr shr ShrOp);
        expr_operators!(@unary [$($gen)*] $lhs, Neg neg NegOp);
        expr_operators!(@unary [$($gen)*] $lhs, Not not NotOp);
    };
}

expr_operators!([T: Scalar, const N: usize] Vector<T, N>);
expr_operators!(['a, T: Scalar, const N: usize] &'a Vector<T, N>);
expr_operators!([F, E, const N: usize] Unary<F, E, N>);
expr_operators!([F, L, R, const N: usize] Binary<F, L, R, N>);

// ============================================================================
// Scalar on the left (commutative operators only)
// ============================================================================

macro_rules! scalar_first_operators {
    (@one $s:ty, [$($gen:tt)*] $rhs:ty, $trait:ident $method:ident $op:ident) => {
        impl<$($gen)*> ops::$trait<$rhs> for $s
        where
            $rhs: Expr<N>,
            $op: BinaryFn<$s, <$rhs as Expr<N>>::Scalar>,
        {
            type Output = Binary<$op, Splat<$s>, $rhs, N>;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                Binary::new($op, Splat(self), rhs)
            }
        }
    };
    (@rhs $s:ty, [$($gen:tt)*] $rhs:ty) => {
        scalar_first_operators!(@one $s, [$($gen)*] $rhs, Add add AddOp);
        scalar_first_operators!(@one $s, [$($gen)*] $rhs, Mul mul MulOp);
        scalar_first_operators!(@one $s, [$($gen)*] $rhs, BitAnd bitand BitAndOp);
        scalar_first_operators!(@one $s, [$($gen)*] $rhs, BitOr bitor BitOrOp);
        scalar_first_operators!(@one $s, [$($gen)*] $rhs, BitXor bitxor BitXorOp);
    };
    ($($s:ty),*) => {$(
        scalar_first_operators!(@rhs $s, [T: Scalar, const N: usize] Vector<T, N>);
        scalar_first_operators!(@rhs $s, ['a, T: Scalar, const N: usize] &'a Vector<T, N>);
        scalar_first_operators!(@rhs $s, [F, E, const N: usize] Unary<F, E, N>);
        scalar_first_operators!(@rhs $s, [F, L, R, const N: usize] Binary<F, L, R, N>);
    )*};
}

scalar_first_operators!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

// ============================================================================
// Compound assignment
// ============================================================================

macro_rules! assign_operators {
    ($($trait:ident $method:ident $op:ident;)*) => {$(
        impl<T, Rhs, const N: usize> ops::$trait<Rhs> for Vector<T, N>
        where
            T: Scalar,
            Rhs: Operand<N>,
            $op: BinaryFn<T, <<Rhs as Operand<N>>::Node as Expr<N>>::Scalar>,
            <$op as BinaryFn<T, <<Rhs as Operand<N>>::Node as Expr<N>>::Scalar>>::Output: Cast<T>,
        {
            #[inline]
            fn $method(&mut self, rhs: Rhs) {
                let lhs = *self;
                self.assign(Binary::<_, _, _, N>::new($op, lhs, rhs.into_node()));
            }
        }
    )*};
}

assign_operators! {
    AddAssign add_assign AddOp;
    SubAssign sub_assign SubOp;
    MulAssign mul_assign MulOp;
    DivAssign div_assign DivOp;
    RemAssign rem_assign RemOp;
    BitAndAssign bitand_assign BitAndOp;
    BitOrAssign bitor_assign BitOrOp;
    BitXorAssign bitxor_assign BitXorOp;
    ShlAssign shl_assign ShlOp;
    ShrAssign shr_assign ShrOp;
}

// ============================================================================
// Tests
// ============================================================================
