//! Functions that only make sense for 3-vectors.

use dandy_core::{BinaryFn, Expr, MulOp, Scalar, SubOp, Vector};

/// Cross product of 3-vectors.
pub trait Spatial: Expr<3> {
    /// Evaluates `self x other` in the promoted scalar type.
    ///
    /// Each output component reads two components of each operand, so the
    /// result is computed eagerly rather than as an elementwise node.
    fn cross<R, P>(&self, other: &R) -> Vector<P, 3>
    where
        R: Expr<3> + ?Sized,
        MulOp: BinaryFn<Self::Scalar, R::Scalar, Output = P>,
        SubOp: BinaryFn<P, P, Output = P>,
        P: Scalar,
    {
        let component = |a: usize, b: usize| {
            let lhs = MulOp.call(self.at(a), other.at(b));
            let rhs = MulOp.call(self.at(b), other.at(a));
            SubOp.call(lhs, rhs)
        };
        Vector::new([component(1, 2), component(2, 0), component(0, 1)])
    }
}

impl<E: Expr<3> + ?Sized> Spatial for E {}
