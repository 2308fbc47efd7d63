//! # dandy-core
//!
//! Fixed-size vectors whose arithmetic is evaluated lazily.
//!
//! Writing `&a + &b * &c` does not compute anything. Each operator returns an
//! operation node that remembers its combinator and operands; the tree is
//! only walked when it is evaluated into a [`Vector`] (or when a single
//! component is read with [`Expr::at`]).
//!
//! ## Design
//!
//! - **One abstraction**: every vector value and every operation node
//!   implements [`Expr<N>`], so generic code (see `dandy-linalg`) is written
//!   once and works on both.
//! - **Checked by the compiler**: the size `N` is a const generic, so mixing
//!   a 2-vector with a 3-vector is a type error, as is `bool + bool` or `abs`
//!   on an unsigned vector. Nothing in the arithmetic path fails at runtime.
//! - **Borrowed or owned operands**: `&a + &b` borrows, `a + b` copies. The
//!   borrow checker guarantees a node never outlives the vectors it reads.
//! - **Native promotion**: mixing scalar types follows [`Promote`], e.g.
//!   `i32` with `f64` yields `f64`.
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parse` | `FromStr` for vectors, reading the `name(v0, v1, ...)` form (default) |
//!
//! ## Operators
//!
//! | Operation | Operands | Notes |
//! |-----------|----------|-------|
//! | `+` `*` `&` `\|` `^` | expr op expr, expr op scalar, scalar op expr | commutative, scalar may come first |
//! | `-` `/` `%` `<<` `>>` | expr op expr, expr op scalar | scalar may not come first |
//! | `-x` `!x` | expr | `!` is bitwise not (logical not on `bool`) |
//! | `op=` | vector op= expr, vector op= scalar | evaluates and casts back |
//! | `==` `!=` | expr, expr | compares after promotion |
//!
//! The per-component partial order lives on [`Compare`] (`all_lt`, `all_le`,
//! `all_gt`, `all_ge`).
//!
//! A scalar on the left must have a known type (`2i32 * v`, not `2 * v`),
//! since the operator is implemented separately for each primitive:
//!
//! ```
//! use dandy_core::{Expr, vec2};
//!
//! let v = vec2(1i32, 2);
//! assert_eq!((2i32 * &v).eval(), vec2(2, 4));
//! assert_eq!((&v - 2).eval(), vec2(-1, 0));
//! ```
//!
//! Non-commutative operators never take a scalar on the left:
//!
//! ```compile_fail
//! use dandy_core::{Expr, vec2};
//!
//! let v = vec2(1, 2);
//! let _ = (2i32 - &v).eval();
//! ```
//!
//! Neither do compound assignments into a scalar:
//!
//! ```compile_fail
//! use dandy_core::vec2;
//!
//! let mut s = 1i32;
//! s += vec2(1, 2);
//! ```
//!
//! Combinators reject scalar types they cannot handle, e.g. negating a `bool`:
//!
//! ```compile_fail
//! use dandy_core::{Expr, vec2};
//!
//! let _ = (-vec2(true, false)).eval();
//! ```
//!
//! ## Example
//!
//! ```
//! use dandy_core::{Expr, Vector, vec2};
//!
//! let a = vec2(1.5, 2.0);
//! let b = vec2(3, 4);
//!
//! // Nothing is computed yet: `expr` is an operation node borrowing `a` and `b`.
//! let expr = &a + &b * 2;
//! assert_eq!(expr.at(1), 10.0);
//!
//! // Materialize into a concrete vector.
//! let v: Vector<f64, 2> = expr.eval();
//! assert_eq!(v, vec2(7.5, 10.0));
//! assert_eq!(v.to_string(), "(7.5, 10)");
//! ```

pub mod cmp;
pub mod convert;
pub mod display;
pub mod expr;
pub mod op;
mod ops;
#[cfg(feature = "parse")]
pub mod parse;
pub mod scalar;
pub mod types;
pub mod vector;

pub use cmp::Compare;
pub use convert::Convert;
pub use display::Named;
pub use expr::{Expr, Operand, Splat};
pub use op::{
    AddOp, Binary, BinaryFn, BitAndOp, BitOrOp, BitXorOp, DivOp, Identity, Map, MulOp, NegOp,
    NotOp, RemOp, ShlOp, ShrOp, SubOp, Unary, UnaryFn, Zip, binary, unary,
};
pub use scalar::{Cast, Promote, Scalar};
pub use types::*;
pub use vector::{Vector, vec2, vec3, vec4};

// ============================================================================
// Errors
// ============================================================================

/// Errors from the fallible construction paths.
///
/// Arithmetic never fails: size and type mismatches are compile errors, and
/// out-of-range indexing panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slice or iterator had the wrong number of components. Iterators
    /// stop at `expected + 1`, so a long one reports exactly that.
    LengthMismatch { expected: usize, got: usize },
    /// Text could not be read back as a vector.
    #[cfg(feature = "parse")]
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LengthMismatch { expected, got } => {
                write!(f, "expected {expected} components, got {got}")
            }
            #[cfg(feature = "parse")]
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "parse")]
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Vector literal parse error.
#[cfg(feature = "parse")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    UnexpectedToken(String),
    InvalidNumber(String),
    /// The literal had a different number of components than the vector size.
    ComponentCount { expected: usize, got: usize },
}

#[cfg(feature = "parse")]
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of vector literal"),
            ParseError::UnexpectedToken(t) => write!(f, "unexpected token: '{t}'"),
            ParseError::InvalidNumber(s) => write!(f, "invalid number: '{s}'"),
            ParseError::ComponentCount { expected, got } => {
                write!(f, "expected {expected} components, got {got}")
            }
        }
    }
}

#[cfg(feature = "parse")]
impl std::error::Error for ParseError {}

#[cfg(feature = "parse")]
impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

// ============================================================================
// Property-based tests (proptest)
// ============================================================================

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn int3() -> impl Strategy<Value = Vector<i32, 3>> {
        prop::array::uniform3(-1000i32..1000).prop_map(Vector::new)
    }

    fn float3() -> impl Strategy<Value = Vector<f64, 3>> {
        prop::array::uniform3(-1.0e6f64..1.0e6).prop_map(Vector::new)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        /// Reading a component on demand matches the evaluated vector
        #[test]
        fn eval_matches_at(a in int3(), b in float3(), c in int3()) {
            let expr = &a + &b * &c;
            let v = expr.eval();
            for i in 0..3 {
                prop_assert_eq!(v[i], expr.at(i));
            }
        }

        /// Nested unary and scalar operands agree with hand-written arithmetic
        #[test]
        fn nested_expression_matches_scalar_math(a in int3(), b in int3(), s in -50i32..50) {
            let v = (-(&a - &b) * s + 3).eval();
            for i in 0..3 {
                prop_assert_eq!(v[i], -(a[i] - b[i]) * s + 3);
            }
        }

        /// Evaluating twice gives equal values
        #[test]
        fn eval_is_repeatable(a in float3(), b in float3()) {
            let expr = &a / 2.0 - &b;
            prop_assert_eq!(expr.eval(), expr.eval());
        }

        /// Equal vectors hash equally
        #[test]
        fn equal_vectors_hash_equally(a in int3()) {
            let b: Vector<i32, 3> = Vector::from_fn(|i| a[i]);
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        /// Display output reads back as the same vector
        #[cfg(feature = "parse")]
        #[test]
        fn display_parse_roundtrip(a in int3()) {
            let text = a.to_string();
            let parsed: Vector<i32, 3> = text.parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        /// Arbitrary input never panics the parser
        #[cfg(feature = "parse")]
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = s.parse::<Vector<f64, 2>>();
        }
    }
}
