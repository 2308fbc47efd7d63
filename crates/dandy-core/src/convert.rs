//! Two-way conversion between vectors and foreign types.
//!
//! Implement [`Convert<F>`] for a vector type to register a converter for
//! `F`. [`Vector::from_foreign`] and [`Vector::to_foreign`] only compile for
//! registered pairs, and [`impl_foreign_conversions!`](crate::impl_foreign_conversions)
//! turns a registration into `From` impls in both directions.
//!
//! ```
//! use dandy_core::{Convert, Vector, impl_foreign_conversions, vec2};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! impl Convert<Point> for Vector<f32, 2> {
//!     fn write_foreign(&self, out: &mut Point) {
//!         out.x = self[0];
//!         out.y = self[1];
//!     }
//!
//!     fn read_foreign(from: &Point, out: &mut Self) {
//!         *out = vec2(from.x, from.y);
//!     }
//! }
//!
//! impl_foreign_conversions!(Vector<f32, 2>, Point);
//!
//! let p: Point = vec2(1.0, 2.0).into();
//! assert_eq!(p, Point { x: 1.0, y: 2.0 });
//! let v = Vector::<f32, 2>::from(p);
//! assert_eq!(v, vec2(1.0, 2.0));
//! ```

use crate::scalar::Scalar;
use crate::vector::Vector;

/// A registered converter between `Self` (a vector type) and `F`.
///
/// Converting through an unregistered pair does not compile:
///
/// ```compile_fail
/// use dandy_core::Vector;
///
/// #[derive(Default)]
/// struct Unregistered;
///
/// let _ = Vector::<f32, 2>::from_foreign(&Unregistered);
/// ```
///
/// ```compile_fail
/// use dandy_core::vec3;
///
/// #[derive(Default)]
/// struct Unregistered;
///
/// let _: Unregistered = vec3(1, 2, 3).to_foreign();
/// ```
pub trait Convert<F> {
    /// Writes this vector into an existing foreign value.
    fn write_foreign(&self, out: &mut F);

    /// Overwrites `out` with the contents of a foreign value.
    fn read_foreign(from: &F, out: &mut Self);
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Builds a vector from a foreign value through its registered converter.
    pub fn from_foreign<F>(from: &F) -> Self
    where
        Self: Convert<F>,
    {
        let mut out = Self::ZERO;
        <Self as Convert<F>>::read_foreign(from, &mut out);
        out
    }

    /// Converts into a default-constructed foreign value.
    pub fn to_foreign<F: Default>(&self) -> F
    where
        Self: Convert<F>,
    {
        let mut out = F::default();
        self.write_foreign(&mut out);
        out
    }
}

/// Generates `From<$foreign> for $vector` and `From<$vector> for $foreign`
/// from a [`Convert`] impl. The foreign type must implement `Default`.
#[macro_export]
macro_rules! impl_foreign_conversions {
    ($vector:ty, $foreign:ty) => {
        impl ::core::convert::From<$foreign> for $vector {
            fn from(from: $foreign) -> Self {
                <$vector>::from_foreign(&from)
            }
        }

        impl ::core::convert::From<$vector> for $foreign {
            fn from(v: $vector) -> Self {
                v.to_foreign::<$foreign>()
            }
        }
    };
}

// ============================================================================
// Built-in converters
// ============================================================================

impl<T: Scalar, const N: usize> Convert<[T; N]> for Vector<T, N> {
    fn write_foreign(&self, out: &mut [T; N]) {
        *out = *self.as_array();
    }

    fn read_foreign(from: &[T; N], out: &mut Self) {
        *out = Self::new(*from);
    }
}

macro_rules! tuple_converter {
    ($n:literal: ($($t:ident),*) => ($($i:tt),*)) => {
        impl<T: Scalar> Convert<($($t,)*)> for Vector<T, $n> {
            fn write_foreign(&self, out: &mut ($($t,)*)) {
                $(out.$i = self[$i];)*
            }

            fn read_foreign(from: &($($t,)*), out: &mut Self) {
                $(out[$i] = from.$i;)*
            }
        }
    };
}

tuple_converter!(2: (T, T) => (0, 1));
tuple_converter!(3: (T, T, T) => (0, 1, 2));
tuple_converter!(4: (T, T, T, T) => (0, 1, 2, 3));

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, vec3, vec4};

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Color {
        r: u8,
        g: u8,
        b: u8,
    }

    impl Convert<Color> for Vector<u8, 3> {
        fn write_foreign(&self, out: &mut Color) {
            *out = Color {
                r: self[0],
                g: self[1],
                b: self[2],
            };
        }

        fn read_foreign(from: &Color, out: &mut Self) {
            *out = vec3(from.r, from.g, from.b);
        }
    }

    crate::impl_foreign_conversions!(Vector<u8, 3>, Color);

    #[test]
    fn test_custom_round_trip() {
        let v = vec3(10u8, 20, 30);
        let c: Color = v.into();
        assert_eq!(c, Color { r: 10, g: 20, b: 30 });
        assert_eq!(Vector::<u8, 3>::from(c), v);

        let c = Color { r: 1, g: 2, b: 3 };
        assert_eq!(Vector::<u8, 3>::from_foreign(&c).to_foreign::<Color>(), c);
    }

    #[test]
    fn test_array_round_trip() {
        let v = vec4(1.5f32, 2.5, 3.5, 4.5);
        let a: [f32; 4] = v.to_foreign();
        assert_eq!(a, [1.5, 2.5, 3.5, 4.5]);
        assert_eq!(Vector::<f32, 4>::from_foreign(&a), v);
    }

    #[test]
    fn test_tuple_round_trip() {
        let v = vec2(-3i64, 9);
        let t: (i64, i64) = v.to_foreign();
        assert_eq!(t, (-3, 9));
        assert_eq!(Vector::<i64, 2>::from_foreign(&t), v);
    }

    #[test]
    fn test_write_into_existing() {
        let mut t = (0u16, 0u16, 0u16);
        vec3(7u16, 8, 9).write_foreign(&mut t);
        assert_eq!(t, (7, 8, 9));
    }
}
