//! Scalar component types, casts between them, and arithmetic promotion.

use std::fmt;

// ============================================================================
// Scalar Trait
// ============================================================================

/// Trait for types that can be stored as vector components.
///
/// Implemented for `bool` and the primitive integer and float types. Which
/// operators a scalar supports is decided per combinator (e.g. `bool` has no
/// `+`), so this trait only carries what every component type shares.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + bytemuck::NoUninit
    + Send
    + Sync
    + 'static
{
    /// The additive identity (`false` for `bool`).
    const ZERO: Self;
    /// The multiplicative identity (`true` for `bool`).
    const ONE: Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:literal, $one:literal;)*) => {$(
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    )*};
}

impl_scalar! {
    bool => false, true;
    i8 => 0, 1;
    u8 => 0, 1;
    i16 => 0, 1;
    u16 => 0, 1;
    i32 => 0, 1;
    u32 => 0, 1;
    i64 => 0, 1;
    u64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

// ============================================================================
// Casts
// ============================================================================

/// Conversion to another scalar type with `as` semantics.
///
/// Float to integer truncates toward zero and saturates, `bool` converts to
/// `0`/`1`, and any non-zero value converts to `true`.
pub trait Cast<T>: Scalar {
    fn cast(self) -> T;
}

macro_rules! impl_numeric_casts {
    (@to $from:ty => $($to:ty),*) => {$(
        impl Cast<$to> for $from {
            #[inline]
            fn cast(self) -> $to {
                self as $to
            }
        }
    )*};
    ($($from:ty),*) => {$(
        impl_numeric_casts!(@to $from => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
    )*};
}

impl_numeric_casts!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

macro_rules! impl_bool_casts {
    ($($t:ty),*) => {$(
        impl Cast<$t> for bool {
            #[inline]
            fn cast(self) -> $t {
                u8::from(self) as $t
            }
        }

        impl Cast<bool> for $t {
            #[inline]
            fn cast(self) -> bool {
                self != <$t as Scalar>::ZERO
            }
        }
    )*};
}

impl_bool_casts!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl Cast<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

// ============================================================================
// Promotion
// ============================================================================

/// The common type two scalars are combined in.
///
/// Mirrors the usual arithmetic conversions: identical types stay as they
/// are, `bool` yields to the other operand, floats win over integers, wider
/// types win over narrower ones, and at equal width unsigned wins over
/// signed. Ordered from weakest to strongest:
///
/// ```text
/// bool < i8 < u8 < i16 < u16 < i32 < u32 < i64 < u64 < f32 < f64
/// ```
///
/// ```
/// use dandy_core::Promote;
///
/// assert_eq!(<i32 as Promote<f64>>::promote(2, 0.5), (2.0, 0.5));
/// assert_eq!(<u8 as Promote<bool>>::promote(7, true), (7, 1));
/// ```
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    /// Converts both operands to the common type.
    fn promote(lhs: Self, rhs: Rhs) -> (Self::Output, Self::Output);
}

macro_rules! impl_promote_identity {
    ($($t:ty),*) => {$(
        impl Promote<$t> for $t {
            type Output = $t;

            #[inline]
            fn promote(lhs: $t, rhs: $t) -> ($t, $t) {
                (lhs, rhs)
            }
        }
    )*};
}

impl_promote_identity!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

// Each line reads "weaker => every stronger type"; both operand orders are
// generated and the stronger type is the result.
macro_rules! impl_promote {
    ($($lo:ty => $($hi:ty),+;)*) => {$($(
        impl Promote<$hi> for $lo {
            type Output = $hi;

            #[inline]
            fn promote(lhs: $lo, rhs: $hi) -> ($hi, $hi) {
                (<$lo as Cast<$hi>>::cast(lhs), rhs)
            }
        }

        impl Promote<$lo> for $hi {
            type Output = $hi;

            #[inline]
            fn promote(lhs: $hi, rhs: $lo) -> ($hi, $hi) {
                (lhs, <$lo as Cast<$hi>>::cast(rhs))
            }
        }
    )+)*};
}

impl_promote! {
    bool => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64;
    i8 => u8, i16, u16, i32, u32, i64, u64, f32, f64;
    u8 => i16, u16, i32, u32, i64, u64, f32, f64;
    i16 => u16, i32, u32, i64, u64, f32, f64;
    u16 => i32, u32, i64, u64, f32, f64;
    i32 => u32, i64, u64, f32, f64;
    u32 => i64, u64, f32, f64;
    i64 => u64, f32, f64;
    u64 => f32, f64;
    f32 => f64;
}

// ============================================================================
// Tests
// ============================================================================
