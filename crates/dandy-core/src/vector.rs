//! The materialized vector value.

use crate::Error;
use crate::expr::Expr;
use crate::op::{Binary, Unary};
use crate::scalar::{Cast, Promote, Scalar};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

// ============================================================================
// Vector
// ============================================================================

/// A fixed-size vector of `N` components of type `T`.
///
/// The only expression with storage. Operators on vectors (and on
/// references to them) build lazy nodes; evaluating a node produces a new
/// `Vector`.
///
/// `N` must be at least 2. This is checked when the vector is constructed,
/// so `Vector<f32, 1>` is a compile error on first use.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    const SIZE_CHECK: () = assert!(N >= 2, "vectors need at least two components");

    /// All components zero (`false` for `bool`).
    pub const ZERO: Self = Self::splat(T::ZERO);

    /// All components one (`true` for `bool`).
    pub const ONE: Self = Self::splat(T::ONE);

    pub const fn new(data: [T; N]) -> Self {
        let () = Self::SIZE_CHECK;
        Self { data }
    }

    /// Every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Component `i` set to `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Evaluates any same-size expression, casting each component to `T`.
    ///
    /// ```
    /// use dandy_core::{Vector, vec2};
    ///
    /// let a = vec2(1.5, 2.5);
    /// let v = Vector::<i32, 2>::from_expr(&a * 2);
    /// assert_eq!(v, vec2(3, 5));
    /// ```
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: Expr<N>,
        E::Scalar: Cast<T>,
    {
        expr.eval_as()
    }

    /// Collects exactly `N` components.
    ///
    /// At most `N + 1` items are pulled, so an iterator that is too long
    /// reports `got: N + 1` and an unbounded one still returns.
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> Result<Self, Error> {
        let mut data = [T::ZERO; N];
        let mut got = 0;
        for value in iter.into_iter().take(N + 1) {
            if let Some(slot) = data.get_mut(got) {
                *slot = value;
            }
            got += 1;
        }
        if got != N {
            return Err(Error::LengthMismatch { expected: N, got });
        }
        Ok(Self::new(data))
    }

    /// Overwrites every component from a same-size expression.
    ///
    /// The expression is read component by component, so it must not borrow
    /// `self`; the borrow checker enforces this.
    pub fn assign<E>(&mut self, expr: E)
    where
        E: Expr<N>,
        E::Scalar: Cast<T>,
    {
        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = expr.at(i).cast();
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Scalar, const N: usize> Expr<N> for Vector<T, N> {
    type Scalar = T;

    #[inline]
    fn at(&self, index: usize) -> T {
        self.data[index]
    }

    fn eval(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Hashes the raw component bytes.
impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(bytemuck::cast_slice::<T, u8>(&self.data));
    }
}

impl<T: Scalar + Eq + Promote<T>, const N: usize> Eq for Vector<T, N> {}

// ============================================================================
// Iteration
// ============================================================================

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self, Error> {
        <[T; N]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| Error::LengthMismatch {
                expected: N,
                got: slice.len(),
            })
    }
}

impl<T, F, E, const N: usize> From<Unary<F, E, N>> for Vector<T, N>
where
    T: Scalar,
    Unary<F, E, N>: Expr<N>,
    <Unary<F, E, N> as Expr<N>>::Scalar: Cast<T>,
{
    fn from(node: Unary<F, E, N>) -> Self {
        node.eval_as()
    }
}

impl<T, F, L, R, const N: usize> From<Binary<F, L, R, N>> for Vector<T, N>
where
    T: Scalar,
    Binary<F, L, R, N>: Expr<N>,
    <Binary<F, L, R, N> as Expr<N>>::Scalar: Cast<T>,
{
    fn from(node: Binary<F, L, R, N>) -> Self {
        node.eval_as()
    }
}

// ============================================================================
// Named components
// ============================================================================

macro_rules! named_components {
    ($n:literal: $($index:literal => $get:ident, $get_mut:ident, $set:ident;)*) => {
        impl<T: Scalar> Vector<T, $n> {
            $(
                #[inline]
                pub const fn $get(&self) -> T {
                    self.data[$index]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.data[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.data[$index] = value;
                }
            )*
        }
    };
}

named_components!(2:
    0 => x, x_mut, set_x;
    1 => y, y_mut, set_y;
);
named_components!(3:
    0 => x, x_mut, set_x;
    1 => y, y_mut, set_y;
    2 => z, z_mut, set_z;
);
named_components!(4:
    0 => x, x_mut, set_x;
    1 => y, y_mut, set_y;
    2 => z, z_mut, set_z;
    3 => w, w_mut, set_w;
);

macro_rules! tuple_conversions {
    ($n:literal: ($($t:ident),*) => ($($i:tt),*)) => {
        impl<T: Scalar> From<($($t,)*)> for Vector<T, $n> {
            fn from(t: ($($t,)*)) -> Self {
                Self::new([$(t.$i),*])
            }
        }

        impl<T: Scalar> From<Vector<T, $n>> for ($($t,)*) {
            fn from(v: Vector<T, $n>) -> Self {
                ($(v.data[$i],)*)
            }
        }
    };
}

tuple_conversions!(2: (T, T) => (0, 1));
tuple_conversions!(3: (T, T, T) => (0, 1, 2));
tuple_conversions!(4: (T, T, T, T) => (0, 1, 2, 3));

pub const fn vec2<T: Scalar>(x: T, y: T) -> Vector<T, 2> {
    Vector::new([x, y])
}

pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::new([x, y, z])
}

pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::new([x, y, z, w])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_construction() {
        assert_eq!(Vector::<f64, 3>::default(), vec3(0.0, 0.0, 0.0));
        assert_eq!(Vector::<i32, 2>::ONE, vec2(1, 1));
        assert_eq!(Vector::<u8, 4>::splat(7), vec4(7, 7, 7, 7));
        assert_eq!(Vector::<bool, 2>::ZERO, vec2(false, false));
        assert_eq!(Vector::<i64, 3>::from_fn(|i| i as i64 * 10), vec3(0, 10, 20));
        assert_eq!(Vector::from([1, 2]), vec2(1, 2));
    }

    #[test]
    fn test_from_expression_casts() {
        let a = vec2(1.9, 2.1);
        let v: Vector<i32, 2> = (&a + 1).into();
        assert_eq!(v, vec2(2, 3));
        let w: Vector<f32, 2> = (-&a).into();
        assert_eq!(w, vec2(-1.9f32, -2.1));
        let u = Vector::<u8, 2>::from_expr(vec2(300, 4));
        assert_eq!(u, vec2(44, 4));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = vec2(1, 2);
        let mut b = a;
        b[0] = 10;
        assert_eq!(a[0], 1);
        assert_eq!(b, vec2(10, 2));
    }

    #[test]
    fn test_indexing() {
        let mut v = vec3(1, 2, 3);
        v[1] = 20;
        assert_eq!(v[1], 20);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
        if let Some(c) = v.get_mut(0) {
            *c = -1;
        }
        assert_eq!(v.as_array(), &[-1, 20, 3]);
        assert_eq!(v.as_slice().len(), 3);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = vec2(1, 2);
        let i = v.size();
        let _ = v[i];
    }

    #[test]
    fn test_assign() {
        let a = vec3(1, 2, 3);
        let mut v = Vector::<f64, 3>::ZERO;
        v.assign(&a * 2);
        assert_eq!(v, vec3(2.0, 4.0, 6.0));
        v.assign(vec3(0.5, 0.5, 0.5));
        assert_eq!(v, vec3(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_slice_and_iter_construction() {
        let v = Vector::<i32, 3>::try_from(&[1, 2, 3][..]);
        assert_eq!(v, Ok(vec3(1, 2, 3)));
        let short = Vector::<i32, 3>::try_from(&[1, 2][..]);
        assert_eq!(short, Err(Error::LengthMismatch { expected: 3, got: 2 }));

        assert_eq!(Vector::<u16, 2>::try_from_iter([4, 5]), Ok(vec2(4, 5)));
        assert_eq!(
            Vector::<u16, 2>::try_from_iter(0..5),
            Err(Error::LengthMismatch { expected: 2, got: 3 })
        );
        assert_eq!(
            Vector::<u16, 2>::try_from_iter([7]),
            Err(Error::LengthMismatch { expected: 2, got: 1 })
        );
    }

    #[test]
    fn test_try_from_unbounded_iter() {
        assert_eq!(
            Vector::<u64, 4>::try_from_iter(0..),
            Err(Error::LengthMismatch { expected: 4, got: 5 })
        );
        let v = Vector::<u64, 3>::try_from_iter((1..).take(3));
        assert_eq!(v, Ok(vec3(1, 2, 3)));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v.iter().sum::<i32>(), 10);
        assert_eq!(v.iter().sum::<i32>(), 10);
        for c in &mut v {
            *c *= 2;
        }
        assert_eq!((&v).into_iter().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
        assert_eq!(v.into_iter().max(), Some(8));
    }

    #[test]
    fn test_named_components() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        v.set_x(10);
        *v.w_mut() += 1;
        assert_eq!(v, vec4(10, 2, 3, 5));

        let mut p = vec2(0.5, 1.5);
        *p.y_mut() = 2.0;
        assert_eq!(p.y(), 2.0);
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vector<i32, 3> = (1, 2, 3).into();
        assert_eq!(v, vec3(1, 2, 3));
        let t: (i32, i32, i32) = v.into();
        assert_eq!(t, (1, 2, 3));
        let a: [i32; 3] = v.into();
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(v.into_array(), [1, 2, 3]);
    }

    #[test]
    fn test_hash_set_dedupes() {
        let mut set = HashSet::new();
        set.insert(vec2(1, 2));
        set.insert(vec2(1, 2));
        set.insert(vec2(2, 1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&vec2(2, 1)));
    }
}
