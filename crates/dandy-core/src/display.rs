//! Text output: `(v0, v1, ...)` and `name(v0, v1, ...)`.

use crate::expr::Expr;
use crate::op::{Binary, Unary};
use crate::vector::Vector;
use std::fmt;

/// Writes `(v0, v1, ...)`, reading each component from `expr`.
///
/// Components use their own `Display`, so the formatter's precision and
/// width flags apply to every component.
fn write_components<E, const N: usize>(f: &mut fmt::Formatter<'_>, expr: &E) -> fmt::Result
where
    E: Expr<N> + ?Sized,
{
    f.write_str("(")?;
    for i in 0..N {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&expr.at(i), f)?;
    }
    f.write_str(")")
}

impl<T: crate::Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components::<_, N>(f, self)
    }
}

impl<F, E, const N: usize> fmt::Display for Unary<F, E, N>
where
    Self: Expr<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components::<_, N>(f, &self.eval())
    }
}

impl<F, L, R, const N: usize> fmt::Display for Binary<F, L, R, N>
where
    Self: Expr<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components::<_, N>(f, &self.eval())
    }
}

/// Display adapter prefixing the components with a name.
///
/// Created by [`Expr::named`].
pub struct Named<'a, E: ?Sized, const N: usize> {
    name: &'a str,
    expr: &'a E,
}

impl<'a, E: ?Sized, const N: usize> Named<'a, E, N> {
    pub fn new(name: &'a str, expr: &'a E) -> Self {
        Self { name, expr }
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> fmt::Display for Named<'_, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        write_components::<_, N>(f, &self.expr.eval())
    }
}

impl<E: Expr<N> + ?Sized, const N: usize> fmt::Debug for Named<'_, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Named")
            .field("name", &self.name)
            .field("value", &self.expr.eval())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, vec3, vec4};

    #[test]
    fn test_plain() {
        assert_eq!(vec4(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
        assert_eq!(vec2(0.5, -1.0).to_string(), "(0.5, -1)");
        assert_eq!(vec3(true, false, true).to_string(), "(true, false, true)");
    }

    #[test]
    fn test_named() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.named("Point").to_string(), "Point(1, 2, 3, 4)");
        assert_eq!(v.named("").to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn test_nodes_display_evaluated() {
        let a = vec2(1, 2);
        let b = vec2(0.5, 0.5);
        assert_eq!((&a + &b).to_string(), "(1.5, 2.5)");
        assert_eq!((-&a).to_string(), "(-1, -2)");
        assert_eq!((&a * 3).named("Scaled").to_string(), "Scaled(3, 6)");
    }

    #[test]
    fn test_precision_applies_per_component() {
        let v = vec2(1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(format!("{v:.2}"), "(0.33, 0.67)");
    }
}
