use super::{base_math::quadratic_solutions, Vector2};
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Holds the result of finding the intersect between an infinite line and a circle.
#[derive(Debug, Copy, Clone)]
pub enum CircleLineIntr<T>
where
    T: Real,
{
    /// No intersects found.
    NoIntersect,
    /// One tangent intersect point found.
    TangentIntersect {
        /// Holds the tangent intersect point.
        point: Vector2<T>,
    },
    /// Simple case of two intersect points found, ordered by x then y.
    TwoIntersects {
        /// Holds the first intersect point.
        point1: Vector2<T>,
        /// Holds the second intersect point.
        point2: Vector2<T>,
    },
}

impl<T> CircleLineIntr<T>
where
    T: Real,
{
    /// Returns the intersect points, empty for [CircleLineIntr::NoIntersect].
    pub fn points(&self) -> Vec<Vector2<T>> {
        match *self {
            CircleLineIntr::NoIntersect => Vec::new(),
            CircleLineIntr::TangentIntersect { point } => vec![point],
            CircleLineIntr::TwoIntersects { point1, point2 } => vec![point1, point2],
        }
    }

    #[inline]
    fn two_ordered(pt1: Vector2<T>, pt2: Vector2<T>) -> Self {
        if pt1.cmp_xy(&pt2) == Ordering::Greater {
            CircleLineIntr::TwoIntersects {
                point1: pt2,
                point2: pt1,
            }
        } else {
            CircleLineIntr::TwoIntersects {
                point1: pt1,
                point2: pt2,
            }
        }
    }
}

/// Finds the intersects between a circle and the line `y = slope * x + intercept` using the
/// default fuzzy epsilon.
///
/// See [circle_line_intr_eps]. Vertical lines cannot be expressed in this form, use
/// [circle_line_through_intr] for them.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// // circle at origin with radius 5 and the line y = x + 1
/// let result = circle_line_intr(vec2(0.0, 0.0), 5.0, 1.0, 1.0);
/// if let CircleLineIntr::TwoIntersects { point1, point2 } = result {
///     assert!(point1.fuzzy_eq(vec2(-4.0, -3.0)));
///     assert!(point2.fuzzy_eq(vec2(3.0, 4.0)));
/// } else {
///     unreachable!("expected two intersects");
/// }
/// ```
#[inline]
pub fn circle_line_intr<T>(
    center: Vector2<T>,
    radius: T,
    slope: T,
    intercept: T,
) -> CircleLineIntr<T>
where
    T: Real,
{
    circle_line_intr_eps(center, radius, slope, intercept, T::fuzzy_epsilon())
}

/// Finds the intersects between a circle and the line `y = slope * x + intercept`.
///
/// Substituting the line into `(x - cx)^2 + (y - cy)^2 = r^2` gives the quadratic
/// `(1 + m^2) x^2 + 2 (m (c - cy) - cx) x + cx^2 + (c - cy)^2 - r^2 = 0`. A discriminant within
/// `epsilon` of zero is a tangent intersect, a negative discriminant means no intersect.
pub fn circle_line_intr_eps<T>(
    center: Vector2<T>,
    radius: T,
    slope: T,
    intercept: T,
    epsilon: T,
) -> CircleLineIntr<T>
where
    T: Real,
{
    use CircleLineIntr::*;

    let m = slope;
    let c_shift = intercept - center.y;
    let a = T::one() + m * m;
    let b = T::two() * (m * c_shift - center.x);
    let c = center.x * center.x + c_shift * c_shift - radius * radius;

    let discriminant = b * b - T::four() * a * c;
    let y_at = |x: T| m * x + intercept;

    if discriminant.fuzzy_eq_zero_eps(epsilon) {
        let x = -b / (T::two() * a);
        return TangentIntersect {
            point: Vector2::new(x, y_at(x)),
        };
    }

    if discriminant < T::zero() {
        return NoIntersect;
    }

    let (x1, x2) = quadratic_solutions(a, b, c, discriminant.sqrt());
    CircleLineIntr::two_ordered(Vector2::new(x1, y_at(x1)), Vector2::new(x2, y_at(x2)))
}

/// Finds the intersects between a circle and the infinite line through `p0` and `p1`.
///
/// Unlike [circle_line_intr] this handles vertical lines. If `p0` and `p1` are fuzzy equal the
/// result is a tangent intersect when the point lies on the circle, otherwise no intersect.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// // vertical line x = 3 through the circle at origin with radius 5
/// let (p0, p1) = (vec2(3.0, 0.0), vec2(3.0, 1.0));
/// let result = circle_line_through_intr(vec2(0.0, 0.0), 5.0, p0, p1, 1e-8);
/// if let CircleLineIntr::TwoIntersects { point1, point2 } = result {
///     assert!(point1.fuzzy_eq(vec2(3.0, -4.0)));
///     assert!(point2.fuzzy_eq(vec2(3.0, 4.0)));
/// } else {
///     unreachable!("expected two intersects");
/// }
/// ```
pub fn circle_line_through_intr<T>(
    center: Vector2<T>,
    radius: T,
    p0: Vector2<T>,
    p1: Vector2<T>,
    epsilon: T,
) -> CircleLineIntr<T>
where
    T: Real,
{
    // Solve with the circle shifted to the origin using the implicit line form Ax + By + C = 0,
    // this is more numerically stable than the parametric quadratic and supports vertical lines.
    use CircleLineIntr::*;

    let eps = epsilon;
    let h = center.x;
    let k = center.y;

    if p0.fuzzy_eq_eps(p1, eps) {
        let on_circle = (p0 - center).length().fuzzy_eq_eps(radius, eps);
        if on_circle {
            return TangentIntersect { point: p0 };
        }
        return NoIntersect;
    }

    let p0_shifted = p0 - center;
    let p1_shifted = p1 - center;
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    let (a, b, c) = if dx.fuzzy_eq_zero() {
        // vertical line x = x_pos, using average of point x values for fuzziness
        let x_pos = (p1_shifted.x + p0_shifted.x) / T::two();
        (T::one(), T::zero(), -x_pos)
    } else {
        // mx - y + (y1 - m * x1) = 0
        let m = dy / dx;
        (m, -T::one(), p1_shifted.y - m * p1_shifted.x)
    };

    let a2_b2 = a * a + b * b;

    // shortest distance from the line to the origin (circle center)
    let shortest_dist = c.abs() / a2_b2.sqrt();

    if shortest_dist > radius + eps {
        return NoIntersect;
    }

    // foot of the perpendicular from the center, shifted back to real coordinates
    let x0 = -a * c / a2_b2 + h;
    let y0 = -b * c / a2_b2 + k;

    if shortest_dist.fuzzy_eq_eps(radius, eps) {
        return TangentIntersect {
            point: Vector2::new(x0, y0),
        };
    }

    let d = radius * radius - c * c / a2_b2;
    // abs avoids NaN from a tiny negative value
    let mult = (d / a2_b2).abs().sqrt();

    let pt1 = Vector2::new(x0 + b * mult, y0 - a * mult);
    let pt2 = Vector2::new(x0 - b * mult, y0 + a * mult);
    CircleLineIntr::two_ordered(pt1, pt2)
}
