use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two circles.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// No intersects found (circles too far apart, or one strictly inside the other).
    NoIntersect,
    /// One tangent intersect point found (internally or externally tangent circles).
    TangentIntersect {
        /// Holds the tangent intersect point.
        point: Vector2<T>,
    },
    /// Simple case of two intersect points found.
    TwoIntersects {
        /// Holds the first intersect point (right of the direction from the first center to the
        /// second center).
        point1: Vector2<T>,
        /// Holds the second intersect point (left of the direction from the first center to the
        /// second center).
        point2: Vector2<T>,
    },
    /// Circles overlap each other (same circle).
    Overlapping,
}

impl<T> CircleCircleIntr<T>
where
    T: Real,
{
    /// Returns the intersect points, empty for [CircleCircleIntr::NoIntersect] and
    /// [CircleCircleIntr::Overlapping].
    pub fn points(&self) -> Vec<Vector2<T>> {
        match *self {
            CircleCircleIntr::NoIntersect | CircleCircleIntr::Overlapping => Vec::new(),
            CircleCircleIntr::TangentIntersect { point } => vec![point],
            CircleCircleIntr::TwoIntersects { point1, point2 } => vec![point1, point2],
        }
    }
}

/// Finds the intersects between two circles using the default fuzzy epsilon.
///
/// See [circle_circle_intr_eps].
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// let result = circle_circle_intr(vec2(0.0, 0.0), 5.0, vec2(4.0, 0.0), 3.0);
/// if let CircleCircleIntr::TwoIntersects { point1, point2 } = result {
///     assert!(point1.fuzzy_eq(vec2(4.0, -3.0)));
///     assert!(point2.fuzzy_eq(vec2(4.0, 3.0)));
/// } else {
///     unreachable!("expected two intersects");
/// }
/// ```
#[inline]
pub fn circle_circle_intr<T>(
    center1: Vector2<T>,
    radius1: T,
    center2: Vector2<T>,
    radius2: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    circle_circle_intr_eps(center1, radius1, center2, radius2, T::fuzzy_epsilon())
}

/// Finds the intersects between two circles.
///
/// Circles do not intersect when the center distance `d > radius1 + radius2` or
/// `d < |radius1 - radius2|`. Otherwise the chord through the intersects lies on the radical line
/// at distance `a` from `center1` with half length `h`, a fuzzy zero `h` is a tangent intersect.
/// `epsilon` is used for all fuzzy comparisons.
pub fn circle_circle_intr_eps<T>(
    center1: Vector2<T>,
    radius1: T,
    center2: Vector2<T>,
    radius2: T,
    epsilon: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    // Reference algorithm: http://paulbourke.net/geometry/circlesphere/
    use CircleCircleIntr::*;

    let cv = center2 - center1;
    let d2 = cv.dot(cv);
    let d = d2.sqrt();

    if d.fuzzy_eq_zero_eps(epsilon) {
        // same center position
        if radius1.fuzzy_eq_eps(radius2, epsilon) {
            return Overlapping;
        }
        return NoIntersect;
    }

    // different center position
    if !d.fuzzy_lt_eps(radius1 + radius2, epsilon) {
        // too far apart
        return NoIntersect;
    }

    if !d.fuzzy_gt_eps((radius1 - radius2).abs(), epsilon) {
        // one circle inside the other
        return NoIntersect;
    }

    let rad1_sq = radius1 * radius1;
    let a = (rad1_sq - radius2 * radius2 + d2) / (T::two() * d);
    let midpoint = center1 + cv.scale(a / d);
    let diff = rad1_sq - a * a;

    if diff <= T::zero() {
        return TangentIntersect { point: midpoint };
    }

    let h = diff.sqrt();
    if h.fuzzy_eq_zero_eps(epsilon) {
        return TangentIntersect { point: midpoint };
    }

    let h_over_d = h / d;
    let x_term = h_over_d * cv.y;
    let y_term = h_over_d * cv.x;

    let pt1 = Vector2::new(midpoint.x + x_term, midpoint.y - y_term);
    let pt2 = Vector2::new(midpoint.x - x_term, midpoint.y + y_term);

    if pt1.fuzzy_eq_eps(pt2, epsilon) {
        return TangentIntersect { point: midpoint };
    }

    TwoIntersects {
        point1: pt1,
        point2: pt2,
    }
}
