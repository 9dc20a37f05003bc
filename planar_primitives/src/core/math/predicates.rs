//! Orientation, on-segment and circumcircle predicates.
//!
//! Every algorithm in the crate derives turn direction from [orientation] (or [orientation_eps])
//! so all callers agree on the sign convention.
use super::{Circle, Vector2};
use crate::core::traits::Real;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Turn direction formed by three ordered points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points lie on a common line.
    Collinear,
    /// Right turn.
    Clockwise,
    /// Left turn.
    CounterClockwise,
}

impl Orientation {
    #[inline]
    fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
        }
    }

    /// Returns the orientation of the same points walked in reverse order.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Cross product `(q - p) × (r - q)`, positive for a counter clockwise turn.
#[inline]
pub fn turn_cross<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> T
where
    T: Real,
{
    (q - p).perp_dot(r - q)
}

/// Orientation of the ordered points `p`, `q`, `r` from the exact sign of the cross product
/// `(q - p) × (r - q)`.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// let p = vec2(0.0, 0.0);
/// let q = vec2(4.0, 4.0);
/// assert_eq!(orientation(p, q, vec2(1.0, 2.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation(p, q, vec2(1.0, 1.0)), Orientation::Collinear);
/// assert_eq!(orientation(p, q, vec2(2.0, 1.0)), Orientation::Clockwise);
/// ```
#[inline]
pub fn orientation<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> Orientation
where
    T: Real,
{
    orientation_eps(p, q, r, T::zero())
}

/// Same as [orientation] but a cross product with magnitude less than `epsilon` is considered
/// collinear.
#[inline]
pub fn orientation_eps<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>, epsilon: T) -> Orientation
where
    T: Real,
{
    Orientation::from_sign(turn_cross(p, q, r).fuzzy_sign_eps(epsilon))
}

/// Returns twice the unsigned area of the triangle `p`, `q`, `r`.
///
/// This is the distance of `r` from the line through `p` and `q` scaled by the length of `q - p`.
#[inline]
pub fn triangle_area2<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> T
where
    T: Real,
{
    (q - p).perp_dot(r - p).abs()
}

/// Returns `true` if `q` lies within the axis aligned bounding box of the segment `p` to `r`
/// (boundary inclusive).
///
/// Only meaningful after [orientation] reported the points as collinear.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// assert!(on_segment(vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(4.0, 4.0)));
/// assert!(on_segment(vec2(0.0, 0.0), vec2(4.0, 4.0), vec2(4.0, 4.0)));
/// assert!(!on_segment(vec2(0.0, 0.0), vec2(5.0, 5.0), vec2(4.0, 4.0)));
/// ```
#[inline]
pub fn on_segment<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>) -> bool
where
    T: Real,
{
    on_segment_eps(p, q, r, T::zero())
}

/// Same as [on_segment] with the bounding box grown by `epsilon` on every side.
#[inline]
pub fn on_segment_eps<T>(p: Vector2<T>, q: Vector2<T>, r: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    let (min_x, max_x) = super::min_max(p.x, r.x);
    let (min_y, max_y) = super::min_max(p.y, r.y);
    q.x >= min_x - epsilon
        && q.x <= max_x + epsilon
        && q.y >= min_y - epsilon
        && q.y <= max_y + epsilon
}

/// Default denominator tolerance used by [circumcircle].
pub const CIRCUMCIRCLE_EPS: f64 = 1e-6;

/// Circle through the three points `a`, `b`, `c`.
///
/// Returns `None` when the points are (nearly) collinear and no finite circle exists. See
/// [circumcircle_eps] to control the degenerate case tolerance.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// # use planar_primitives::core::traits::*;
/// let circle = circumcircle(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 2.0)).unwrap();
/// assert!(circle.center.fuzzy_eq(vec2(1.0, 1.0)));
/// assert!(circle.radius.fuzzy_eq(2.0f64.sqrt()));
///
/// assert!(circumcircle(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 2.0)).is_none());
/// ```
#[inline]
pub fn circumcircle<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Option<Circle<T>>
where
    T: Real,
{
    circumcircle_eps(a, b, c, T::from_f64_const(CIRCUMCIRCLE_EPS))
}

/// Same as [circumcircle] using `epsilon` as the threshold on the magnitude of the determinant
/// below which the points are treated as collinear.
pub fn circumcircle_eps<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    epsilon: T,
) -> Option<Circle<T>>
where
    T: Real,
{
    let ab = b - a;
    let ac = c - a;
    let e = ab.x * (a.x + b.x) + ab.y * (a.y + b.y);
    let f = ac.x * (a.x + c.x) + ac.y * (a.y + c.y);
    let g = T::two() * (ab.x * (c.y - b.y) - ab.y * (c.x - b.x));

    if g.abs() < epsilon {
        return None;
    }

    let center = Vector2::new((ac.y * e - ab.y * f) / g, (ab.x * f - ac.x * e) / g);
    let radius = (a - center).length();
    Some(Circle::new(center, radius))
}
