//! Line segment intersection: the pairwise test, a sweep line detector over many segments, and a
//! spatial index backed exhaustive finder.
mod indexed;
mod sweep;

pub use indexed::*;
pub use sweep::*;

use crate::core::{
    math::{line_y_at_x, on_segment_eps, orientation_eps, Orientation, Vector2},
    traits::{ControlFlow, Real},
};
use static_aabb2d_index::AABB;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line segment between two end points.
///
/// End point order has no meaning for intersection tests, [LineSeg::left] and [LineSeg::right]
/// give the end points ordered by x (then y).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LineSeg<T = f64> {
    pub p0: Vector2<T>,
    pub p1: Vector2<T>,
}

impl<T> LineSeg<T>
where
    T: Real,
{
    #[inline]
    pub fn new(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        LineSeg { p0, p1 }
    }

    /// End point with the lowest x (lowest y on ties).
    #[inline]
    pub fn left(&self) -> Vector2<T> {
        if self.p1.cmp_xy(&self.p0).is_lt() {
            self.p1
        } else {
            self.p0
        }
    }

    /// End point with the highest x (highest y on ties).
    #[inline]
    pub fn right(&self) -> Vector2<T> {
        if self.p1.cmp_xy(&self.p0).is_lt() {
            self.p0
        } else {
            self.p1
        }
    }

    /// Axis aligned bounding box of the segment.
    #[inline]
    pub fn extents(&self) -> AABB<T> {
        AABB::new(
            num_traits::real::Real::min(self.p0.x, self.p1.x),
            num_traits::real::Real::min(self.p0.y, self.p1.y),
            num_traits::real::Real::max(self.p0.x, self.p1.x),
            num_traits::real::Real::max(self.p0.y, self.p1.y),
        )
    }

    /// Returns `true` if both end points have finite coordinates.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// The y value of the segment at `x`, with `x` clamped to the segment's x range. Vertical
    /// segments return their y midpoint.
    #[inline]
    pub fn y_at(&self, x: T) -> T {
        let left = self.left();
        let right = self.right();
        let x = num_traits::real::Real::max(left.x, num_traits::real::Real::min(x, right.x));
        line_y_at_x(left, right, x)
    }

    /// Tests for intersection with `other`, see [seg_intersects].
    #[inline]
    pub fn intersects(&self, other: &LineSeg<T>) -> bool {
        seg_intersects(self, other)
    }
}

impl<T> fmt::Display for LineSeg<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.p0, self.p1)
    }
}

/// Tests if two line segments intersect (including touching end points and collinear overlap),
/// using exact orientation tests.
///
/// See [seg_intersects_eps] to treat nearly collinear end points as collinear.
///
/// # Examples
///
/// ```
/// # use planar_primitives::segment_intersect::*;
/// # use planar_primitives::core::math::*;
/// let s1 = LineSeg::new(vec2(1.0, 1.0), vec2(4.0, 4.0));
/// let s2 = LineSeg::new(vec2(1.0, 4.0), vec2(4.0, 1.0));
/// let s3 = LineSeg::new(vec2(5.0, 2.0), vec2(7.0, 2.0));
/// assert!(seg_intersects(&s1, &s2));
/// assert!(!seg_intersects(&s1, &s3));
/// assert!(!seg_intersects(&s2, &s3));
/// ```
#[inline]
pub fn seg_intersects<T>(s1: &LineSeg<T>, s2: &LineSeg<T>) -> bool
where
    T: Real,
{
    seg_intersects_eps(s1, s2, T::zero())
}

/// Tests if two line segments intersect.
///
/// The segments properly cross when the end points of each segment lie on opposite sides of the
/// other segment's line. When an end point is collinear with the other segment (orientation
/// within `epsilon` of zero) it intersects if it lies within that segment's bounding box, which
/// covers touching and overlapping collinear segments. The test is symmetric in its arguments.
///
/// `epsilon` is an absolute bound on the cross product, which scales with the square of the
/// coordinates, so it should be chosen relative to the input magnitude.
pub fn seg_intersects_eps<T>(s1: &LineSeg<T>, s2: &LineSeg<T>, epsilon: T) -> bool
where
    T: Real,
{
    let (p1, q1) = (s1.p0, s1.p1);
    let (p2, q2) = (s2.p0, s2.p1);

    let o1 = orientation_eps(p1, q1, p2, epsilon);
    let o2 = orientation_eps(p1, q1, q2, epsilon);
    let o3 = orientation_eps(p2, q2, p1, epsilon);
    let o4 = orientation_eps(p2, q2, q1, epsilon);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    let collinear_on = |o: Orientation, a: Vector2<T>, b: Vector2<T>, c: Vector2<T>| {
        o == Orientation::Collinear && on_segment_eps(a, b, c, epsilon)
    };

    collinear_on(o1, p1, p2, q1)
        || collinear_on(o2, p1, q2, q1)
        || collinear_on(o3, p2, p1, q2)
        || collinear_on(o4, p2, q1, q2)
}

/// Pair of intersecting segments, identified by their input indexes with `index1 < index2`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegIntersectPair {
    pub index1: usize,
    pub index2: usize,
}

impl SegIntersectPair {
    /// Create a new pair, the indexes are stored in ascending order.
    #[inline]
    pub fn new(index1: usize, index2: usize) -> Self {
        if index2 < index1 {
            Self {
                index1: index2,
                index2: index1,
            }
        } else {
            Self { index1, index2 }
        }
    }

    /// Human readable description of the pair using the segments they index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_primitives::segs;
    /// # use planar_primitives::segment_intersect::*;
    /// let segments = segs![(1.0, 1.0, 4.0, 4.0), (1.0, 4.0, 4.0, 1.0)];
    /// let pair = SegIntersectPair::new(1, 0);
    /// assert_eq!(
    ///     pair.describe(&segments),
    ///     "Segment (1,1)-(4,4) intersects with (1,4)-(4,1)"
    /// );
    /// ```
    pub fn describe<T>(&self, segments: &[LineSeg<T>]) -> String
    where
        T: Real,
    {
        format!(
            "Segment {} intersects with {}",
            segments[self.index1], segments[self.index2]
        )
    }
}

/// Trait for visiting segment intersects.
pub trait SegIntersectVisitor<C>
where
    C: ControlFlow,
{
    fn visit_intr(&mut self, pair: SegIntersectPair) -> C;
}

impl<C, F> SegIntersectVisitor<C> for F
where
    C: ControlFlow,
    F: FnMut(SegIntersectPair) -> C,
{
    #[inline]
    fn visit_intr(&mut self, pair: SegIntersectPair) -> C {
        self(pair)
    }
}
