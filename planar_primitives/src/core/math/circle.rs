use super::{
    circle_circle_intr_eps, circle_line_intr_eps, circle_line_through_intr, CircleCircleIntr,
    CircleLineIntr, Vector2,
};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by a center point and radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        Circle { center, radius }
    }

    /// Returns `true` if `point` is within `epsilon` of the circle boundary.
    #[inline]
    pub fn on_boundary_eps(&self, point: Vector2<T>, epsilon: T) -> bool {
        (point - self.center).length().fuzzy_eq_eps(self.radius, epsilon)
    }

    /// Intersects with the line `y = slope * x + intercept`, see [circle_line_intr_eps].
    #[inline]
    pub fn intersect_line(&self, slope: T, intercept: T, epsilon: T) -> CircleLineIntr<T> {
        circle_line_intr_eps(self.center, self.radius, slope, intercept, epsilon)
    }

    /// Intersects with the infinite line through `p0` and `p1`, see [circle_line_through_intr].
    #[inline]
    pub fn intersect_line_through(
        &self,
        p0: Vector2<T>,
        p1: Vector2<T>,
        epsilon: T,
    ) -> CircleLineIntr<T> {
        circle_line_through_intr(self.center, self.radius, p0, p1, epsilon)
    }

    /// Intersects with another circle, see [circle_circle_intr_eps].
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_primitives::core::math::*;
    /// let c1 = Circle::new(vec2(0.0, 0.0), 1.0);
    /// let c2 = Circle::new(vec2(2.0, 0.0), 1.0);
    /// let intr = c1.intersect_circle(&c2, 1e-8);
    /// assert_eq!(intr.points(), vec![vec2(1.0, 0.0)]);
    /// ```
    #[inline]
    pub fn intersect_circle(&self, other: &Circle<T>, epsilon: T) -> CircleCircleIntr<T> {
        circle_circle_intr_eps(self.center, self.radius, other.center, other.radius, epsilon)
    }
}
