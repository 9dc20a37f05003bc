//! Rotating calipers measures of convex polygons: diameter and width.
use crate::{
    convex_hull::convex_hull,
    core::{
        math::{dist_squared, orientation, triangle_area2, Orientation, Vector2},
        traits::Real,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result from calling [polygon_diameter] or [diameter].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct DiameterResult<T>
where
    T: Real,
{
    /// Maximum distance between any two vertexes.
    pub distance: T,
    /// First point of the farthest pair.
    pub point1: Vector2<T>,
    /// Second point of the farthest pair.
    pub point2: Vector2<T>,
}

impl<T> DiameterResult<T>
where
    T: Real,
{
    #[inline]
    fn new(point1: Vector2<T>, point2: Vector2<T>) -> Self {
        Self {
            distance: dist_squared(point1, point2).sqrt(),
            point1,
            point2,
        }
    }
}

/// Computes the diameter (maximum vertex to vertex distance) of a convex polygon.
///
/// `polygon` must be convex with its vertexes in boundary order (either direction), e.g. the
/// output of [convex_hull]. The result for a non-convex polygon is unspecified. Returns `None` for
/// fewer than 2 vertexes, the direct distance for exactly 2.
///
/// For each edge `i -> i + 1` the antipodal vertex `j` (farthest from the edge line) is found by
/// advancing `j` while the triangle area `(i, i + 1, j + 1)` strictly increases. Since `j` only
/// moves forward the total work is linear.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::rotating_calipers::*;
/// # use planar_primitives::core::traits::*;
/// let square = points![(0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0)];
/// let result = polygon_diameter(&square).unwrap();
/// assert!(result.distance.fuzzy_eq(18.0f64.sqrt()));
/// ```
pub fn polygon_diameter<T>(polygon: &[Vector2<T>]) -> Option<DiameterResult<T>>
where
    T: Real,
{
    let n = polygon.len();
    if n < 2 {
        return None;
    }

    if n == 2 {
        return Some(DiameterResult::new(polygon[0], polygon[1]));
    }

    debug_assert!(
        turns_consistently(polygon),
        "rotating calipers input must be a convex polygon"
    );

    let mut best = (dist_squared(polygon[0], polygon[1]), 0, 1);
    let mut consider = |a: usize, b: usize| {
        let d = dist_squared(polygon[a], polygon[b]);
        if d > best.0 {
            best = (d, a, b);
        }
    };

    visit_antipodal(polygon, |i, i_next, j, parallel_next| {
        consider(i, j);
        consider(i_next, j);
        if let Some(j_next) = parallel_next {
            consider(i, j_next);
            consider(i_next, j_next);
        }
    });

    Some(DiameterResult::new(polygon[best.1], polygon[best.2]))
}

/// Computes the diameter of an arbitrary point set.
///
/// The convex hull is computed first, if the points have no hull (all collinear) the extreme
/// points along the line are used. Returns `None` for fewer than 2 points.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::rotating_calipers::*;
/// let collinear = points![(1.0, 1.0), (3.0, 3.0), (0.0, 0.0), (2.0, 2.0)];
/// let result = diameter(&collinear).unwrap();
/// assert_eq!(result.distance, 18.0f64.sqrt());
/// ```
pub fn diameter<T>(points: &[Vector2<T>]) -> Option<DiameterResult<T>>
where
    T: Real,
{
    if points.len() < 2 {
        return None;
    }

    let hull = convex_hull(points);
    if !hull.is_empty() {
        return polygon_diameter(&hull);
    }

    let min = points.iter().min_by(|a, b| a.cmp_xy(b))?;
    let max = points.iter().max_by(|a, b| a.cmp_xy(b))?;
    Some(DiameterResult::new(*min, *max))
}

/// Computes the width of a convex polygon: the minimum distance between two parallel lines
/// enclosing it.
///
/// Same input requirements as [polygon_diameter]. Returns `None` for fewer than 3 vertexes.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::rotating_calipers::*;
/// # use planar_primitives::core::traits::*;
/// let rect = points![(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)];
/// assert!(polygon_width(&rect).unwrap().fuzzy_eq(1.0));
/// ```
pub fn polygon_width<T>(polygon: &[Vector2<T>]) -> Option<T>
where
    T: Real,
{
    if polygon.len() < 3 {
        return None;
    }

    debug_assert!(
        turns_consistently(polygon),
        "rotating calipers input must be a convex polygon"
    );

    let mut width: Option<T> = None;
    visit_antipodal(polygon, |i, i_next, j, _| {
        let edge_length = dist_squared(polygon[i], polygon[i_next]).sqrt();
        if edge_length == T::zero() {
            return;
        }

        let height = triangle_area2(polygon[i], polygon[i_next], polygon[j]) / edge_length;
        width = Some(match width {
            Some(w) if w <= height => w,
            _ => height,
        });
    });

    width
}

/// Walks every edge `i -> i_next` of the polygon with its antipodal vertex `j`, `parallel_next`
/// holds `j + 1` when that vertex is equally far from the edge line (parallel edges).
fn visit_antipodal<T, F>(polygon: &[Vector2<T>], mut visitor: F)
where
    T: Real,
    F: FnMut(usize, usize, usize, Option<usize>),
{
    let n = polygon.len();
    let area = |i: usize, i_next: usize, k: usize| {
        triangle_area2(polygon[i], polygon[i_next], polygon[k])
    };

    let mut j = 1;
    for i in 0..n {
        let i_next = (i + 1) % n;
        let mut steps = 0;
        while steps < n && area(i, i_next, (j + 1) % n) > area(i, i_next, j) {
            j = (j + 1) % n;
            steps += 1;
        }

        let j_next = (j + 1) % n;
        let parallel_next = if j_next != i && area(i, i_next, j_next) == area(i, i_next, j) {
            Some(j_next)
        } else {
            None
        };

        visitor(i, i_next, j, parallel_next);
    }
}

/// Returns `true` if the polygon never turns both left and right.
fn turns_consistently<T>(polygon: &[Vector2<T>]) -> bool
where
    T: Real,
{
    let n = polygon.len();
    let mut left = false;
    let mut right = false;
    for i in 0..n {
        match orientation(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]) {
            Orientation::CounterClockwise => left = true,
            Orientation::Clockwise => right = true,
            Orientation::Collinear => {}
        }
    }

    !(left && right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn two_vertexes_direct_distance() {
        let seg = vec![vec2(0.0, 0.0), vec2(6.0, 8.0)];
        assert_eq!(polygon_diameter(&seg).unwrap().distance, 10.0);
        assert!(polygon_width(&seg).is_none());
    }

    #[test]
    fn clockwise_input_supported() {
        let triangle = vec![vec2(0.0, 0.0), vec2(1.0, 5.0), vec2(2.0, 0.0)];
        let result = polygon_diameter(&triangle).unwrap();
        assert_eq!(result.distance, 26.0f64.sqrt());
    }

    #[test]
    fn consistent_turns() {
        let square = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
        assert!(turns_consistently(&square));
        let dart = vec![vec2(0.0, 0.0), vec2(2.0, 1.0), vec2(4.0, 0.0), vec2(2.0, 3.0)];
        assert!(!turns_consistently(&dart));
    }
}
