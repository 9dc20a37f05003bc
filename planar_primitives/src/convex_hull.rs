//! Convex hull construction with the Graham scan.
use crate::core::{
    math::{dist_squared, orientation, orientation_eps, Orientation, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

/// Struct to hold options parameters used when computing a convex hull.
#[derive(Debug, Clone, Copy)]
pub struct HullOptions<T>
where
    T: Real,
{
    /// Cross products with magnitude below this value are treated as collinear when collapsing
    /// points that share a polar angle and when testing for left turns. Collinear boundary points
    /// are never part of the hull. Defaults to zero (exact orientation tests), a non-zero value is
    /// an absolute bound on the cross product so it must be chosen relative to the input scale.
    pub collinear_eps: T,
}

impl<T> HullOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            collinear_eps: T::zero(),
        }
    }
}

impl<T> Default for HullOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the convex hull of `points` using default [HullOptions].
///
/// See [convex_hull_opt].
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::convex_hull::*;
/// # use planar_primitives::core::math::*;
/// let pts = points![(0.0, 3.0), (1.0, 1.0), (2.0, 2.0), (4.0, 4.0),
///                   (0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (3.0, 3.0)];
/// let hull = convex_hull(&pts);
/// assert_eq!(hull, points![(0.0, 0.0), (3.0, 1.0), (4.0, 4.0), (0.0, 3.0)]);
///
/// // all collinear, no hull
/// assert!(convex_hull(&points![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).is_empty());
/// ```
#[inline]
pub fn convex_hull<T>(points: &[Vector2<T>]) -> Vec<Vector2<T>>
where
    T: Real,
{
    convex_hull_opt(points, &HullOptions::new())
}

/// Computes the convex hull of `points` with the Graham scan.
///
/// The result is the counter clockwise walk of the hull boundary starting at the lowest point
/// (lowest y, then lowest x), with no repeated start point and no collinear boundary points. An
/// empty `Vec` is returned when fewer than 3 extreme points exist (fewer than 3 input points, all
/// points identical, or all points collinear).
///
/// Duplicate points are allowed. Input coordinates must be finite.
pub fn convex_hull_opt<T>(points: &[Vector2<T>], options: &HullOptions<T>) -> Vec<Vector2<T>>
where
    T: Real,
{
    debug_assert!(
        points.iter().all(|p| p.is_finite()),
        "convex hull input must have finite coordinates"
    );

    if points.len() < 3 {
        return Vec::new();
    }

    let eps = options.collinear_eps;
    let pivot = lowest_point(points);

    let mut sorted = points
        .iter()
        .copied()
        .filter(|&p| p != pivot && !p.fuzzy_eq_eps(pivot, eps))
        .collect::<Vec<_>>();

    // every remaining point lies in the half plane above the pivot (or to its right on the same
    // y) so comparing by exact turn direction is a total order
    sorted.sort_by(|&a, &b| polar_order(pivot, a, b));

    // keep only the farthest point of each run sharing a polar angle (sorted first in each run)
    let mut candidates: Vec<Vector2<T>> = Vec::with_capacity(sorted.len());
    for p in sorted {
        match candidates.last() {
            Some(&head) if orientation_eps(pivot, head, p, eps) == Orientation::Collinear => {}
            _ => candidates.push(p),
        }
    }

    if candidates.len() < 2 {
        log::debug!(
            "convex hull: {} input points have fewer than 3 extreme points",
            points.len()
        );
        return Vec::new();
    }

    let mut hull = Vec::with_capacity(candidates.len() + 1);
    hull.push(pivot);
    hull.push(candidates[0]);
    for &p in &candidates[1..] {
        while hull.len() > 1
            && orientation_eps(hull[hull.len() - 2], hull[hull.len() - 1], p, eps)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        return Vec::new();
    }

    log::trace!(
        "convex hull: {} input points, {} hull vertexes",
        points.len(),
        hull.len()
    );

    hull
}

/// Returns `true` if `polygon` is strictly convex with counter clockwise vertex order, i.e. every
/// consecutive (wrapping) vertex triple turns left by more than `epsilon`.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::convex_hull::*;
/// let square = points![(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)];
/// assert!(is_convex_ccw(&square, 1e-8));
///
/// let reversed: Vec<_> = square.iter().rev().copied().collect();
/// assert!(!is_convex_ccw(&reversed, 1e-8));
/// ```
pub fn is_convex_ccw<T>(polygon: &[Vector2<T>], epsilon: T) -> bool
where
    T: Real,
{
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    (0..n).all(|i| {
        orientation_eps(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n], epsilon)
            == Orientation::CounterClockwise
    })
}

/// Lowest y, ties broken by lowest x.
fn lowest_point<T>(points: &[Vector2<T>]) -> Vector2<T>
where
    T: Real,
{
    let mut lowest = points[0];
    for &p in &points[1..] {
        if p.y < lowest.y || (p.y == lowest.y && p.x < lowest.x) {
            lowest = p;
        }
    }

    lowest
}

/// Polar angle order around `pivot`, points sharing an angle are ordered farthest first.
#[inline]
fn polar_order<T>(pivot: Vector2<T>, a: Vector2<T>, b: Vector2<T>) -> Ordering
where
    T: Real,
{
    match orientation(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => dist_squared(pivot, b)
            .partial_cmp(&dist_squared(pivot, a))
            .unwrap_or(Ordering::Equal),
    }
}
