//! Closest pair of points search using divide and conquer.
use crate::core::{
    math::{dist_squared, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result from calling [closest_pair].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone)]
pub struct ClosestPairResult<T>
where
    T: Real,
{
    /// Euclidean distance between the two points.
    pub distance: T,
    /// Input index of the first point (always less than `index2`).
    pub index1: usize,
    /// Input index of the second point.
    pub index2: usize,
    /// The first point.
    pub point1: Vector2<T>,
    /// The second point.
    pub point2: Vector2<T>,
}

/// Finds the pair of points with the minimum Euclidean distance.
///
/// Points are distinguished by index, so duplicate points form a valid pair at distance zero.
/// Returns `None` if fewer than 2 points are given. Input coordinates must be finite.
///
/// Points are sorted by x once, then recursively split at the median. After solving both halves
/// with minimum distance `d` only points within `d` of the dividing line (the strip) can form a
/// closer pair, and within the strip sorted by y each point only needs to be compared to the
/// following points less than `d` above it.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::closest_pair::*;
/// # use planar_primitives::core::traits::*;
/// let pts = points![(2.0, 3.0), (12.0, 30.0), (40.0, 50.0), (5.0, 1.0), (12.0, 10.0), (3.0, 4.0)];
/// let result = closest_pair(&pts).unwrap();
/// assert!(result.distance.fuzzy_eq(2.0f64.sqrt()));
/// assert_eq!((result.index1, result.index2), (0, 5));
///
/// assert!(closest_pair(&pts[..1]).is_none());
/// ```
pub fn closest_pair<T>(points: &[Vector2<T>]) -> Option<ClosestPairResult<T>>
where
    T: Real,
{
    debug_assert!(
        points.iter().all(|p| p.is_finite()),
        "closest pair input must have finite coordinates"
    );

    if points.len() < 2 {
        return None;
    }

    let mut by_x = points
        .iter()
        .copied()
        .enumerate()
        .map(|(index, pos)| IndexedPoint { index, pos })
        .collect::<Vec<_>>();
    by_x.sort_by(|a, b| a.pos.x.partial_cmp(&b.pos.x).unwrap_or(Ordering::Equal));

    let best = closest_recursive(&by_x);
    let (index1, index2) = if best.index1 < best.index2 {
        (best.index1, best.index2)
    } else {
        (best.index2, best.index1)
    };

    Some(ClosestPairResult {
        distance: best.dist_squared.sqrt(),
        index1,
        index2,
        point1: points[index1],
        point2: points[index2],
    })
}

/// Same as [closest_pair] returning only the distance.
#[inline]
pub fn closest_pair_distance<T>(points: &[Vector2<T>]) -> Option<T>
where
    T: Real,
{
    closest_pair(points).map(|r| r.distance)
}

#[derive(Debug, Copy, Clone)]
struct IndexedPoint<T> {
    index: usize,
    pos: Vector2<T>,
}

#[derive(Debug, Copy, Clone)]
struct PairCandidate<T> {
    dist_squared: T,
    index1: usize,
    index2: usize,
}

impl<T> PairCandidate<T>
where
    T: Real,
{
    #[inline]
    fn new(a: &IndexedPoint<T>, b: &IndexedPoint<T>) -> Self {
        Self {
            dist_squared: dist_squared(a.pos, b.pos),
            index1: a.index,
            index2: b.index,
        }
    }
}

/// Recursive step over points sorted by x, requires at least 2 points.
fn closest_recursive<T>(points: &[IndexedPoint<T>]) -> PairCandidate<T>
where
    T: Real,
{
    debug_assert!(points.len() >= 2);
    if points.len() <= 3 {
        return brute_force(points);
    }

    let mid = points.len() / 2;
    let mid_x = points[mid].pos.x;

    let left = closest_recursive(&points[..mid]);
    let right = closest_recursive(&points[mid..]);
    let best = if right.dist_squared < left.dist_squared {
        right
    } else {
        left
    };

    let mut strip = points
        .iter()
        .filter(|p| {
            let dx = p.pos.x - mid_x;
            dx * dx < best.dist_squared
        })
        .copied()
        .collect::<Vec<_>>();

    strip_closest(&mut strip, best)
}

/// Scans the strip around the dividing line for a pair closer than `best`.
fn strip_closest<T>(strip: &mut [IndexedPoint<T>], best: PairCandidate<T>) -> PairCandidate<T>
where
    T: Real,
{
    let mut best = best;
    strip.sort_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal));

    for (i, a) in strip.iter().enumerate() {
        for b in &strip[i + 1..] {
            let dy = b.pos.y - a.pos.y;
            if dy * dy >= best.dist_squared {
                break;
            }

            let candidate = PairCandidate::new(a, b);
            if candidate.dist_squared < best.dist_squared {
                best = candidate;
            }
        }
    }

    best
}

fn brute_force<T>(points: &[IndexedPoint<T>]) -> PairCandidate<T>
where
    T: Real,
{
    let mut best = PairCandidate::new(&points[0], &points[1]);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let candidate = PairCandidate::new(a, b);
            if candidate.dist_squared < best.dist_squared {
                best = candidate;
            }
        }
    }

    best
}
