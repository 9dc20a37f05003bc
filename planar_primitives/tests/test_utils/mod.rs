//! Brute force reference implementations used to cross check the algorithms.
#![allow(dead_code)]

use planar_primitives::core::math::{distance, orientation, Orientation, Vector2};

/// Minimum distance over all unordered index pairs.
pub fn brute_closest_distance(points: &[Vector2<f64>]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance(points[i], points[j]);
            best = Some(match best {
                Some(b) if b <= d => b,
                _ => d,
            });
        }
    }

    best
}

/// Maximum distance over all unordered index pairs.
pub fn brute_max_distance(points: &[Vector2<f64>]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance(points[i], points[j]);
            best = Some(match best {
                Some(b) if b >= d => b,
                _ => d,
            });
        }
    }

    best
}

/// Returns `true` if `point` is on or inside the counter clockwise convex `polygon`.
pub fn convex_contains(polygon: &[Vector2<f64>], point: Vector2<f64>) -> bool {
    let n = polygon.len();
    (0..n).all(|i| orientation(polygon[i], polygon[(i + 1) % n], point) != Orientation::Clockwise)
}

/// Returns `true` if `a` and `b` hold the same vertexes in the same cyclic order.
pub fn same_cycle(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    if a.is_empty() {
        return true;
    }

    (0..b.len()).any(|offset| (0..a.len()).all(|i| a[i] == b[(i + offset) % b.len()]))
}

/// Points that are extreme (not inside or on the hull of the others), found by testing every
/// point against every triangle and segment of the other points.
pub fn brute_extreme_points(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut unique: Vec<Vector2<f64>> = Vec::new();
    for &p in points {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }

    let n = unique.len();
    let mut result = Vec::new();
    'outer: for k in 0..n {
        let p = unique[k];
        for i in 0..n {
            for j in 0..n {
                if i == k || j == k || i == j {
                    continue;
                }

                // p strictly between two other points on a line
                if orientation(unique[i], unique[j], p) == Orientation::Collinear
                    && planar_primitives::core::math::on_segment(unique[i], p, unique[j])
                {
                    continue 'outer;
                }

                for m in 0..n {
                    if m == k || m == i || m == j {
                        continue;
                    }

                    let tri = [unique[i], unique[j], unique[m]];
                    if orientation(tri[0], tri[1], tri[2]) == Orientation::CounterClockwise
                        && convex_contains(&tri, p)
                    {
                        continue 'outer;
                    }
                }
            }
        }

        result.push(p);
    }

    result
}
