mod test_utils;

use planar_primitives::{
    assert_fuzzy_eq,
    convex_hull::convex_hull,
    core::{
        math::{distance, Vector2},
        traits::FuzzyEq,
    },
    points,
    rotating_calipers::{diameter, polygon_diameter, polygon_width},
};
use test_utils::brute_max_distance;

#[test]
fn too_few_points() {
    let empty: Vec<Vector2<f64>> = Vec::new();
    assert!(polygon_diameter(&empty).is_none());
    assert!(polygon_diameter(&points![(1.0, 1.0)]).is_none());
    assert!(diameter(&points![(1.0, 1.0)]).is_none());
    assert!(polygon_width(&points![(1.0, 1.0), (2.0, 2.0)]).is_none());
}

#[test]
fn two_points() {
    let result = polygon_diameter(&points![(0.0, 0.0), (6.0, 8.0)]).unwrap();
    assert_fuzzy_eq!(result.distance, 10.0);
}

#[test]
fn triangle() {
    let tri = points![(0.0, 0.0), (10.0, 0.0), (1.0, 1.0)];
    let result = polygon_diameter(&tri).unwrap();
    assert_fuzzy_eq!(result.distance, 10.0);
    assert_fuzzy_eq!(distance(result.point1, result.point2), 10.0);
}

#[test]
fn clockwise_order_accepted() {
    let square = points![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)];
    let result = polygon_diameter(&square).unwrap();
    assert_fuzzy_eq!(result.distance, 8.0f64.sqrt());
}

#[test]
fn regular_octagon() {
    let polygon: Vec<Vector2<f64>> = (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 4.0;
            Vector2::new(3.0 * angle.cos(), 3.0 * angle.sin())
        })
        .collect();
    let result = polygon_diameter(&polygon).unwrap();
    assert_fuzzy_eq!(result.distance, 6.0);
    assert_fuzzy_eq!(polygon_width(&polygon).unwrap(), 6.0 * (std::f64::consts::PI / 8.0).cos());
}

#[test]
fn diameter_of_point_set_matches_brute_force() {
    let pts = points![
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (4.0, 4.0),
        (0.0, 0.0),
        (1.0, 2.0),
        (3.0, 1.0),
        (3.0, 3.0)
    ];
    let result = diameter(&pts).unwrap();
    assert_fuzzy_eq!(result.distance, brute_max_distance(&pts).unwrap());
    assert_fuzzy_eq!(result.distance, 32.0f64.sqrt());

    let hull = convex_hull(&pts);
    let from_hull = polygon_diameter(&hull).unwrap();
    assert!(from_hull.distance.fuzzy_eq(result.distance));
}

#[test]
fn diameter_of_collinear_points() {
    let pts = points![(2.0, 1.0), (-4.0, -2.0), (0.0, 0.0), (6.0, 3.0)];
    let result = diameter(&pts).unwrap();
    assert_fuzzy_eq!(result.distance, brute_max_distance(&pts).unwrap());
}

#[test]
fn diameter_of_duplicates() {
    let pts = points![(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)];
    assert_eq!(diameter(&pts).unwrap().distance, 0.0);
}

#[test]
fn width_of_triangle() {
    // shortest altitude of the 3-4-5 right triangle is to the hypotenuse
    let tri = points![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
    assert_fuzzy_eq!(polygon_width(&tri).unwrap(), 12.0 / 5.0);
}
