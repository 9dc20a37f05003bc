mod test_utils;

use planar_primitives::{
    assert_fuzzy_eq,
    closest_pair::{closest_pair, closest_pair_distance},
    core::{math::Vector2, traits::FuzzyEq},
    points,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use test_utils::brute_closest_distance;

#[test]
fn too_few_points() {
    let empty: Vec<Vector2<f64>> = Vec::new();
    assert!(closest_pair(&empty).is_none());
    assert!(closest_pair(&points![(1.0, 2.0)]).is_none());
    assert!(closest_pair_distance(&points![(1.0, 2.0)]).is_none());
}

#[test]
fn two_points() {
    let pts = points![(0.0, 0.0), (3.0, 4.0)];
    let result = closest_pair(&pts).unwrap();
    assert_fuzzy_eq!(result.distance, 5.0);
    assert_eq!((result.index1, result.index2), (0, 1));
    assert_eq!(result.point1, Vector2::new(0.0, 0.0));
    assert_eq!(result.point2, Vector2::new(3.0, 4.0));
}

#[test]
fn duplicate_points_distance_zero() {
    let pts = points![(5.0, 5.0), (1.0, 1.0), (9.0, 0.0), (1.0, 1.0)];
    let result = closest_pair(&pts).unwrap();
    assert_eq!(result.distance, 0.0);
    assert_eq!((result.index1, result.index2), (1, 3));
}

#[test]
fn pair_across_dividing_line() {
    // closest pair straddles the median split
    let pts = points![
        (0.0, 0.0),
        (1.0, 10.0),
        (2.0, 20.0),
        (3.9, 5.0),
        (4.1, 5.1),
        (6.0, 30.0),
        (7.0, 0.0),
        (8.0, 15.0)
    ];
    let result = closest_pair(&pts).unwrap();
    assert_eq!((result.index1, result.index2), (3, 4));
    assert_fuzzy_eq!(result.distance, (0.2f64 * 0.2 + 0.1 * 0.1).sqrt());
}

#[test]
fn vertical_line_of_points() {
    let pts = points![(2.0, 9.0), (2.0, 0.0), (2.0, 4.0), (2.0, 5.5), (2.0, 12.0)];
    assert_fuzzy_eq!(closest_pair_distance(&pts).unwrap(), 1.5);
}

#[test]
fn matches_brute_force_random() {
    let mut rng = StdRng::seed_from_u64(12345);
    let pts: Vec<Vector2<f64>> = (0..50)
        .map(|_| Vector2::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();

    for n in 2..=pts.len() {
        let expected = brute_closest_distance(&pts[..n]).unwrap();
        let result = closest_pair(&pts[..n]).unwrap();
        assert!(
            result.distance.fuzzy_eq(expected),
            "n = {}: {} != {}",
            n,
            result.distance,
            expected
        );
        assert!(result.index1 < result.index2);
        assert!(
            (result.point1 - result.point2)
                .length()
                .fuzzy_eq(result.distance)
        );
    }
}
