use planar_primitives::{closest_pair::closest_pair, points};

fn main() {
    env_logger::init();

    let pts = points![
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0)
    ];

    match closest_pair(&pts) {
        Some(result) => {
            println!(
                "Closest pair: {} (index {}) and {} (index {}), distance {:.6}",
                result.point1, result.index1, result.point2, result.index2, result.distance
            );
        }
        None => println!("Need at least 2 points"),
    }

    // duplicate points are a valid pair
    let dups = points![(1.0, 1.0), (5.0, 5.0), (1.0, 1.0)];
    if let Some(result) = closest_pair(&dups) {
        assert_eq!(result.distance, 0.0);
        println!(
            "Duplicates at indexes {} and {} have distance {}",
            result.index1, result.index2, result.distance
        );
    }
}
