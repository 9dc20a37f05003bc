use planar_primitives::{
    convex_hull::convex_hull,
    points,
    rotating_calipers::{diameter, polygon_diameter, polygon_width},
};

fn main() {
    env_logger::init();

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

    if let Some(result) = diameter(&pts) {
        println!(
            "Diameter: {:.6} between {} and {}",
            result.distance, result.point1, result.point2
        );
    }

    let hull = convex_hull(&pts);
    if let (Some(d), Some(w)) = (polygon_diameter(&hull), polygon_width(&hull)) {
        println!("Hull of {} vertexes: diameter {:.6}, width {:.6}", hull.len(), d.distance, w);
    }
}
