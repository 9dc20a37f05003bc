use planar_primitives::{
    convex_hull::{convex_hull, convex_hull_opt, is_convex_ccw, HullOptions},
    points,
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

    let hull = convex_hull(&pts);
    assert!(is_convex_ccw(&hull, 1e-8), "hull should be convex");
    println!("Convex hull of {} points:", pts.len());
    for p in hull.iter() {
        println!("  {p}");
    }

    // collinear input has no hull
    let line = points![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
    let hull = convex_hull(&line);
    assert!(hull.is_empty());
    println!("Collinear points hull is empty: {}", hull.is_empty());

    // looser collinear tolerance drops nearly flat vertexes
    let near_square = points![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 4.000001), (0.0, 4.0)];
    let exact = convex_hull_opt(&near_square, &HullOptions { collinear_eps: 0.0 });
    let loose = convex_hull_opt(&near_square, &HullOptions { collinear_eps: 1e-3 });
    println!(
        "Nearly square hull: {} vertexes exact, {} vertexes with collinear_eps = 1e-3",
        exact.len(),
        loose.len()
    );
}
