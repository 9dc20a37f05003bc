use planar_primitives::{
    core::math::{
        circle_circle_intr, circle_line_intr, circle_line_through_intr, circumcircle, vec2,
        CircleCircleIntr,
    },
    validate_radius,
};

fn main() {
    env_logger::init();

    let (c1, r1) = (vec2(0.0, 0.0), 5.0);
    let (c2, r2) = (vec2(4.0, 0.0), 3.0);
    if let Err(e) = validate_radius(r1).and_then(|_| validate_radius(r2)) {
        eprintln!("{e}");
        return;
    }

    match circle_circle_intr(c1, r1, c2, r2) {
        CircleCircleIntr::NoIntersect => println!("Circles do not intersect"),
        CircleCircleIntr::TangentIntersect { point } => println!("Circles touch at {point}"),
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            println!("Circles intersect at {point1} and {point2}")
        }
        CircleCircleIntr::Overlapping => println!("Circles are the same"),
    }

    // y = x + 1
    let points = circle_line_intr(c1, r1, 1.0, 1.0).points();
    println!("Line y = x + 1 meets the first circle at {points:?}");

    // vertical line x = 3
    let points = circle_line_through_intr(c1, r1, vec2(3.0, 0.0), vec2(3.0, 1.0), 1e-8).points();
    println!("Line x = 3 meets the first circle at {points:?}");

    match circumcircle(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 2.0)) {
        Some(circle) => println!(
            "Circumcircle center {}, radius {:.6}",
            circle.center, circle.radius
        ),
        None => println!("Points are collinear, no circumcircle"),
    }
}
