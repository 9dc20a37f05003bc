//! Reads `x,y` points (one per line) from stdin and prints the convex hull, closest pair and
//! diameter.
//!
//! ```text
//! printf '0,0\n4,0\n4,3\n1,1\n' | cargo run --example read_points
//! ```
use planar_primitives::{
    closest_pair::closest_pair,
    convex_hull::convex_hull,
    core::math::{vec2, Vector2},
    rotating_calipers::diameter,
    validate_points,
};
use std::{
    io::{self, BufRead},
    process::ExitCode,
};

fn parse_line(line: &str) -> Option<Vector2<f64>> {
    let (x, y) = line.split_once(',')?;
    Some(vec2(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn main() -> ExitCode {
    env_logger::init();

    let mut points = Vec::new();
    for (line_number, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(p) => points.push(p),
            None => {
                eprintln!("line {}: expected `x,y`, got `{}`", line_number + 1, line);
                return ExitCode::FAILURE;
            }
        }
    }

    log::info!("read {} points", points.len());

    if let Err(e) = validate_points(&points, 2) {
        eprintln!("invalid input: {e}");
        return ExitCode::FAILURE;
    }

    let hull = convex_hull(&points);
    if hull.is_empty() {
        println!("hull: none (fewer than 3 non-collinear points)");
    } else {
        let vertexes: Vec<String> = hull.iter().map(|p| p.to_string()).collect();
        println!("hull: {}", vertexes.join(" "));
    }

    if let Some(result) = closest_pair(&points) {
        println!(
            "closest pair: {} {} distance {}",
            result.point1, result.point2, result.distance
        );
    }

    if let Some(result) = diameter(&points) {
        println!(
            "diameter: {} {} distance {}",
            result.point1, result.point2, result.distance
        );
    }

    ExitCode::SUCCESS
}
