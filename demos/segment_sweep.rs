use planar_primitives::{
    core::Control,
    segment_intersect::{
        find_all_intersects, find_all_intersects_indexed, find_all_intersects_opt,
        visit_all_intersects, ActiveSetKey, SegIntersectPair, SweepOptions,
    },
    segs, validate_segments,
};

fn main() {
    env_logger::init();

    let segments = segs![
        (1.0, 1.0, 4.0, 4.0),
        (1.0, 4.0, 4.0, 1.0),
        (5.0, 2.0, 7.0, 2.0),
        (6.0, 0.0, 6.0, 5.0)
    ];

    if let Err(e) = validate_segments(&segments) {
        eprintln!("invalid input: {e}");
        return;
    }

    println!("Sweep line intersects:");
    for pair in find_all_intersects(&segments) {
        println!("  {}", pair.describe(&segments));
    }

    let indexed = find_all_intersects_indexed(&segments);
    println!("Spatial index search found {} intersecting pairs", indexed.len());

    let options = SweepOptions {
        key: ActiveSetKey::Midpoint,
        ..SweepOptions::new()
    };
    let midpoint = find_all_intersects_opt(&segments, &options);
    println!("Midpoint keyed sweep found {} intersecting pairs", midpoint.len());

    // stop at the first intersect found
    let first = visit_all_intersects(
        &segments,
        &mut |pair: SegIntersectPair| Control::Break(pair),
        &SweepOptions::new(),
    );
    if let Control::Break(pair) = first {
        println!("First intersect: {}", pair.describe(&segments));
    }
}
