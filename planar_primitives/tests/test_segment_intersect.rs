use planar_primitives::{
    core::{math::Vector2, Control},
    segment_intersect::*,
    segs,
};
use std::collections::HashSet;

fn pair_set(pairs: &[SegIntersectPair]) -> HashSet<SegIntersectPair> {
    pairs.iter().copied().collect()
}

#[test]
fn crossing_and_separate() {
    let segments = segs![(1.0, 1.0, 4.0, 4.0), (1.0, 4.0, 4.0, 1.0), (5.0, 2.0, 7.0, 2.0)];
    assert!(seg_intersects(&segments[0], &segments[1]));
    assert!(!seg_intersects(&segments[0], &segments[2]));
    assert!(!seg_intersects(&segments[1], &segments[2]));

    let found = find_all_intersects(&segments);
    assert_eq!(found, vec![SegIntersectPair::new(0, 1)]);
    assert_eq!(
        found[0].describe(&segments),
        "Segment (1,1)-(4,4) intersects with (1,4)-(4,1)"
    );
}

#[test]
fn touching_end_points() {
    let segments = segs![(0.0, 0.0, 2.0, 2.0), (2.0, 2.0, 4.0, 0.0)];
    assert!(seg_intersects(&segments[0], &segments[1]));
    assert_eq!(find_all_intersects(&segments), vec![SegIntersectPair::new(0, 1)]);
}

#[test]
fn t_junction() {
    let segments = segs![(0.0, 0.0, 4.0, 0.0), (2.0, 0.0, 2.0, 3.0)];
    assert!(seg_intersects(&segments[0], &segments[1]));
    assert!(seg_intersects(&segments[1], &segments[0]));
}

#[test]
fn collinear_overlap_and_gap() {
    let overlap = segs![(0.0, 0.0, 3.0, 0.0), (2.0, 0.0, 5.0, 0.0)];
    assert!(seg_intersects(&overlap[0], &overlap[1]));

    let gap = segs![(0.0, 0.0, 1.0, 1.0), (2.0, 2.0, 3.0, 3.0)];
    assert!(!seg_intersects(&gap[0], &gap[1]));
    assert!(find_all_intersects(&gap).is_empty());
}

#[test]
fn parallel_not_intersecting() {
    let segments = segs![(0.0, 0.0, 4.0, 0.0), (0.0, 1.0, 4.0, 1.0)];
    assert!(!seg_intersects(&segments[0], &segments[1]));
}

#[test]
fn degenerate_point_segment() {
    let segments = segs![(2.0, 2.0, 2.0, 2.0), (0.0, 0.0, 4.0, 4.0), (3.0, 0.0, 3.0, 0.0)];
    assert!(seg_intersects(&segments[0], &segments[1]));
    assert!(!seg_intersects(&segments[2], &segments[1]));
}

#[test]
fn symmetric() {
    let segments = segs![
        (0.0, 0.0, 5.0, 5.0),
        (0.0, 5.0, 5.0, 0.0),
        (1.0, 0.0, 1.0, 6.0),
        (6.0, 6.0, 7.0, 1.0),
        (2.0, 2.0, 3.0, 3.0),
        (-1.0, 2.0, 8.0, 2.0)
    ];
    for a in segments.iter() {
        for b in segments.iter() {
            assert_eq!(seg_intersects(a, b), seg_intersects(b, a), "{} and {}", a, b);
        }
    }
}

#[test]
fn sweep_subset_of_indexed() {
    let segments = segs![
        (0.0, 0.0, 10.0, 10.0),
        (0.0, 10.0, 10.0, 0.0),
        (5.0, -1.0, 5.0, 11.0),
        (-2.0, 3.0, 12.0, 3.0),
        (20.0, 20.0, 25.0, 21.0),
        (1.0, 9.0, 3.0, 9.5),
        (7.0, 1.0, 9.0, 4.0)
    ];
    let sweep = find_all_intersects(&segments);
    let indexed = find_all_intersects_indexed(&segments);

    let sweep_set = pair_set(&sweep);
    assert_eq!(sweep_set.len(), sweep.len(), "sweep reported duplicates");
    assert!(sweep_set.is_subset(&pair_set(&indexed)));
    assert!(!sweep.is_empty());

    for pair in indexed.iter() {
        assert!(pair.index1 < pair.index2);
        assert!(seg_intersects(&segments[pair.index1], &segments[pair.index2]));
    }

    // every intersecting pair is found by the indexed search
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let expected = seg_intersects(&segments[i], &segments[j]);
            assert_eq!(
                indexed.contains(&SegIntersectPair::new(i, j)),
                expected,
                "pair ({}, {})",
                i,
                j
            );
        }
    }
}

#[test]
fn midpoint_key_option() {
    let segments = segs![(1.0, 1.0, 4.0, 4.0), (1.0, 4.0, 4.0, 1.0), (5.0, 2.0, 7.0, 2.0)];
    let options = SweepOptions {
        key: ActiveSetKey::Midpoint,
        ..SweepOptions::new()
    };
    assert_eq!(
        find_all_intersects_opt(&segments, &options),
        vec![SegIntersectPair::new(0, 1)]
    );
}

#[test]
fn shared_midpoint_key_segments_both_kept() {
    // both segments have a y midpoint of 2, they must not replace each other in the active set
    let segments = segs![(0.0, 0.0, 4.0, 4.0), (0.0, 2.0, 4.0, 2.0), (1.0, 3.0, 3.0, 3.0)];
    let options = SweepOptions {
        key: ActiveSetKey::Midpoint,
        ..SweepOptions::new()
    };
    let found = pair_set(&find_all_intersects_opt(&segments, &options));
    assert!(found.contains(&SegIntersectPair::new(0, 1)));
}

#[test]
fn visitor_early_exit() {
    let segments = segs![
        (0.0, 0.0, 10.0, 10.0),
        (0.0, 10.0, 10.0, 0.0),
        (5.0, -1.0, 5.0, 11.0),
        (-2.0, 3.0, 12.0, 3.0)
    ];
    let mut visited = Vec::new();
    let result = visit_all_intersects(
        &segments,
        &mut |pair: SegIntersectPair| {
            visited.push(pair);
            if visited.len() == 2 {
                Control::Break(pair)
            } else {
                Control::Continue
            }
        },
        &SweepOptions::new(),
    );

    assert_eq!(visited.len(), 2);
    assert_eq!(result, Control::Break(visited[1]));
}

#[test]
fn empty_and_single_segment() {
    let empty: Vec<LineSeg<f64>> = Vec::new();
    assert!(find_all_intersects(&empty).is_empty());
    let single = vec![LineSeg::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0))];
    assert!(find_all_intersects(&single).is_empty());
}

#[test]
fn left_and_right_end_points() {
    let seg = LineSeg::new(Vector2::new(4.0, 1.0), Vector2::new(-2.0, 3.0));
    assert_eq!(seg.left(), Vector2::new(-2.0, 3.0));
    assert_eq!(seg.right(), Vector2::new(4.0, 1.0));
    let extents = seg.extents();
    assert_eq!(
        (extents.min_x, extents.min_y, extents.max_x, extents.max_y),
        (-2.0, 1.0, 4.0, 3.0)
    );
    assert_eq!(seg.to_string(), "(4,1)-(-2,3)");
}

#[test]
fn small_scale_segments_not_touching() {
    // segment 1 lies strictly below the diagonal of segment 0
    let segments = segs![(0.0, 0.0, 1e-5, 1e-5), (8e-6, 2e-6, 9e-6, 1e-6)];
    assert!(!seg_intersects(&segments[0], &segments[1]));
    assert!(!seg_intersects(&segments[1], &segments[0]));
    assert!(find_all_intersects(&segments).is_empty());
    assert!(find_all_intersects_indexed(&segments).is_empty());

    // an explicit tolerance larger than the cross products treats them as collinear
    assert!(seg_intersects_eps(&segments[0], &segments[1], 1e-8));
}

#[test]
fn small_scale_segments_crossing() {
    let segments = segs![(0.0, 0.0, 1e-5, 1e-5), (0.0, 1e-5, 1e-5, 0.0)];
    assert!(seg_intersects(&segments[0], &segments[1]));
    assert_eq!(find_all_intersects(&segments), vec![SegIntersectPair::new(0, 1)]);
}
