//! Exhaustive intersect search using a spatial index of segment bounding boxes.

use super::{seg_intersects_eps, LineSeg, SegIntersectPair};
use crate::core::traits::Real;
use static_aabb2d_index as aabb_index;
use static_aabb2d_index::{
    IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::collections::HashSet;

/// Creates a spatial index of all the segment bounding boxes.
///
/// The segment index position is used as the key to the segment bounding box in the
/// `StaticAABB2DIndex`.
///
/// # Panics
///
/// Panics if `T` fails to cast to or from `f64` (required by the spatial index).
pub fn create_aabb_index<T>(segments: &[LineSeg<T>]) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(segments.len());

    for seg in segments.iter() {
        let aabb = seg.extents();
        builder.add(aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y);
    }

    unwrap_spatial_index(builder)
}

/// Find all intersecting segment pairs using exact orientation tests.
///
/// See [find_all_intersects_indexed_eps] for details.
///
/// # Examples
///
/// ```
/// # use planar_primitives::segs;
/// # use planar_primitives::segment_intersect::*;
/// let segments = segs![
///     (0.0, 0.0, 4.0, 4.0),
///     (0.0, 4.0, 4.0, 0.0),
///     (2.0, -1.0, 2.0, 5.0),
///     (10.0, 10.0, 11.0, 11.0),
/// ];
/// let intersects = find_all_intersects_indexed(&segments);
/// assert_eq!(
///     intersects,
///     vec![
///         SegIntersectPair::new(0, 1),
///         SegIntersectPair::new(0, 2),
///         SegIntersectPair::new(1, 2),
///     ]
/// );
/// ```
pub fn find_all_intersects_indexed<T>(segments: &[LineSeg<T>]) -> Vec<SegIntersectPair>
where
    T: Real,
{
    find_all_intersects_indexed_eps(segments, T::zero())
}

/// Find all intersecting segment pairs by querying a spatial index of the segment bounding boxes.
///
/// Every pair of segments with overlapping (fuzzy expanded) bounding boxes is tested once with
/// [seg_intersects_eps](super::seg_intersects_eps) using `epsilon`. The result is complete, free
/// of duplicates and sorted by `(index1, index2)`.
pub fn find_all_intersects_indexed_eps<T>(
    segments: &[LineSeg<T>],
    epsilon: T,
) -> Vec<SegIntersectPair>
where
    T: Real,
{
    let mut result = Vec::new();
    if segments.len() < 2 {
        return result;
    }

    let aabb_index = create_aabb_index(segments);
    let mut visited_pairs = HashSet::with_capacity(segments.len());
    let mut query_stack = Vec::with_capacity(8);
    let fuzz = epsilon + T::fuzzy_epsilon();

    for (box_index, aabb) in aabb_index.item_boxes().iter().enumerate() {
        let i = aabb_index.all_box_indices()[box_index];
        let mut query_visitor = |hit_i: usize| {
            if hit_i == i {
                return aabb_index::Control::Continue;
            }

            let pair = SegIntersectPair::new(i, hit_i);
            // each overlapping box pair is hit twice, (i, j) then (j, i)
            if !visited_pairs.insert(pair) {
                return aabb_index::Control::Continue;
            }

            if seg_intersects_eps(&segments[i], &segments[hit_i], epsilon) {
                result.push(pair);
            }

            aabb_index::Control::<()>::Continue
        };

        aabb_index.visit_query_with_stack(
            aabb.min_x - fuzz,
            aabb.min_y - fuzz,
            aabb.max_x + fuzz,
            aabb.max_y + fuzz,
            &mut query_visitor,
            &mut query_stack,
        );
    }

    result.sort_unstable();
    log::debug!(
        "indexed search tested {} candidate pairs, found {} intersects",
        visited_pairs.len(),
        result.len()
    );

    result
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn index_keys_match_segments() {
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(1.0, 1.0)),
            LineSeg::new(vec2(5.0, 6.0), vec2(3.0, 2.0)),
        ];
        let index = create_aabb_index(&segments);
        let mut hits = index.query(2.5, 1.5, 6.0, 7.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn empty_and_single() {
        let none: Vec<LineSeg<f64>> = Vec::new();
        assert!(find_all_intersects_indexed(&none).is_empty());
        let one = vec![LineSeg::new(vec2(0.0, 0.0), vec2(1.0, 1.0))];
        assert!(find_all_intersects_indexed(&one).is_empty());
    }

    #[test]
    fn touching_boxes_tested() {
        // end point of one segment lies on the other
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(2.0, 0.0)),
            LineSeg::new(vec2(1.0, 0.0), vec2(1.0, 3.0)),
        ];
        assert_eq!(
            find_all_intersects_indexed(&segments),
            vec![SegIntersectPair::new(0, 1)]
        );
    }
}
