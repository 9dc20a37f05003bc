//! Sweep line detection of intersecting segment pairs.

use super::{seg_intersects_eps, LineSeg, SegIntersectPair, SegIntersectVisitor};
use crate::core::{
    traits::{ControlFlow, Real},
    Control,
};
use std::{cmp::Ordering, collections::HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key used to order segments in the sweep active set.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ActiveSetKey {
    /// Order by each segment's y value at the current sweep x, ties broken by slope then index.
    #[default]
    SweepPosition,
    /// Order by the static average of the segment end point y values, ties broken by index.
    ///
    /// This is an approximation: segments may be ordered differently from their true vertical
    /// order at the sweep position, so some intersects may go unreported.
    Midpoint,
}

/// Struct to hold options parameters when finding segment intersects with a sweep line.
#[derive(Debug, Clone)]
pub struct SweepOptions<T> {
    /// How segments are ordered in the active set.
    pub key: ActiveSetKey,
    /// Fuzzy comparison epsilon used for orientation tests and active set key comparisons, zero
    /// (the default) gives exact orientation tests.
    pub collinear_eps: T,
}

impl<T> SweepOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            key: ActiveSetKey::default(),
            collinear_eps: T::zero(),
        }
    }
}

impl<T> Default for SweepOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // declaration order gives starts before ends at equal x
    Start,
    End,
}

#[derive(Debug, Copy, Clone)]
struct Event<T> {
    x: T,
    kind: EventKind,
    index: usize,
}

fn build_events<T>(segments: &[LineSeg<T>]) -> Vec<Event<T>>
where
    T: Real,
{
    let mut events = Vec::with_capacity(2 * segments.len());
    for (index, seg) in segments.iter().enumerate() {
        events.push(Event {
            x: seg.left().x,
            kind: EventKind::Start,
            index,
        });
        events.push(Event {
            x: seg.right().x,
            kind: EventKind::End,
            index,
        });
    }

    events.sort_unstable_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.kind.cmp(&b.kind))
            .then(a.index.cmp(&b.index))
    });

    events
}

/// Segment indexes currently crossed by the sweep line, ordered bottom to top.
struct ActiveSet<'a, T> {
    segments: &'a [LineSeg<T>],
    key: ActiveSetKey,
    eps: T,
    ordered: Vec<usize>,
}

impl<'a, T> ActiveSet<'a, T>
where
    T: Real,
{
    fn new(segments: &'a [LineSeg<T>], options: &SweepOptions<T>) -> Self {
        Self {
            segments,
            key: options.key,
            eps: options.collinear_eps,
            ordered: Vec::new(),
        }
    }

    fn compare(&self, i: usize, j: usize, sweep_x: T) -> Ordering {
        let s1 = &self.segments[i];
        let s2 = &self.segments[j];
        match self.key {
            ActiveSetKey::SweepPosition => {
                let y1 = s1.y_at(sweep_x);
                let y2 = s2.y_at(sweep_x);
                if y1 != y2 && !y1.fuzzy_eq_eps(y2, self.eps) {
                    return y1.partial_cmp(&y2).unwrap_or(Ordering::Equal);
                }

                // same position, the segment with the lower slope lies below to the right
                let d1 = s1.right() - s1.left();
                let d2 = s2.right() - s2.left();
                d2.perp_dot(d1)
                    .partial_cmp(&T::zero())
                    .unwrap_or(Ordering::Equal)
                    .then(i.cmp(&j))
            }
            ActiveSetKey::Midpoint => {
                let y1 = (s1.p0.y + s1.p1.y) / T::two();
                let y2 = (s2.p0.y + s2.p1.y) / T::two();
                y1.partial_cmp(&y2)
                    .unwrap_or(Ordering::Equal)
                    .then(i.cmp(&j))
            }
        }
    }

    /// Inserts `index` and returns its position in the active set.
    fn insert(&mut self, index: usize, sweep_x: T) -> usize {
        let pos = self
            .ordered
            .partition_point(|&j| self.compare(j, index, sweep_x) == Ordering::Less);
        self.ordered.insert(pos, index);
        pos
    }

    fn position_of(&self, index: usize) -> Option<usize> {
        self.ordered.iter().position(|&j| j == index)
    }

    fn remove(&mut self, pos: usize) {
        self.ordered.remove(pos);
    }

    fn prev(&self, pos: usize) -> Option<usize> {
        pos.checked_sub(1).map(|p| self.ordered[p])
    }

    fn next(&self, pos: usize) -> Option<usize> {
        self.ordered.get(pos + 1).copied()
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }
}

/// Find all intersecting segment pairs detected by a sweep line using default options.
///
/// See [visit_all_intersects] for details.
///
/// # Examples
///
/// ```
/// # use planar_primitives::segs;
/// # use planar_primitives::segment_intersect::*;
/// let segments = segs![(1.0, 1.0, 4.0, 4.0), (1.0, 4.0, 4.0, 1.0), (5.0, 2.0, 7.0, 2.0)];
/// let intersects = find_all_intersects(&segments);
/// assert_eq!(intersects, vec![SegIntersectPair::new(0, 1)]);
/// ```
pub fn find_all_intersects<T>(segments: &[LineSeg<T>]) -> Vec<SegIntersectPair>
where
    T: Real,
{
    find_all_intersects_opt(segments, &SweepOptions::new())
}

/// Find all intersecting segment pairs detected by a sweep line.
///
/// Pairs are returned in the order they were detected.
pub fn find_all_intersects_opt<T>(
    segments: &[LineSeg<T>],
    options: &SweepOptions<T>,
) -> Vec<SegIntersectPair>
where
    T: Real,
{
    let mut result = Vec::new();
    let mut visitor = |pair: SegIntersectPair| {
        result.push(pair);
        Control::<()>::Continue
    };
    visit_all_intersects(segments, &mut visitor, options);
    result
}

/// Visit intersecting segment pairs found by sweeping a vertical line left to right.
///
/// Every segment creates a start event at its left end point and an end event at its right end
/// point. Events are processed in order of x, start events before end events at the same x and
/// otherwise by segment index. A start event inserts the segment into the active set and tests it
/// against its neighbors, an end event tests the segments that become neighbors and removes it.
///
/// Each unordered pair is visited at most once. Only pairs that become adjacent in the active set
/// are tested so this is a detector, not an exhaustive enumeration. Use
/// [find_all_intersects_indexed](super::find_all_intersects_indexed) for all pairs.
///
/// Visiting stops early when the visitor returns a break value, which is then returned.
pub fn visit_all_intersects<T, C, V>(
    segments: &[LineSeg<T>],
    visitor: &mut V,
    options: &SweepOptions<T>,
) -> C
where
    T: Real,
    C: ControlFlow,
    V: SegIntersectVisitor<C>,
{
    debug_assert!(
        segments.iter().all(|s| s.is_finite()),
        "segments must have finite coordinates"
    );

    if segments.len() < 2 {
        return C::continuing();
    }

    let events = build_events(segments);
    let mut active = ActiveSet::new(segments, options);
    let mut visited_pairs = HashSet::new();
    let mut max_active = 0;

    let mut visit_pair = |i: usize, j: usize| -> C {
        let pair = SegIntersectPair::new(i, j);
        if visited_pairs.contains(&pair) {
            return C::continuing();
        }

        visited_pairs.insert(pair);

        if seg_intersects_eps(&segments[i], &segments[j], options.collinear_eps) {
            log::trace!("sweep found intersect {:?}", pair);
            return visitor.visit_intr(pair);
        }

        C::continuing()
    };

    for event in events.iter() {
        match event.kind {
            EventKind::Start => {
                let pos = active.insert(event.index, event.x);
                max_active = max_active.max(active.len());
                if let Some(below) = active.prev(pos) {
                    try_cf!(visit_pair(below, event.index));
                }
                if let Some(above) = active.next(pos) {
                    try_cf!(visit_pair(event.index, above));
                }
            }
            EventKind::End => {
                let Some(pos) = active.position_of(event.index) else {
                    continue;
                };
                if let (Some(below), Some(above)) = (active.prev(pos), active.next(pos)) {
                    try_cf!(visit_pair(below, above));
                }
                active.remove(pos);
            }
        }
    }

    log::debug!(
        "sweep processed {} events, max active set size {}",
        events.len(),
        max_active
    );

    C::continuing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn events_ordered_starts_first() {
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(2.0, 0.0)),
            LineSeg::new(vec2(4.0, 1.0), vec2(2.0, 1.0)),
        ];
        let events = build_events(&segments);
        let order: Vec<_> = events.iter().map(|e| (e.x, e.kind, e.index)).collect();
        assert_eq!(
            order,
            vec![
                (0.0, EventKind::Start, 0),
                (2.0, EventKind::Start, 1),
                (2.0, EventKind::End, 0),
                (4.0, EventKind::End, 1),
            ]
        );
    }

    #[test]
    fn active_set_orders_by_sweep_position() {
        // midpoint of segment 0 is above segment 1's but at x = 0 it is below
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(10.0, 10.0)),
            LineSeg::new(vec2(0.0, 2.0), vec2(10.0, 2.0)),
        ];
        let options = SweepOptions::new();
        let mut active = ActiveSet::new(&segments, &options);
        active.insert(1, 0.0);
        assert_eq!(active.insert(0, 0.0), 0);

        let options = SweepOptions {
            key: ActiveSetKey::Midpoint,
            ..SweepOptions::new()
        };
        let mut active = ActiveSet::new(&segments, &options);
        active.insert(1, 0.0);
        assert_eq!(active.insert(0, 0.0), 1);
    }

    #[test]
    fn shared_start_point_ordered_by_slope() {
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(4.0, 4.0)),
            LineSeg::new(vec2(0.0, 0.0), vec2(4.0, -4.0)),
        ];
        let options = SweepOptions::new();
        let mut active = ActiveSet::new(&segments, &options);
        active.insert(0, 0.0);
        assert_eq!(active.insert(1, 0.0), 0);
        assert_eq!(active.position_of(0), Some(1));
    }

    #[test]
    fn end_event_tests_new_neighbors() {
        // segment 1 separates 0 and 2 until it ends, then 0 and 2 become adjacent
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(10.0, 6.0)),
            LineSeg::new(vec2(0.0, 2.0), vec2(2.0, 2.0)),
            LineSeg::new(vec2(0.0, 4.0), vec2(10.0, 0.0)),
        ];
        let result = find_all_intersects(&segments);
        assert_eq!(result, vec![SegIntersectPair::new(0, 2)]);
    }
}
