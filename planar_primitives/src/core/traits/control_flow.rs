/// Trait for control flow inside visiting methods.
///
/// Visitor callbacks return a type implementing this trait to signal whether the visiting
/// algorithm should keep going or stop early. `()` is always treated as continuing so plain
/// closures can be used as visitors.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::*;
/// # use planar_primitives::core::math::*;
/// # use planar_primitives::segment_intersect::*;
/// let segments = vec![
///     LineSeg::new(vec2(1.0, 1.0), vec2(4.0, 4.0)),
///     LineSeg::new(vec2(1.0, 4.0), vec2(4.0, 1.0)),
///     LineSeg::new(vec2(2.0, 0.0), vec2(2.0, 5.0)),
/// ];
///
/// let mut visited = 0;
/// visit_all_intersects(&segments, &mut |_pair: SegIntersectPair| {
///     visited += 1;
///     // Return Control::Break to stop visiting early
///     Control::Break(())
/// }, &SweepOptions::new());
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl ControlFlow for () {
    #[inline]
    fn continuing() -> Self {}

    #[inline]
    fn should_break(&self) -> bool {
        false
    }
}
