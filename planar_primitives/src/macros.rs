/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Internal macro used for try return on control flow.
macro_rules! try_cf {
    ($e:expr) => {
        match $e {
            x => {
                if x.should_break() {
                    return x;
                }
            }
        }
    };
}

/// Construct a `Vec` of points from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_primitives::points;
/// # use planar_primitives::core::math::*;
/// let pts = points![(0.0, 3.0), (1.0, 1.0), (2.0, 2.0)];
/// assert_eq!(pts.len(), 3);
/// assert_eq!(pts[1], vec2(1.0, 1.0));
/// ```
#[macro_export]
macro_rules! points {
    ($( $p:expr ),* $(,)?) => {
        {
            let pts: ::std::vec::Vec<$crate::core::math::Vector2<_>> =
                ::std::vec![$($crate::core::math::Vector2::new($p.0, $p.1)),*];
            pts
        }
    };
}

/// Construct a `Vec` of line segments from a list of (x1, y1, x2, y2) tuples.
///
/// # Examples
///
/// ```
/// # use planar_primitives::segs;
/// # use planar_primitives::core::math::*;
/// let segments = segs![(1.0, 1.0, 4.0, 4.0), (1.0, 4.0, 4.0, 1.0)];
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].p1, vec2(4.0, 1.0));
/// ```
#[macro_export]
macro_rules! segs {
    ($( $s:expr ),* $(,)?) => {
        {
            let segments: ::std::vec::Vec<$crate::segment_intersect::LineSeg<_>> =
                ::std::vec![$($crate::segment_intersect::LineSeg::new(
                    $crate::core::math::Vector2::new($s.0, $s.1),
                    $crate::core::math::Vector2::new($s.2, $s.3),
                )),*];
            segments
        }
    };
}
