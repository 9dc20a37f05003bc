//! Input validation errors.
//!
//! The algorithms themselves never fail: too few points yields an empty or `None` result. These
//! errors are for callers (e.g. command line front ends) that want to reject malformed input up
//! front instead of relying on debug assertions.
use crate::{
    core::{math::Vector2, traits::Real},
    segment_intersect::LineSeg,
};
use thiserror::Error;

/// Errors reported when validating geometric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at index {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point or segment.
        index: usize,
    },
    /// Fewer points than the operation requires.
    #[error("not enough points: {required} required, {actual} given")]
    InsufficientPoints {
        /// Minimum point count for the operation.
        required: usize,
        /// Point count given.
        actual: usize,
    },
    /// Radius is negative or not finite.
    #[error("invalid radius: {radius} (must be finite and non-negative)")]
    InvalidRadius {
        /// The invalid radius value.
        radius: String,
    },
}

/// A specialized `Result` type for input validation.
pub type GeomResult<T> = std::result::Result<T, GeomError>;

/// Validates that all `points` have finite coordinates and there are at least `min_count` of them.
///
/// # Examples
///
/// ```
/// # use planar_primitives::*;
/// # use planar_primitives::core::math::*;
/// let pts = vec![vec2(0.0, 0.0), vec2(1.0, f64::NAN)];
/// assert_eq!(
///     validate_points(&pts, 2),
///     Err(GeomError::NonFiniteCoordinate { index: 1 })
/// );
/// assert_eq!(
///     validate_points(&pts[..1], 2),
///     Err(GeomError::InsufficientPoints { required: 2, actual: 1 })
/// );
/// ```
pub fn validate_points<T>(points: &[Vector2<T>], min_count: usize) -> GeomResult<()>
where
    T: Real,
{
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(GeomError::NonFiniteCoordinate { index });
    }

    if points.len() < min_count {
        return Err(GeomError::InsufficientPoints {
            required: min_count,
            actual: points.len(),
        });
    }

    Ok(())
}

/// Validates that all `segments` have finite end points.
pub fn validate_segments<T>(segments: &[LineSeg<T>]) -> GeomResult<()>
where
    T: Real,
{
    match segments.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(GeomError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// Validates a circle radius is finite and non-negative.
pub fn validate_radius<T>(radius: T) -> GeomResult<()>
where
    T: Real,
{
    if !radius.is_finite() || radius < T::zero() {
        return Err(GeomError::InvalidRadius {
            radius: radius.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn valid_points_pass() {
        let pts = vec![vec2(0.0, 0.0), vec2(1.0, 2.0), vec2(-3.0, 4.0)];
        assert_eq!(validate_points(&pts, 3), Ok(()));
    }

    #[test]
    fn infinite_segment_rejected() {
        let segments = vec![
            LineSeg::new(vec2(0.0, 0.0), vec2(1.0, 1.0)),
            LineSeg::new(vec2(0.0, f64::INFINITY), vec2(1.0, 1.0)),
        ];
        assert_eq!(
            validate_segments(&segments),
            Err(GeomError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn radius_checks() {
        assert!(validate_radius(2.0).is_ok());
        assert!(validate_radius(0.0).is_ok());
        let err = validate_radius(-1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid radius: -1 (must be finite and non-negative)"
        );
        assert!(validate_radius(f64::NAN).is_err());
    }
}
