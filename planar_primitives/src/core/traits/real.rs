use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate type (`f32` or `f64`) that can be fuzzy compared
/// and ordered.
///
/// Integer inputs are expected to be converted to integer valued floats, orientation and
/// on-segment tests remain exact as long as the cross products fit in the mantissa.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Lossy conversion from an `f64` constant, used for default tolerances.
    #[inline]
    fn from_f64_const(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::zero)
    }
}

impl Real for f32 {
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn from_f64_const(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn from_f64_const(value: f64) -> Self {
        value
    }
}
