use super::FuzzyEq;
use std::cmp::Ordering;

/// Fuzzy ordering built on top of [FuzzyEq].
pub trait FuzzyOrd: FuzzyEq {
    /// Fuzzy greater than (`self + eps > other`).
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// Fuzzy less than (`self < other + eps`).
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Sign of `self` where values within `fuzzy_epsilon` of zero are [Ordering::Equal].
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_primitives::core::traits::*;
    /// use std::cmp::Ordering;
    /// assert_eq!(1e-9f64.fuzzy_sign_eps(1e-8), Ordering::Equal);
    /// assert_eq!((-0.5f64).fuzzy_sign_eps(1e-8), Ordering::Less);
    /// assert_eq!(2.0f64.fuzzy_sign_eps(0.0), Ordering::Greater);
    /// ```
    fn fuzzy_sign_eps(&self, fuzzy_epsilon: Self) -> Ordering;

    /// Test if `self` is in range between `min` and `max` with some epsilon for fuzzy comparing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_primitives::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// assert!(!2.1f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_sign_eps(&self, fuzzy_epsilon: $ty) -> Ordering {
                if *self >= fuzzy_epsilon && *self > 0.0 {
                    Ordering::Greater
                } else if *self <= -fuzzy_epsilon && *self < 0.0 {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
