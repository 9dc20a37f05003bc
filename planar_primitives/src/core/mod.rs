//! Core module has common/shared math, traits, and utility modules.

use self::traits::ControlFlow;
pub mod math;
pub mod traits;

/// Basic control flow enum that can be used when visiting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<B = ()> {
    /// Indicates to the visiting function to continue visiting results.
    Continue,
    /// Indicates to the visiting function to stop visiting results and return a value.
    Break(B),
}

impl<B> Default for Control<B> {
    #[inline]
    fn default() -> Self {
        Control::Continue
    }
}

impl<B> ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(*self, Control::Break(_))
    }
}
