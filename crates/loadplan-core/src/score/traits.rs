use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// Objective value handed to optimizers.
///
/// Scores are totally ordered; a greater score is a better layout.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Sum
    + 'static
{
    /// True when no hard constraint is violated.
    fn is_feasible(&self) -> bool;

    fn zero() -> Self {
        Self::default()
    }

    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}
