//! Score calculation entry points.

use std::sync::atomic::{AtomicU64, Ordering};

use loadplan_core::{HardSoftScore, Layout};
use rayon::prelude::*;

use crate::breakdown::ScoreBreakdown;

/// Computes the score of a layout.
///
/// This is the callback handed to an optimizer: it must be a pure function
/// of the layout's current assignment.
pub trait ScoreCalculator: Send + Sync {
    /// Calculates the current score.
    fn calculate_score(&self, layout: &Layout) -> HardSoftScore;

    /// Calculates the score with its per-constraint components.
    fn calculate_breakdown(&self, layout: &Layout) -> ScoreBreakdown {
        ScoreBreakdown::of(layout)
    }
}

/// Full recalculation over all layout constraints.
///
/// Counts how many scores it has calculated, which optimizers can use as a
/// budget.
#[derive(Debug, Default)]
pub struct LayoutScoreCalculator {
    calculation_count: AtomicU64,
}

impl LayoutScoreCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scores calculated so far.
    pub fn calculation_count(&self) -> u64 {
        self.calculation_count.load(Ordering::Relaxed)
    }

    pub fn reset_calculation_count(&self) {
        self.calculation_count.store(0, Ordering::Relaxed);
    }
}

impl ScoreCalculator for LayoutScoreCalculator {
    fn calculate_score(&self, layout: &Layout) -> HardSoftScore {
        self.calculate_breakdown(layout).score()
    }

    fn calculate_breakdown(&self, layout: &Layout) -> ScoreBreakdown {
        self.calculation_count.fetch_add(1, Ordering::Relaxed);
        ScoreBreakdown::of(layout)
    }
}

/// Scores a single layout.
///
/// # Examples
///
/// ```
/// use loadplan_core::{Carrier, Layout, Part, Rotation, Side, Surface, Vec3i};
/// use loadplan_scoring::calculate_score;
///
/// let surface = Surface::new(0, Vec3i::new(10, 10, 1), Vec3i::ZERO).unwrap();
/// let carrier = Carrier::new("wagon", vec![surface], Vec::new()).unwrap();
/// let mut parts = Vec::new();
/// for id in 0..2 {
///     let mut part = Part::builder(id, Vec3i::new(10, 10, 1)).build().unwrap();
///     part.set_side_down(Some(Side::Bottom));
///     part.set_rotation(Some(Rotation::Deg0));
///     part.set_position(Some(Vec3i::ZERO));
///     parts.push(part);
/// }
/// let layout = Layout::new(carrier, parts).unwrap();
///
/// let score = calculate_score(&layout);
/// assert_eq!(score.hard(), -1);
/// ```
pub fn calculate_score(layout: &Layout) -> HardSoftScore {
    ScoreBreakdown::of(layout).score()
}

/// Scores independent layouts in parallel, preserving input order.
pub fn score_all(layouts: &[Layout]) -> Vec<HardSoftScore> {
    layouts.par_iter().map(calculate_score).collect()
}
