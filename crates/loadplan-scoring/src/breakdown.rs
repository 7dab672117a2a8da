use std::fmt;

use loadplan_core::{HardSoftScore, Layout};

use crate::constraints::LayoutConstraint;

/// Per-component counts behind a layout score.
///
/// Every hard violation is counted here, so an infeasible score can always
/// be traced back to the constraints that caused it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreBreakdown {
    pub overlaps: i64,
    pub outside: i64,
    pub disallowed_sides: i64,
    pub mandatory_mismatches: i64,
    pub not_preferred: i64,
    /// Summed Manhattan distance of mandatory-hinted parts to their targets.
    pub mandatory_distance: i64,
}

impl ScoreBreakdown {
    /// Evaluates every constraint against `layout`.
    pub fn of(layout: &Layout) -> Self {
        let mut breakdown = ScoreBreakdown::default();
        for constraint in LayoutConstraint::ALL {
            *breakdown.component_mut(constraint) = constraint.total(layout);
        }
        breakdown
    }

    pub fn component(&self, constraint: LayoutConstraint) -> i64 {
        match constraint {
            LayoutConstraint::Overlap => self.overlaps,
            LayoutConstraint::OutsideSurface => self.outside,
            LayoutConstraint::DisallowedSide => self.disallowed_sides,
            LayoutConstraint::MandatoryHintMismatch => self.mandatory_mismatches,
            LayoutConstraint::NotPreferredSide => self.not_preferred,
            LayoutConstraint::MandatoryHintDistance => self.mandatory_distance,
        }
    }

    fn component_mut(&mut self, constraint: LayoutConstraint) -> &mut i64 {
        match constraint {
            LayoutConstraint::Overlap => &mut self.overlaps,
            LayoutConstraint::OutsideSurface => &mut self.outside,
            LayoutConstraint::DisallowedSide => &mut self.disallowed_sides,
            LayoutConstraint::MandatoryHintMismatch => &mut self.mandatory_mismatches,
            LayoutConstraint::NotPreferredSide => &mut self.not_preferred,
            LayoutConstraint::MandatoryHintDistance => &mut self.mandatory_distance,
        }
    }

    pub fn hard_violations(&self) -> i64 {
        self.overlaps + self.outside + self.disallowed_sides + self.mandatory_mismatches
    }

    pub fn soft_penalty(&self) -> i64 {
        self.not_preferred + self.mandatory_distance
    }

    pub fn score(&self) -> HardSoftScore {
        HardSoftScore::of(-self.hard_violations(), -self.soft_penalty())
    }

    pub fn is_feasible(&self) -> bool {
        self.hard_violations() == 0
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "overlaps={} outside={} disallowed_sides={} mandatory_mismatches={} \
             not_preferred={} mandatory_distance={}",
            self.overlaps,
            self.outside,
            self.disallowed_sides,
            self.mandatory_mismatches,
            self.not_preferred,
            self.mandatory_distance
        )
    }
}
