//! Constraint scoring for loadplan layouts.
//!
//! This crate turns a [`Layout`](loadplan_core::Layout) into a
//! [`HardSoftScore`](loadplan_core::HardSoftScore):
//! - Hard: overlaps, parts outside their surface, disallowed sides and
//!   missed mandatory hints, one point each
//! - Soft: parts off their preferred side plus the distance of
//!   mandatory-hinted parts from their targets
//!
//! Scores are recomputed from scratch on every call. [`explain`] decomposes
//! a score into the matches behind it; [`score_all`] scores independent
//! layouts in parallel.

pub mod analysis;
mod breakdown;
mod calculator;
pub mod constraints;

pub use analysis::{
    explain, ConstraintAnalysis, ConstraintJustification, DetailedConstraintMatch, Indictment,
    IndictmentMap, ScoreExplanation,
};
pub use breakdown::ScoreBreakdown;
pub use calculator::{calculate_score, score_all, LayoutScoreCalculator, ScoreCalculator};
pub use constraints::{overlap_area, overlaps, LayoutConstraint};
