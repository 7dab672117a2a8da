//! The solve pipeline.
//!
//! Logging levels:
//! - **INFO**: Solve start/end, preprocessing summary
//! - **DEBUG**: Per-phase summaries and pruned sides

use std::path::Path;

use loadplan_config::LayoutConfig;
use loadplan_core::domain::request::LayoutRequest;
use loadplan_core::{HardSoftScore, Layout, Messages, Placement, Score};
use loadplan_scoring::{LayoutScoreCalculator, ScoreBreakdown, ScoreCalculator};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::domains::ValueDomains;
use crate::error::SolverError;
use crate::heuristic::{
    order_sides, part_order, HintInitializer, OrientationFilter, RandomInitializer,
    ShelfConstruction,
};
use crate::optimizer::Optimizer;
use crate::preprocess::preprocess;

/// Result of one solve.
///
/// A request that preprocessing declared unsolvable has no layout, no score
/// and at least one error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub layout: Option<Layout>,
    pub score: Option<HardSoftScore>,
    pub breakdown: Option<ScoreBreakdown>,
    pub messages: Messages,
}

impl SolveOutcome {
    fn unsolvable(messages: Messages) -> Self {
        Self {
            layout: None,
            score: None,
            breakdown: None,
            messages,
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.layout.is_some()
    }

    /// True if a layout was produced with no hard violation.
    pub fn is_feasible(&self) -> bool {
        self.score.is_some_and(|score| score.is_feasible())
    }

    /// Final placements, empty when unsolvable.
    pub fn placements(&self) -> Vec<Placement> {
        self.layout
            .as_ref()
            .map(Layout::placements)
            .unwrap_or_default()
    }
}

/// Runs preprocessing, the configured heuristics and an optimizer over a
/// layout.
#[derive(Debug, Default)]
pub struct LayoutSolver {
    config: LayoutConfig,
    calculator: LayoutScoreCalculator,
}

impl LayoutSolver {
    /// Creates a solver after validating the configuration.
    pub fn new(config: LayoutConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self {
            config,
            calculator: LayoutScoreCalculator::new(),
        })
    }

    /// Loads the configuration from a TOML or YAML file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, SolverError> {
        Self::new(LayoutConfig::load(path)?)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn calculator(&self) -> &LayoutScoreCalculator {
        &self.calculator
    }

    /// Builds the layout from raw request records, then solves it.
    pub fn solve_request(
        &self,
        request: &LayoutRequest,
        optimizer: &mut dyn Optimizer,
    ) -> Result<SolveOutcome, SolverError> {
        let layout = Layout::from_request(request)?;
        Ok(self.solve(layout, optimizer))
    }

    /// Solves one layout.
    ///
    /// Order: preprocess, stop if unsolvable, orientation filter, side
    /// ordering, hint initializer, construction, random initializer,
    /// optimizer, final score.
    pub fn solve(&self, mut layout: Layout, optimizer: &mut dyn Optimizer) -> SolveOutcome {
        let config = &self.config;
        info!(
            event = "solve_start",
            carrier = layout.carrier().id(),
            part_count = layout.part_count(),
            surface_count = layout.surfaces().len(),
            optimizer = optimizer.optimizer_name(),
        );

        let report = preprocess(&mut layout);
        if !report.solvable {
            info!(
                event = "solve_end",
                solvable = false,
                messages = report.messages.len(),
            );
            return SolveOutcome::unsolvable(report.messages);
        }

        let removed = OrientationFilter::new(config.orientation_filter).apply(&mut layout);
        debug!(event = "phase_end", phase = "orientation_filter", removed_sides = removed);

        if config.side_ordering {
            order_sides(&mut layout);
            debug!(event = "phase_end", phase = "side_ordering");
        }

        let hinted = HintInitializer::new(config.hint_initializer).initialize(&mut layout);
        debug!(event = "phase_end", phase = "hint_initializer", parts = hinted);

        let order = part_order(layout.parts(), config.part_ordering, layout.carrier());
        let space = ValueDomains::new(config.position_step).search_space(&layout, order);

        if let Some(construction) = config.construction {
            let overflowed =
                ShelfConstruction::new(construction.sort_metric).construct(&mut layout);
            debug!(event = "phase_end", phase = "construction", overflowed);
        }

        if let Some(random) = config.random_initializer {
            let mut initializer = RandomInitializer::new(random, config.effective_seed());
            let touched = initializer.initialize(&mut layout, &space.positions);
            debug!(event = "phase_end", phase = "random_initializer", parts = touched);
        }

        optimizer.optimize(&mut layout, &space, &self.calculator);

        let breakdown = self.calculator.calculate_breakdown(&layout);
        let score = breakdown.score();
        info!(
            event = "solve_end",
            score = %score,
            feasible = score.is_feasible(),
            score_calculations = self.calculator.calculation_count(),
        );

        SolveOutcome {
            layout: Some(layout),
            score: Some(score),
            breakdown: Some(breakdown),
            messages: report.messages,
        }
    }

    /// Solves independent layouts in parallel, one optimizer per layout.
    ///
    /// Outcomes are returned in input order.
    pub fn solve_batch<O, F>(&self, layouts: Vec<Layout>, make_optimizer: F) -> Vec<SolveOutcome>
    where
        O: Optimizer,
        F: Fn() -> O + Sync,
    {
        layouts
            .into_par_iter()
            .map(|layout| {
                let mut optimizer = make_optimizer();
                self.solve(layout, &mut optimizer)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
