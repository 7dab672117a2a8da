//! The optimizer seam.
//!
//! The search itself lives outside this crate. An [`Optimizer`] receives the
//! prepared layout, the candidate values of every decision variable and the
//! score callback, and leaves its best assignment in the layout.

use std::fmt::{self, Debug};

use loadplan_core::Layout;
use loadplan_scoring::ScoreCalculator;

use crate::domains::SearchSpace;

/// A search strategy that mutates decision variables.
///
/// The layout is exclusively borrowed for the whole run; the optimizer is
/// the only party changing it until `optimize` returns.
pub trait Optimizer: Send + Debug {
    /// Improves the layout in place.
    fn optimize(&mut self, layout: &mut Layout, space: &SearchSpace, scorer: &dyn ScoreCalculator);

    /// Name used in logs.
    fn optimizer_name(&self) -> &'static str;
}

/// Leaves the prepared layout as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpOptimizer;

impl Optimizer for NoOpOptimizer {
    fn optimize(&mut self, _: &mut Layout, _: &SearchSpace, _: &dyn ScoreCalculator) {}

    fn optimizer_name(&self) -> &'static str {
        "NoOp"
    }
}

/// Adapts a closure into an [`Optimizer`].
pub struct FnOptimizer<F> {
    name: &'static str,
    f: F,
}

impl<F> FnOptimizer<F>
where
    F: FnMut(&mut Layout, &SearchSpace, &dyn ScoreCalculator) + Send,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Debug for FnOptimizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOptimizer").field("name", &self.name).finish()
    }
}

impl<F> Optimizer for FnOptimizer<F>
where
    F: FnMut(&mut Layout, &SearchSpace, &dyn ScoreCalculator) + Send,
{
    fn optimize(&mut self, layout: &mut Layout, space: &SearchSpace, scorer: &dyn ScoreCalculator) {
        (self.f)(layout, space, scorer)
    }

    fn optimizer_name(&self) -> &'static str {
        self.name
    }
}
