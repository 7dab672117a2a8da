//! loadplan - places rigid cuboid parts onto the surfaces of a carrier
//!
//! Each part gets a side facing down, an in-plane rotation and a corner
//! position so that parts do not collide, stay on their surface, respect
//! their allowed orientations and follow placement hints. The search itself
//! is supplied by the caller as an [`Optimizer`].
//!
//! # Example
//!
//! ```rust
//! use loadplan::prelude::*;
//!
//! let shelf = Surface::new(0, Vec3i::new(10, 10, 1), Vec3i::ZERO).unwrap();
//! let carrier = Carrier::new("wagon", vec![shelf], Vec::new()).unwrap();
//! let parts = (1..=2)
//!     .map(|id| Part::builder(id, Vec3i::new(5, 10, 1)).build().unwrap())
//!     .collect();
//! let layout = Layout::new(carrier, parts).unwrap();
//!
//! let config = LayoutConfig::new().with_construction(ConstructionConfig::default());
//! let solver = LayoutSolver::new(config).unwrap();
//! let outcome = solver.solve(layout, &mut NoOpOptimizer);
//!
//! assert!(outcome.is_feasible());
//! assert_eq!(outcome.placements().len(), 2);
//! ```

// Model
pub use loadplan_core::domain::request::{
    CarrierRequest, HintRequest, LayoutRequest, PartRequest, SurfaceRequest,
};
pub use loadplan_core::{
    Carrier, HardSoftScore, HintWeight, Layout, LayoutHint, LoadPlanError, Message, Messages,
    Part, PartBuilder, PartId, Placement, Rotation, Score, Severity, Side, SideSelection,
    SideSet, Surface, SurfaceId, Vec3i,
};

// Configuration
pub use loadplan_config::{
    ConfigError, ConstructionConfig, HintInitializerConfig, LayoutConfig,
    OrientationFilterConfig, PartOrdering, RandomInitializerConfig, SortMetric,
};

// Scoring
pub use loadplan_scoring::{
    calculate_score, explain, score_all, LayoutConstraint, LayoutScoreCalculator,
    ScoreBreakdown, ScoreCalculator, ScoreExplanation,
};

// Solving
pub use loadplan_solver::preprocess::{codes, preprocess, PreprocessReport};
pub use loadplan_solver::{
    FnOptimizer, LayoutSolver, NoOpOptimizer, Optimizer, SearchSpace, SolveOutcome,
    SolverError, ValueDomains,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Carrier, ConstructionConfig, FnOptimizer, HardSoftScore, Layout, LayoutConfig,
        LayoutHint, LayoutSolver, NoOpOptimizer, Optimizer, Part, Rotation, Score,
        ScoreCalculator, SearchSpace, Side, SolveOutcome, Surface, Vec3i,
    };
}
