//! loadplan Solver - preprocessing, heuristics and the solve pipeline
//!
//! This crate prepares a [`Layout`](loadplan_core::Layout) for search and
//! hands it to an external optimizer:
//! - Preprocessing: capacity and size checks, orientation pruning, hints
//! - Heuristics: part orderings, orientation filter, side ordering,
//!   initializers and shelf-packing construction
//! - Value domains: the candidate values of every decision variable
//! - [`LayoutSolver`]: runs everything in order and scores the result

pub mod domains;
pub mod error;
pub mod heuristic;
pub mod optimizer;
pub mod preprocess;
pub mod solver;

pub use domains::{SearchSpace, ValueDomains};
pub use error::SolverError;
pub use heuristic::{HintInitializer, OrientationFilter, RandomInitializer, ShelfConstruction};
pub use optimizer::{FnOptimizer, NoOpOptimizer, Optimizer};
pub use preprocess::{preprocess, PreprocessReport};
pub use solver::{LayoutSolver, SolveOutcome};
