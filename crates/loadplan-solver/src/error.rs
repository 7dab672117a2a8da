use loadplan_config::ConfigError;
use loadplan_core::LoadPlanError;
use thiserror::Error;

/// Errors that stop a solve before the layout is searched.
///
/// Declared-unsolvable requests are not errors: they come back as a
/// [`SolveOutcome`](crate::SolveOutcome) without a layout.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error(transparent)]
    Model(#[from] LoadPlanError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
