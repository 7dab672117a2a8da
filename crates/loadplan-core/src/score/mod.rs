//! Score types for representing layout quality
//!
//! A layout is scored on two levels: hard constraint violations decide
//! feasibility, soft penalties rank feasible layouts against each other.

mod hard_soft;
mod level;
mod traits;


pub use hard_soft::{HardSoftScore, ScoreParseError};
pub use level::ScoreLevel;
pub use traits::Score;
