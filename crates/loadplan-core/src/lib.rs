//! loadplan Core - Geometry, scores and the placement domain model
//!
//! This crate provides the fundamental abstractions for loadplan:
//! - Integer geometry and cuboid orientation (`Vec3i`, `Side`, `Rotation`)
//! - Score types for representing layout quality
//! - The placement domain (parts, surfaces, carriers, layouts)
//! - Structured messages and the structural error type

pub mod constraint;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod score;

pub use constraint::ConstraintRef;
pub use domain::{
    Carrier, HintWeight, Layout, LayoutHint, Message, Messages, Part, PartBuilder, PartId,
    Placement, Severity, SideSelection, Surface, SurfaceId,
};
pub use error::{LoadPlanError, Result};
pub use geometry::{
    could_fit, orient, rotate_onto_side, rotate_zero_or_90_z, unorient, Orientation, Region,
    Rotation, Side, SideSet, Vec3i,
};
pub use score::{HardSoftScore, Score, ScoreLevel, ScoreParseError};
