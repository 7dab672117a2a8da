//! Error types for loadplan

use thiserror::Error;

/// Structural error raised while building the placement model.
///
/// These abort before any preprocessing or search takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadPlanError {
    /// A size or dimension was zero or negative.
    #[error("Invalid geometry for {owner}: {detail}")]
    InvalidGeometry { owner: String, detail: String },

    /// A carrier was declared without any surface.
    #[error("Carrier {0} has no surfaces")]
    NoSurfaces(String),

    /// Two surfaces of the same carrier share vertical space.
    #[error("Surfaces {lower} and {upper} overlap vertically")]
    OverlappingSurfaces { lower: i32, upper: i32 },

    /// Two entities were declared with the same identifier.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A hint weight outside of `1..=10`.
    #[error("Hint weight {weight} of part {part} is outside 1..=10")]
    InvalidHintWeight { part: String, weight: i32 },

    /// A negative part margin.
    #[error("Margin {margin} of part {part} is negative")]
    NegativeMargin { part: String, margin: i32 },

    /// A reference to a surface that the carrier does not declare.
    #[error("Part {part} references unknown surface {surface}")]
    UnknownSurface { part: String, surface: i32 },
}

/// Result type alias for loadplan model construction
pub type Result<T> = std::result::Result<T, LoadPlanError>;
