use crate::error::{LoadPlanError, Result};
use crate::geometry::{Rotation, Side, Vec3i};

use super::SurfaceId;

/// Importance of a placement hint, in `1..=10`.
///
/// Weight 10 makes the hint mandatory: the part must end up exactly on the
/// hinted center, surface, side and rotation. Lower weights are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct HintWeight(u8);

impl HintWeight {
    pub const MANDATORY: HintWeight = HintWeight(10);

    /// Validates a raw weight.
    pub fn new(part: &str, weight: i32) -> Result<Self> {
        if (1..=10).contains(&weight) {
            Ok(HintWeight(weight as u8))
        } else {
            Err(LoadPlanError::InvalidHintWeight {
                part: part.to_string(),
                weight,
            })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_mandatory(self) -> bool {
        self.0 == 10
    }
}

impl TryFrom<i32> for HintWeight {
    type Error = LoadPlanError;

    fn try_from(weight: i32) -> Result<Self> {
        HintWeight::new("<unnamed>", weight)
    }
}

impl From<HintWeight> for i32 {
    fn from(weight: HintWeight) -> i32 {
        weight.0 as i32
    }
}

/// A caller-supplied target placement for a part.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutHint {
    /// Target center of the part; `z` is ignored.
    pub center_position: Vec3i,
    pub rotation: Option<Rotation>,
    pub weight: HintWeight,
    pub side: Option<Side>,
    pub surface_id: Option<SurfaceId>,
}

impl LayoutHint {
    /// A hint that must be matched exactly.
    pub fn mandatory(center_position: Vec3i) -> Self {
        Self {
            center_position,
            rotation: None,
            weight: HintWeight::MANDATORY,
            side: None,
            surface_id: None,
        }
    }

    /// A hint with the given (already validated) weight.
    pub fn weighted(center_position: Vec3i, weight: HintWeight) -> Self {
        Self {
            weight,
            ..Self::mandatory(center_position)
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn on_surface(mut self, surface_id: SurfaceId) -> Self {
        self.surface_id = Some(surface_id);
        self
    }

    pub fn is_mandatory(&self) -> bool {
        self.weight.is_mandatory()
    }
}
