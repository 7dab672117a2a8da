//! Raw request records and their normalization into the domain model.
//!
//! These mirror what an outer JSON layer hands over. With the `serde`
//! feature enabled they deserialize directly; [`Layout::from_request`]
//! validates them and builds the model.

use crate::error::Result;
use crate::geometry::{Rotation, Side, Vec3i};

use super::{Carrier, HintWeight, Layout, LayoutHint, Part, PartId, SideSelection, Surface, SurfaceId};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintRequest {
    pub center_position: Vec3i,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Option<i32>,
    pub weight: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub side: Option<Side>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub surface_id: Option<SurfaceId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartRequest {
    pub id: PartId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub part_number: Option<String>,
    pub size: Vec3i,
    /// Explicit allowed sides; absent means bottom, left and back.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_down: Option<Vec<Side>>,
    /// Allows every side, overriding `allowed_down`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_all_sides: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_down: Option<Side>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub margin: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hint: Option<HintRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceRequest {
    pub id: SurfaceId,
    pub dimensions: Vec3i,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: Vec3i,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierRequest {
    pub id: String,
    pub surfaces: Vec<SurfaceRequest>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capabilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dimensions: Option<Vec3i>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRequest {
    pub carrier: CarrierRequest,
    pub parts: Vec<PartRequest>,
}

impl HintRequest {
    fn to_hint(&self, part: &str) -> Result<LayoutHint> {
        let weight = HintWeight::new(part, self.weight)?;
        Ok(LayoutHint {
            center_position: self.center_position,
            rotation: self.rotation.map(Rotation::from_degrees),
            weight,
            side: self.side,
            surface_id: self.surface_id,
        })
    }
}

impl PartRequest {
    pub fn to_part(&self) -> Result<Part> {
        let selection = if self.allow_all_sides {
            SideSelection::All
        } else {
            match &self.allowed_down {
                Some(sides) => SideSelection::Explicit(sides.iter().copied().collect()),
                None => SideSelection::Default,
            }
        };
        let part_number = self
            .part_number
            .clone()
            .unwrap_or_else(|| self.id.to_string());

        let mut builder = Part::builder(self.id, self.size)
            .part_number(part_number.clone())
            .allowed(selection)
            .margin(self.margin);
        if let Some(side) = self.preferred_down {
            builder = builder.preferred(side);
        }
        if let Some(hint) = &self.hint {
            builder = builder.hint(hint.to_hint(&part_number)?);
        }
        builder.build()
    }
}

impl CarrierRequest {
    pub fn to_carrier(&self) -> Result<Carrier> {
        let surfaces = self
            .surfaces
            .iter()
            .map(|s| Surface::new(s.id, s.dimensions, s.origin))
            .collect::<Result<Vec<_>>>()?;
        let carrier = Carrier::new(self.id.clone(), surfaces, self.capabilities.clone())?;
        Ok(match self.dimensions {
            Some(dimensions) => carrier.with_dimensions(dimensions),
            None => carrier,
        })
    }
}

impl Layout {
    /// Builds and validates a layout from raw request records.
    pub fn from_request(request: &LayoutRequest) -> Result<Layout> {
        let carrier = request.carrier.to_carrier()?;
        let parts = request
            .parts
            .iter()
            .map(PartRequest::to_part)
            .collect::<Result<Vec<_>>>()?;
        Layout::new(carrier, parts)
    }
}
