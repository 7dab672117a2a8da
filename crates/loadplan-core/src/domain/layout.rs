use std::collections::HashSet;

use crate::error::{LoadPlanError, Result};
use crate::geometry::{Rotation, Side, Vec3i};

use super::{Carrier, Part, PartId, Surface, SurfaceId};

/// The full placement problem and its current solution.
///
/// A layout owns its carrier and the parts being placed. It carries no
/// cached score: scores are recomputed from the parts on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    carrier: Carrier,
    parts: Vec<Part>,
}

impl Layout {
    /// Creates a layout, rejecting duplicate part ids and hints that name a
    /// surface the carrier does not have.
    pub fn new(carrier: Carrier, parts: Vec<Part>) -> Result<Self> {
        let mut seen = HashSet::new();
        for part in &parts {
            if !seen.insert(part.id()) {
                return Err(LoadPlanError::DuplicateId {
                    kind: "part",
                    id: part.id().to_string(),
                });
            }
            if let Some(surface) = part.hint().and_then(|h| h.surface_id) {
                if carrier.surface(surface).is_none() {
                    return Err(LoadPlanError::UnknownSurface {
                        part: part.part_number().to_string(),
                        surface,
                    });
                }
            }
        }
        Ok(Self { carrier, parts })
    }

    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    pub fn surfaces(&self) -> &[Surface] {
        self.carrier.surfaces()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn parts_mut(&mut self) -> &mut [Part] {
        &mut self.parts
    }

    /// Borrows the carrier and the parts at the same time, so parts can be
    /// updated against the surfaces.
    pub fn split_mut(&mut self) -> (&Carrier, &mut [Part]) {
        (&self.carrier, &mut self.parts)
    }

    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    pub fn part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id() == id)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Surface currently holding the part, looked up by its position's `z`.
    pub fn surface_of(&self, part: &Part) -> Option<&Surface> {
        part.surface_id().and_then(|id| self.carrier.surface(id))
    }

    /// True once every part has all three variables assigned.
    pub fn is_fully_initialized(&self) -> bool {
        self.parts.iter().all(Part::is_fully_initialized)
    }

    /// Unassigns the decision variables of every part.
    pub fn clear_assignments(&mut self) {
        for part in &mut self.parts {
            part.clear_assignment();
        }
    }

    /// Final placements of all fully initialized parts.
    pub fn placements(&self) -> Vec<Placement> {
        self.parts
            .iter()
            .filter_map(|part| {
                Some(Placement {
                    part_id: part.id(),
                    part_number: part.part_number().to_string(),
                    center: part.current_center()?,
                    side: part.side_down()?,
                    rotation: part.rotation()?,
                    surface_id: part.surface_id()?,
                })
            })
            .collect()
    }
}

/// Where a part ended up, as read back by the response layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub part_id: PartId,
    pub part_number: String,
    /// Center position, `corner + oriented size / 2`.
    pub center: Vec3i,
    pub side: Side,
    pub rotation: Rotation,
    pub surface_id: SurfaceId,
}
