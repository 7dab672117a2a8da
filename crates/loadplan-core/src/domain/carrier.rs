use std::collections::{BTreeSet, HashSet};

use crate::error::{LoadPlanError, Result};
use crate::geometry::Vec3i;

/// Identifier of a surface; also the `z` component of part positions.
pub type SurfaceId = i32;

/// A bounded planar placement region (a shelf or deck).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: SurfaceId,
    dimensions: Vec3i,
    origin: Vec3i,
}

impl Surface {
    /// Creates a surface; `dimensions` is (width, depth, height).
    pub fn new(id: SurfaceId, dimensions: Vec3i, origin: Vec3i) -> Result<Self> {
        if !dimensions.is_positive() {
            return Err(LoadPlanError::InvalidGeometry {
                owner: format!("surface {}", id),
                detail: format!("dimensions {} must be positive on every axis", dimensions),
            });
        }
        Ok(Self {
            id,
            dimensions,
            origin,
        })
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn dimensions(&self) -> Vec3i {
        self.dimensions
    }

    pub fn origin(&self) -> Vec3i {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.dimensions.x()
    }

    pub fn depth(&self) -> i32 {
        self.dimensions.y()
    }

    pub fn height(&self) -> i32 {
        self.dimensions.z()
    }

    /// Usable floor area, `width * depth`.
    pub fn area(&self) -> i64 {
        self.dimensions.area_xy()
    }

    pub fn volume(&self) -> i64 {
        self.dimensions.volume()
    }

    fn footprint_intersects(&self, other: &Surface) -> bool {
        let a_end = self.origin + self.dimensions;
        let b_end = other.origin + other.dimensions;
        self.origin.x() < b_end.x()
            && other.origin.x() < a_end.x()
            && self.origin.y() < b_end.y()
            && other.origin.y() < a_end.y()
    }
}

/// The surfaces of one placement job plus capability metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    id: String,
    surfaces: Vec<Surface>,
    capabilities: BTreeSet<String>,
    dimensions: Vec3i,
}

impl Carrier {
    /// Creates a carrier whose overall dimensions are the extent of its
    /// surfaces.
    ///
    /// Fails if there are no surfaces, if two surfaces share an id, or if
    /// two surfaces stacked over the same floor space overlap vertically.
    pub fn new(
        id: impl Into<String>,
        surfaces: Vec<Surface>,
        capabilities: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let id = id.into();
        if surfaces.is_empty() {
            return Err(LoadPlanError::NoSurfaces(id));
        }

        let mut seen = HashSet::new();
        for surface in &surfaces {
            if !seen.insert(surface.id) {
                return Err(LoadPlanError::DuplicateId {
                    kind: "surface",
                    id: surface.id.to_string(),
                });
            }
        }

        let mut stacked: Vec<&Surface> = surfaces.iter().collect();
        stacked.sort_by_key(|s| s.origin.z());
        for (i, lower) in stacked.iter().enumerate() {
            for upper in &stacked[i + 1..] {
                if lower.footprint_intersects(upper)
                    && lower.origin.z() + lower.dimensions.z() > upper.origin.z()
                {
                    return Err(LoadPlanError::OverlappingSurfaces {
                        lower: lower.id,
                        upper: upper.id,
                    });
                }
            }
        }

        let dimensions = surfaces.iter().fold(Vec3i::ZERO, |acc, s| {
            let end = s.origin + s.dimensions;
            Vec3i::new(
                acc.x().max(end.x()),
                acc.y().max(end.y()),
                acc.z().max(end.z()),
            )
        });

        Ok(Self {
            id,
            surfaces,
            capabilities: capabilities.into_iter().collect(),
            dimensions,
        })
    }

    /// Replaces the computed overall dimensions with declared ones.
    pub fn with_dimensions(mut self, dimensions: Vec3i) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id == id)
    }

    /// The first declared surface.
    pub fn first_surface(&self) -> &Surface {
        &self.surfaces[0]
    }

    pub fn capabilities(&self) -> &BTreeSet<String> {
        &self.capabilities
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.contains(name)
    }

    pub fn dimensions(&self) -> Vec3i {
        self.dimensions
    }

    /// Largest width, depth and height over all surfaces, taken per axis.
    pub fn max_extents(&self) -> Vec3i {
        self.surfaces.iter().fold(Vec3i::ZERO, |acc, s| {
            Vec3i::new(
                acc.x().max(s.width()),
                acc.y().max(s.depth()),
                acc.z().max(s.height()),
            )
        })
    }

    /// Largest single dimension of any surface.
    pub fn largest_dimension(&self) -> i32 {
        self.max_extents().max_component()
    }

    pub fn total_area(&self) -> i64 {
        self.surfaces.iter().map(Surface::area).sum()
    }

    pub fn total_volume(&self) -> i64 {
        self.surfaces.iter().map(Surface::volume).sum()
    }

    /// Distinct surface dimensions, in first-seen order.
    pub fn distinct_footprints(&self) -> Vec<Vec3i> {
        let mut footprints: Vec<Vec3i> = Vec::new();
        for surface in &self.surfaces {
            if !footprints.contains(&surface.dimensions) {
                footprints.push(surface.dimensions);
            }
        }
        footprints
    }
}
