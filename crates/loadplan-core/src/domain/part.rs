use crate::error::{LoadPlanError, Result};
use crate::geometry::{orient, rotate_onto_side, Orientation, Region, Rotation, Side, SideSet, Vec3i};

use super::{LayoutHint, Surface};

/// Identifier of a part within a layout.
pub type PartId = i64;

/// How the allowed sides of a part are declared while building it.
///
/// Resolved exactly once, in [`PartBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SideSelection {
    /// Nothing declared: bottom, left and back.
    #[default]
    Default,
    /// An explicit subset, in priority order.
    Explicit(SideSet),
    /// Every side may face down.
    All,
}

impl SideSelection {
    pub fn resolve(self) -> SideSet {
        match self {
            SideSelection::Default => SideSet::default_allowed(),
            SideSelection::Explicit(sides) => sides,
            SideSelection::All => SideSet::all(),
        }
    }
}

/// A rigid cuboid to be placed.
///
/// Identity and size are fixed at creation. `position`, `side_down` and
/// `rotation` are the decision variables; the occupied region, dimensions
/// and areas are computed from them on every call and never stored.
///
/// `position` is the low (left, back, bottom) corner relative to the owning
/// surface, with `z` holding the surface id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    id: PartId,
    part_number: String,
    size: Vec3i,
    allowed_down: SideSet,
    preferred_down: Option<Side>,
    margin: i32,
    hint: Option<LayoutHint>,
    position: Option<Vec3i>,
    side_down: Option<Side>,
    rotation: Option<Rotation>,
}

impl Part {
    /// Starts building a part of the given original size.
    pub fn builder(id: PartId, size: Vec3i) -> PartBuilder {
        PartBuilder::new(id, size)
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    /// Original, unoriented size.
    pub fn size(&self) -> Vec3i {
        self.size
    }

    pub fn allowed_down(&self) -> &SideSet {
        &self.allowed_down
    }

    pub fn preferred_down(&self) -> Option<Side> {
        self.preferred_down
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn hint(&self) -> Option<&LayoutHint> {
        self.hint.as_ref()
    }

    pub fn has_mandatory_hint(&self) -> bool {
        self.hint.as_ref().is_some_and(LayoutHint::is_mandatory)
    }

    /// Side requested by the hint, if any.
    pub fn hint_side(&self) -> Option<Side> {
        self.hint.as_ref().and_then(|h| h.side)
    }

    pub fn position(&self) -> Option<Vec3i> {
        self.position
    }

    pub fn side_down(&self) -> Option<Side> {
        self.side_down
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    pub fn set_position(&mut self, position: Option<Vec3i>) {
        self.position = position;
    }

    pub fn set_side_down(&mut self, side: Option<Side>) {
        self.side_down = side;
    }

    pub fn set_rotation(&mut self, rotation: Option<Rotation>) {
        self.rotation = rotation;
    }

    /// Unassigns all three decision variables.
    pub fn clear_assignment(&mut self) {
        self.position = None;
        self.side_down = None;
        self.rotation = None;
    }

    /// Replaces the allowed sides (used by pruning and side ordering).
    pub fn set_allowed_down(&mut self, sides: SideSet) {
        self.allowed_down = sides;
    }

    pub fn clear_preferred_down(&mut self) {
        self.preferred_down = None;
    }

    /// True once position, side and rotation are all assigned.
    pub fn is_fully_initialized(&self) -> bool {
        self.position.is_some() && self.side_down.is_some() && self.rotation.is_some()
    }

    /// Assigned orientation, if both side and rotation are set.
    pub fn orientation(&self) -> Option<Orientation> {
        Some(Orientation::new(self.side_down?, self.rotation?))
    }

    /// Surface id the part is assigned to.
    pub fn surface_id(&self) -> Option<i32> {
        self.position.map(|p| p.z())
    }

    /// Dimensions occupied under the current orientation.
    ///
    /// Unassigned side or rotation count as bottom and 0°.
    pub fn current_dimensions(&self) -> Vec3i {
        orient(
            self.side_down.unwrap_or(Side::Bottom),
            self.rotation.unwrap_or_default(),
            self.size,
        )
    }

    /// Inclusive region on the owning surface; `None` until positioned.
    pub fn current_region(&self) -> Option<Region> {
        let position = self.position?;
        Some(Region::from_corner(
            position.with_z(0),
            self.current_dimensions(),
        ))
    }

    /// Center of the part (`corner + dimensions / 2`); `None` unless fully
    /// initialized.
    pub fn current_center(&self) -> Option<Vec3i> {
        if !self.is_fully_initialized() {
            return None;
        }
        let position = self.position?;
        Some(position + self.current_dimensions().div(2).with_z(0))
    }

    /// Low corner that centers the part on `center` for a given orientation.
    ///
    /// The division truncates, so odd dimensions put the extra unit on the
    /// high side. `z` is taken from `center` unchanged.
    pub fn corner_for_center(&self, center: Vec3i, side: Side, rotation: Rotation) -> Vec3i {
        center - orient(side, rotation, self.size).div(2).with_z(0)
    }

    /// Orientation-invariant volume.
    pub fn volume(&self) -> i64 {
        self.size.volume()
    }

    /// Footprint area under the current orientation.
    pub fn current_area(&self) -> i64 {
        self.current_dimensions().area_xy()
    }

    /// Footprint area when `side` faces down.
    pub fn area_of(&self, side: Side) -> i64 {
        let s = self.size;
        match side {
            Side::Bottom | Side::Top => s.x() as i64 * s.y() as i64,
            Side::Back | Side::Front => s.x() as i64 * s.z() as i64,
            Side::Left | Side::Right => s.y() as i64 * s.z() as i64,
        }
    }

    /// Height of the part when `side` faces down.
    pub fn height_on(&self, side: Side) -> i32 {
        rotate_onto_side(side, self.size).z()
    }

    pub fn min_area(&self) -> i64 {
        Side::canonical()
            .into_iter()
            .map(|s| self.area_of(s))
            .min()
            .unwrap_or(0)
    }

    pub fn max_area(&self) -> i64 {
        Side::canonical()
            .into_iter()
            .map(|s| self.area_of(s))
            .max()
            .unwrap_or(0)
    }

    /// Smallest footprint among the allowed sides; falls back to
    /// [`min_area`](Self::min_area) when no side is allowed.
    pub fn min_allowed_area(&self) -> i64 {
        self.allowed_down
            .iter()
            .map(|s| self.area_of(s))
            .min()
            .unwrap_or_else(|| self.min_area())
    }

    /// Largest footprint among the allowed sides; falls back to
    /// [`max_area`](Self::max_area) when no side is allowed.
    pub fn max_allowed_area(&self) -> i64 {
        self.allowed_down
            .iter()
            .map(|s| self.area_of(s))
            .max()
            .unwrap_or_else(|| self.max_area())
    }

    /// Allowed sides whose oriented height fits under the surface.
    pub fn allowed_and_possible_sides(&self, surface: &Surface) -> SideSet {
        self.allowed_down
            .iter()
            .filter(|&s| self.height_on(s) <= surface.height())
            .collect()
    }

    /// Allowed side with the smallest footprint.
    ///
    /// Among equal-area candidates the preferred side wins, then the
    /// preferred side's opposite, then the canonical form.
    pub fn min_area_side(&self) -> Option<Side> {
        self.min_area_side_among(&self.allowed_down)
    }

    /// [`min_area_side`](Self::min_area_side) restricted to sides that fit
    /// under the surface's height.
    pub fn min_area_side_on(&self, surface: &Surface) -> Option<Side> {
        self.min_area_side_among(&self.allowed_and_possible_sides(surface))
    }

    /// Tie-break policy shared by both `min_area_side` variants.
    pub fn min_area_side_among(&self, candidates: &SideSet) -> Option<Side> {
        let min_side = candidates.iter().min_by_key(|&s| self.area_of(s))?;
        if self.preferred_down == Some(min_side) {
            Some(min_side)
        } else if self.preferred_down == Some(min_side.opposite()) {
            Some(min_side.opposite())
        } else if candidates.contains(min_side.to_canonical()) {
            Some(min_side.to_canonical())
        } else {
            Some(min_side)
        }
    }
}

/// Builder for [`Part`].
#[derive(Debug, Clone)]
pub struct PartBuilder {
    id: PartId,
    part_number: Option<String>,
    size: Vec3i,
    allowed: SideSelection,
    preferred_down: Option<Side>,
    margin: i32,
    hint: Option<LayoutHint>,
}

impl PartBuilder {
    fn new(id: PartId, size: Vec3i) -> Self {
        Self {
            id,
            part_number: None,
            size,
            allowed: SideSelection::Default,
            preferred_down: None,
            margin: 0,
            hint: None,
        }
    }

    pub fn part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }

    pub fn allowed(mut self, selection: SideSelection) -> Self {
        self.allowed = selection;
        self
    }

    /// Shorthand for an explicit allowed-side list.
    pub fn allowed_sides(self, sides: impl IntoIterator<Item = Side>) -> Self {
        self.allowed(SideSelection::Explicit(sides.into_iter().collect()))
    }

    pub fn preferred(mut self, side: Side) -> Self {
        self.preferred_down = Some(side);
        self
    }

    pub fn margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn hint(mut self, hint: LayoutHint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn build(self) -> Result<Part> {
        let part_number = self.part_number.unwrap_or_else(|| self.id.to_string());
        if !self.size.is_positive() {
            return Err(LoadPlanError::InvalidGeometry {
                owner: format!("part {}", part_number),
                detail: format!("size {} must be positive on every axis", self.size),
            });
        }
        if self.margin < 0 {
            return Err(LoadPlanError::NegativeMargin {
                part: part_number,
                margin: self.margin,
            });
        }
        Ok(Part {
            id: self.id,
            part_number,
            size: self.size,
            allowed_down: self.allowed.resolve(),
            preferred_down: self.preferred_down,
            margin: self.margin,
            hint: self.hint,
            position: None,
            side_down: None,
            rotation: None,
        })
    }
}
