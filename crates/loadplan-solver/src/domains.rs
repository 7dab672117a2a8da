//! Decision-variable value domains handed to the optimizer.

use std::collections::BTreeMap;

use loadplan_core::{Carrier, Layout, Part, PartId, Rotation, SideSet, Surface, Vec3i};

/// Generates the candidate values of each decision variable.
///
/// The step size is the position resolution: positions are generated every
/// `step` units on each axis. Changing it never touches a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDomains {
    step: u32,
}

impl Default for ValueDomains {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl ValueDomains {
    /// A step of zero is treated as one.
    pub fn new(step: u32) -> Self {
        Self { step: step.max(1) }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Corner positions on one surface; `z` holds the surface id.
    pub fn positions_on(&self, surface: &Surface) -> impl Iterator<Item = Vec3i> + '_ {
        let step = self.step as usize;
        let id = surface.id();
        let width = surface.width();
        (0..surface.depth())
            .step_by(step)
            .flat_map(move |y| (0..width).step_by(step).map(move |x| Vec3i::new(x, y, id)))
    }

    /// Corner positions over every surface of the carrier, surface by surface.
    pub fn positions(&self, carrier: &Carrier) -> Vec<Vec3i> {
        carrier
            .surfaces()
            .iter()
            .flat_map(|s| self.positions_on(s))
            .collect()
    }

    /// Size of the position domain without materializing it.
    pub fn position_count(&self, carrier: &Carrier) -> usize {
        let step = self.step as usize;
        carrier
            .surfaces()
            .iter()
            .map(|s| (s.width() as usize).div_ceil(step) * (s.depth() as usize).div_ceil(step))
            .sum()
    }

    pub fn rotations(&self) -> [Rotation; 2] {
        Rotation::ALL
    }

    /// Redundancy-reduced side domain of a part.
    ///
    /// When both sides of a pair are allowed, the hinted or preferred side
    /// represents the pair; otherwise the canonical side does.
    pub fn sides(&self, part: &Part) -> SideSet {
        let pinned = part.hint_side().or(part.preferred_down());
        part.allowed_down().normalize_preferring(pinned)
    }

    /// Materializes every domain for a layout.
    pub fn search_space(&self, layout: &Layout, part_order: Vec<PartId>) -> SearchSpace {
        SearchSpace {
            positions: self.positions(layout.carrier()),
            rotations: self.rotations(),
            sides: layout
                .parts()
                .iter()
                .map(|p| (p.id(), self.sides(p)))
                .collect(),
            part_order,
        }
    }
}

/// The complete search space of one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpace {
    pub positions: Vec<Vec3i>,
    pub rotations: [Rotation; 2],
    pub sides: BTreeMap<PartId, SideSet>,
    /// Order in which parts should be considered.
    pub part_order: Vec<PartId>,
}

impl SearchSpace {
    pub fn sides_of(&self, part: PartId) -> Option<&SideSet> {
        self.sides.get(&part)
    }
}
