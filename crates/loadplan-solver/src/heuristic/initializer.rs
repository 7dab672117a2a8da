//! Initializers that pre-assign decision variables before search.

use loadplan_config::{HintInitializerConfig, RandomInitializerConfig};
use loadplan_core::{Carrier, Layout, Part, Rotation, Vec3i};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Which hint fields [`apply_hint`] copies onto the part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintFields {
    pub rotation: bool,
    pub side: bool,
    pub position: bool,
}

impl HintFields {
    pub const ALL: HintFields = HintFields {
        rotation: true,
        side: true,
        position: true,
    };
}

/// Copies the selected hint fields onto the part's decision variables.
///
/// The position is only set once both side and rotation are assigned,
/// since the corner depends on the oriented size. Hints without a surface
/// id place the part on the carrier's first surface. Returns true if any
/// variable changed.
pub fn apply_hint(part: &mut Part, carrier: &Carrier, fields: HintFields) -> bool {
    let Some(hint) = part.hint().cloned() else {
        return false;
    };
    let mut changed = false;
    if fields.rotation {
        if let Some(rotation) = hint.rotation {
            changed |= part.rotation() != Some(rotation);
            part.set_rotation(Some(rotation));
        }
    }
    if fields.side {
        if let Some(side) = hint.side {
            changed |= part.side_down() != Some(side);
            part.set_side_down(Some(side));
        }
    }
    if fields.position {
        if let (Some(side), Some(rotation)) = (part.side_down(), part.rotation()) {
            let surface = hint
                .surface_id
                .unwrap_or_else(|| carrier.first_surface().id());
            let center = hint.center_position.with_z(surface);
            let corner = part.corner_for_center(center, side, rotation);
            changed |= part.position() != Some(corner);
            part.set_position(Some(corner));
        }
    }
    changed
}

/// Pre-assigns variables from hints, and optionally the preferred side of
/// parts without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintInitializer {
    config: HintInitializerConfig,
}

impl HintInitializer {
    pub fn new(config: HintInitializerConfig) -> Self {
        Self { config }
    }

    /// Returns the number of parts that changed.
    pub fn initialize(&self, layout: &mut Layout) -> usize {
        let fields = HintFields {
            rotation: self.config.assign_rotation,
            side: self.config.assign_side,
            position: self.config.assign_position,
        };
        let (carrier, parts) = layout.split_mut();
        let mut touched = 0;
        for part in parts.iter_mut() {
            if self.config.mandatory_only && !part.has_mandatory_hint() {
                continue;
            }
            let changed = if part.hint().is_some() {
                apply_hint(part, carrier, fields)
            } else if self.config.preferred_side_without_hint && part.side_down().is_none() {
                let preferred = part.preferred_down();
                part.set_side_down(preferred);
                preferred.is_some()
            } else {
                false
            };
            if changed {
                touched += 1;
            }
        }
        touched
    }
}

/// Seeded initializer for parts without a hint.
///
/// Unset rotations become 0°; unset sides become the preferred side, else
/// the minimum-area side, else a random allowed side (as enabled); unset
/// positions are drawn uniformly from the position domain.
#[derive(Debug, Clone)]
pub struct RandomInitializer {
    config: RandomInitializerConfig,
    rng: ChaCha8Rng,
}

impl RandomInitializer {
    pub fn new(config: RandomInitializerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the number of parts that changed.
    pub fn initialize(&mut self, layout: &mut Layout, positions: &[Vec3i]) -> usize {
        let mut touched = 0;
        for part in layout.parts_mut() {
            if part.hint().is_some() {
                continue;
            }
            let mut changed = false;
            if part.rotation().is_none() {
                part.set_rotation(Some(Rotation::Deg0));
                changed = true;
            }
            if part.side_down().is_none() {
                let side = self
                    .config
                    .use_preferred_side
                    .then(|| part.preferred_down())
                    .flatten()
                    .or_else(|| {
                        self.config
                            .use_min_area_side
                            .then(|| part.min_area_side())
                            .flatten()
                    })
                    .or_else(|| part.allowed_down().as_slice().choose(&mut self.rng).copied());
                changed |= side.is_some();
                part.set_side_down(side);
            }
            if part.position().is_none() {
                if let Some(&position) = positions.choose(&mut self.rng) {
                    part.set_position(Some(position));
                    changed = true;
                }
            }
            if changed {
                touched += 1;
            }
        }
        touched
    }
}
