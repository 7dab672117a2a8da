//! Orientation filtering.

use loadplan_config::OrientationFilterConfig;
use loadplan_core::{Carrier, Layout, Part, Side, SideSet};
use tracing::debug;

use super::comparator::is_side_possible;

/// Narrows each part's allowed sides before search.
///
/// Sides are kept in strict precedence: the hinted side, then the
/// preferred side, then (with `min_area_only`) the single minimum-area
/// side, else every remaining possible side. `force_min_area` overrides
/// the preferred side: only the hinted and minimum-area sides survive. A
/// side is only dropped when it fits no surface footprint or is superseded
/// under the active flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationFilter {
    config: OrientationFilterConfig,
}

impl OrientationFilter {
    pub fn new(config: OrientationFilterConfig) -> Self {
        Self { config }
    }

    /// Allowed sides that fit at least one distinct surface footprint.
    pub fn possible_sides(part: &Part, carrier: &Carrier) -> SideSet {
        part.allowed_down()
            .iter()
            .filter(|&side| is_side_possible(part, side, carrier))
            .collect()
    }

    /// The sides the filter keeps for `part`.
    ///
    /// Falls back to the normalized allowed set when nothing is possible, so
    /// the part keeps a searchable domain and the score reports it instead.
    pub fn filter(&self, part: &Part, carrier: &Carrier) -> SideSet {
        let possible = Self::possible_sides(part, carrier);
        let pinned = part.hint_side().or(part.preferred_down());
        if possible.is_empty() {
            return part.allowed_down().normalize_preferring(pinned);
        }

        let mut keep = SideSet::new();

        if let Some(hinted) = part.hint_side().filter(|s| possible.contains(*s)) {
            if self.config.singleton_for_mandatory && part.has_mandatory_hint() {
                return [hinted].into_iter().collect();
            }
            self.keep_side(&mut keep, hinted);
        }

        let min_side = part.min_area_side_among(&possible);
        if self.config.force_min_area {
            if let Some(side) = min_side {
                self.keep_side(&mut keep, side);
            }
            return keep.normalize_preferring(pinned);
        }

        if let Some(preferred) = part.preferred_down().filter(|s| possible.contains(*s)) {
            self.keep_side(&mut keep, preferred);
        }
        if self.config.min_area_only {
            if let Some(side) = min_side {
                self.keep_side(&mut keep, side);
            }
        } else {
            for side in possible.iter() {
                self.keep_side(&mut keep, side);
            }
        }

        keep.normalize_preferring(pinned)
    }

    fn keep_side(&self, keep: &mut SideSet, side: Side) {
        if self.config.remove_equivalent_sides && keep.contains(side.opposite()) {
            return;
        }
        keep.insert(side);
    }

    /// Replaces every part's allowed sides with the filtered set.
    ///
    /// Returns the number of sides removed over all parts.
    pub fn apply(&self, layout: &mut Layout) -> usize {
        let (carrier, parts) = layout.split_mut();
        let mut removed = 0;
        for part in parts.iter_mut() {
            let kept = self.filter(part, carrier);
            let before = part.allowed_down().len();
            if before > kept.len() {
                removed += before - kept.len();
                debug!(
                    event = "orientation_filtered",
                    part = part.part_number(),
                    kept = ?kept,
                    dropped = before - kept.len(),
                );
            }
            part.set_allowed_down(kept);
        }
        removed
    }
}
