//! Feasibility checks and pruning run once before search.
//!
//! Steps run in a fixed order and all of them run, so the caller sees every
//! problem at once:
//! 1. Capacity: total part area and volume against the carrier
//! 2. Size: parts longer than any surface dimension
//! 3. Orientation pruning: sides that cannot fit the largest surface extents
//! 4. Hint application: rotation, side and corner copied from hints
//!
//! Any error-severity message makes the request unsolvable.

use loadplan_core::{
    could_fit, rotate_onto_side, Carrier, Layout, Message, Messages, Part, Severity, Side,
};
use tracing::{debug, info, warn};

use crate::heuristic::{apply_hint, HintFields};

/// Stable message codes.
pub mod codes {
    pub const AREA_CAPACITY: &str = "capacity.area";
    pub const VOLUME_CAPACITY: &str = "capacity.volume";
    pub const PART_TOO_LARGE: &str = "part.too_large";
    pub const NO_POSSIBLE_SIDE: &str = "part.no_possible_side";
    pub const PREFERRED_SIDE_CLEARED: &str = "part.preferred_side_cleared";
    pub const HINT_SIDE_DISAGREES: &str = "part.hint_side_disagrees";
}

/// What preprocessing found and changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessReport {
    pub messages: Messages,
    /// False once any error was reported.
    pub solvable: bool,
    /// Sides removed from allowed sets, over all parts.
    pub pruned_sides: usize,
    /// Parts that took at least one variable from their hint.
    pub hinted_parts: usize,
}

/// Compares total part footprint and volume against the carrier.
pub fn check_capacity(layout: &Layout, messages: &mut Messages) {
    let carrier = layout.carrier();
    let area: i64 = layout.parts().iter().map(Part::min_allowed_area).sum();
    let volume: i64 = layout.parts().iter().map(Part::volume).sum();

    if area > carrier.total_area() {
        messages.add_global(Message::error(
            codes::AREA_CAPACITY,
            format!(
                "parts need at least {} area units but the surfaces offer {}",
                area,
                carrier.total_area()
            ),
        ));
    }
    if volume > carrier.total_volume() {
        messages.add_global(Message::error(
            codes::VOLUME_CAPACITY,
            format!(
                "parts occupy {} volume units but the surfaces offer {}",
                volume,
                carrier.total_volume()
            ),
        ));
    }
}

/// Flags every part whose longest edge exceeds the largest surface dimension.
pub fn check_sizes(layout: &Layout, messages: &mut Messages) {
    let limit = layout.carrier().largest_dimension();
    for part in layout.parts() {
        let longest = part.size().max_component();
        if longest > limit {
            messages.add_part(
                part.id(),
                Message::error(
                    codes::PART_TOO_LARGE,
                    format!(
                        "part {} is {} long, the largest surface dimension is {}",
                        part.part_number(),
                        longest,
                        limit
                    ),
                ),
            );
        }
    }
}

/// Removes every opposite pair of sides that cannot fit the largest surface
/// extents in either rotation.
///
/// Idempotent. An impossible preferred side is cleared. Returns the number
/// of sides removed.
pub fn remove_impossible_sides(
    part: &mut Part,
    carrier: &Carrier,
    messages: &mut Messages,
) -> usize {
    let extents = carrier.max_extents();
    let mut allowed = part.allowed_down().clone();
    let before = allowed.len();

    for side in Side::canonical() {
        if !could_fit(extents, rotate_onto_side(side, part.size())) {
            let dropped = allowed.remove(side) | allowed.remove(side.opposite());
            if dropped {
                debug!(
                    event = "side_pruned",
                    part = part.part_number(),
                    side = side.name(),
                );
            }
        }
    }
    let removed = before - allowed.len();
    part.set_allowed_down(allowed);

    let declared_preferred = part.preferred_down();
    if let Some(preferred) = declared_preferred {
        if !part.allowed_down().contains(preferred) {
            part.clear_preferred_down();
            warn!(
                event = "preferred_side_cleared",
                part = part.part_number(),
                side = preferred.name(),
            );
            messages.add_part(
                part.id(),
                Message::warning(
                    codes::PREFERRED_SIDE_CLEARED,
                    format!(
                        "preferred side {} of part {} cannot fit any surface",
                        preferred.name(),
                        part.part_number()
                    ),
                ),
            );
        }
    }

    if let (Some(hinted), Some(_)) = (part.hint_side(), declared_preferred) {
        if part.preferred_down() != Some(hinted) {
            warn!(
                event = "hint_side_disagrees",
                part = part.part_number(),
                hint_side = hinted.name(),
            );
            messages.add_part(
                part.id(),
                Message::warning(
                    codes::HINT_SIDE_DISAGREES,
                    format!(
                        "hint of part {} puts side {} down, which is not its preferred side",
                        part.part_number(),
                        hinted.name()
                    ),
                ),
            );
        }
    }

    if part.allowed_down().is_empty() {
        messages.add_part(
            part.id(),
            Message::error(
                codes::NO_POSSIBLE_SIDE,
                format!("part {} fits no surface on any side", part.part_number()),
            ),
        );
    }
    removed
}

/// Runs [`remove_impossible_sides`] on every part.
pub fn prune_sides(layout: &mut Layout, messages: &mut Messages) -> usize {
    let (carrier, parts) = layout.split_mut();
    parts
        .iter_mut()
        .map(|part| remove_impossible_sides(part, carrier, messages))
        .sum()
}

/// Copies rotation, side and position from every hint onto its part.
pub fn apply_hints(layout: &mut Layout) -> usize {
    let (carrier, parts) = layout.split_mut();
    parts
        .iter_mut()
        .map(|part| apply_hint(part, carrier, HintFields::ALL))
        .filter(|&changed| changed)
        .count()
}

/// Runs all preprocessing steps in order.
pub fn preprocess(layout: &mut Layout) -> PreprocessReport {
    let mut messages = Messages::new();

    check_capacity(layout, &mut messages);
    check_sizes(layout, &mut messages);
    let pruned_sides = prune_sides(layout, &mut messages);
    let hinted_parts = apply_hints(layout);

    let solvable = !messages.has_errors();
    info!(
        event = "preprocess_end",
        parts = layout.part_count(),
        pruned_sides,
        hinted_parts,
        errors = messages.count(Severity::Error),
        warnings = messages.count(Severity::Warning),
        solvable,
    );

    PreprocessReport {
        messages,
        solvable,
        pruned_sides,
        hinted_parts,
    }
}
