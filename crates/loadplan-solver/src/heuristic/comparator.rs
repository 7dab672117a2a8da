//! Part ordering strategies.
//!
//! All comparators sort ascending; "harder first" orderings are expressed
//! by the key itself (e.g. descending flexibility).

use std::cmp::{Ordering, Reverse};

use loadplan_config::PartOrdering;
use loadplan_core::{could_fit, rotate_onto_side, Carrier, Part, PartId, Side};

/// Most flexible parts first (more distinct allowed sides), then smallest
/// minimum allowed area.
pub fn by_allowed_sides(a: &Part, b: &Part) -> Ordering {
    Reverse(a.allowed_down().distinct_count())
        .cmp(&Reverse(b.allowed_down().distinct_count()))
        .then_with(|| a.min_allowed_area().cmp(&b.min_allowed_area()))
}

pub fn by_min_area(a: &Part, b: &Part) -> Ordering {
    a.min_allowed_area().cmp(&b.min_allowed_area())
}

pub fn by_volume(a: &Part, b: &Part) -> Ordering {
    a.volume().cmp(&b.volume())
}

/// Footprint of the unrotated part resting on its bottom.
pub fn default_area(part: &Part) -> i64 {
    part.size().area_xy()
}

pub fn by_default_area(a: &Part, b: &Part) -> Ordering {
    default_area(a).cmp(&default_area(b))
}

fn hinted_or_min_area(part: &Part) -> i64 {
    match part.hint_side() {
        Some(side) => part.area_of(side),
        None => part.min_allowed_area(),
    }
}

/// Area of the hinted side when the hint names one, else minimum allowed
/// area.
pub fn by_hint_then_min(a: &Part, b: &Part) -> Ordering {
    hinted_or_min_area(a).cmp(&hinted_or_min_area(b))
}

/// True if `side` down fits some surface footprint in some rotation.
pub fn is_side_possible(part: &Part, side: Side, carrier: &Carrier) -> bool {
    let oriented = rotate_onto_side(side, part.size());
    carrier
        .distinct_footprints()
        .into_iter()
        .any(|footprint| could_fit(footprint, oriented))
}

/// Entity-selection weight; larger means harder, considered first.
///
/// The area of the hinted side if it is possible, else of the preferred
/// side if possible, else the smallest area over the possible sides. A part
/// with no possible side at all weighs its overall minimum area.
pub fn difficulty_weight(part: &Part, carrier: &Carrier) -> i64 {
    let possible = |side: &Side| is_side_possible(part, *side, carrier);
    if let Some(side) = part.hint_side().filter(possible) {
        return part.area_of(side);
    }
    if let Some(side) = part.preferred_down().filter(possible) {
        return part.area_of(side);
    }
    Side::ALL
        .into_iter()
        .filter(possible)
        .map(|s| part.area_of(s))
        .min()
        .unwrap_or_else(|| part.min_area())
}

/// Sorts parts in place by the configured ordering. The sort is stable.
pub fn sort_parts(parts: &mut [&Part], ordering: PartOrdering, carrier: &Carrier) {
    match ordering {
        PartOrdering::AllowedSides => parts.sort_by(|a, b| by_allowed_sides(a, b)),
        PartOrdering::MinArea => parts.sort_by(|a, b| by_min_area(a, b)),
        PartOrdering::Volume => parts.sort_by(|a, b| by_volume(a, b)),
        PartOrdering::DefaultArea => parts.sort_by(|a, b| by_default_area(a, b)),
        PartOrdering::HintThenMin => parts.sort_by(|a, b| by_hint_then_min(a, b)),
        PartOrdering::Difficulty => {
            parts.sort_by_cached_key(|p| Reverse(difficulty_weight(p, carrier)))
        }
    }
}

/// Part ids in the configured order.
pub fn part_order(parts: &[Part], ordering: PartOrdering, carrier: &Carrier) -> Vec<PartId> {
    let mut refs: Vec<&Part> = parts.iter().collect();
    sort_parts(&mut refs, ordering, carrier);
    refs.into_iter().map(Part::id).collect()
}
