use loadplan_core::{Layout, Part, Side};

/// Search priority of a side: the hinted side first, then the preferred
/// side, then by footprint area.
pub fn side_priority(part: &Part, side: Side) -> i64 {
    if part.hint_side() == Some(side) {
        -1
    } else if part.preferred_down() == Some(side) {
        0
    } else {
        part.area_of(side)
    }
}

/// Reorders each part's allowed sides by [`side_priority`] without removing
/// any of them.
pub fn order_sides(layout: &mut Layout) {
    for part in layout.parts_mut() {
        let mut sides = part.allowed_down().clone();
        sides.sort_by_key(|&side| side_priority(part, side));
        part.set_allowed_down(sides);
    }
}
