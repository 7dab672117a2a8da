//! Part fixtures.

use loadplan_core::{Part, PartId, Rotation, Side, Vec3i};

/// Shorthand for `Vec3i::new`.
pub fn v(x: i32, y: i32, z: i32) -> Vec3i {
    Vec3i::new(x, y, z)
}

/// An unassigned part with the default allowed sides.
pub fn part(id: PartId, size: (i32, i32, i32)) -> Part {
    Part::builder(id, size.into())
        .build()
        .expect("valid part fixture")
}

/// An unassigned part with an explicit allowed-side list.
pub fn part_with_sides(id: PartId, size: (i32, i32, i32), sides: &[Side]) -> Part {
    Part::builder(id, size.into())
        .allowed_sides(sides.iter().copied())
        .build()
        .expect("valid part fixture")
}

/// Assigns all three decision variables. `corner.2` is the surface id.
pub fn place(part: &mut Part, corner: (i32, i32, i32), side: Side, rotation: Rotation) {
    part.set_side_down(Some(side));
    part.set_rotation(Some(rotation));
    part.set_position(Some(corner.into()));
}

/// A fully initialized part allowed on every side.
pub fn placed_part(
    id: PartId,
    size: (i32, i32, i32),
    corner: (i32, i32, i32),
    side: Side,
    rotation: Rotation,
) -> Part {
    let mut part = Part::builder(id, size.into())
        .allowed_sides(Side::ALL)
        .build()
        .expect("valid part fixture");
    place(&mut part, corner, side, rotation);
    part
}
