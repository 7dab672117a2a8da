//! Integer geometry for cuboid placement.
//!
//! All arithmetic is exact integer arithmetic. A part's orientation is the
//! pair (side down, in-plane rotation); the orientation maps the part's
//! original size onto the dimensions it occupies on a surface.

mod orientation;
mod region;
mod side;
mod vec3i;

#[cfg(test)]
mod tests;

pub use orientation::{
    could_fit, orient, rotate_onto_side, rotate_zero_or_90_z, unorient, Orientation, Rotation,
};
pub use region::Region;
pub use side::{Side, SideSet};
pub use vec3i::Vec3i;
