use std::fmt;

use super::{Side, Vec3i};

/// In-plane rotation about the Z axis.
///
/// Only the two states 0° and 90° are modelled; 180° and 270° produce the
/// same footprints and are folded into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub const ALL: [Rotation; 2] = [Rotation::Deg0, Rotation::Deg90];

    /// Builds a rotation from degrees. Anything other than 90 is clamped to 0.
    ///
    /// ```
    /// use loadplan_core::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(90), Rotation::Deg90);
    /// assert_eq!(Rotation::from_degrees(180), Rotation::Deg0);
    /// ```
    pub const fn from_degrees(degrees: i32) -> Rotation {
        match degrees {
            90 => Rotation::Deg90,
            _ => Rotation::Deg0,
        }
    }

    pub const fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    /// The other in-plane state.
    pub const fn turned(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg0,
        }
    }
}

impl From<i32> for Rotation {
    fn from(degrees: i32) -> Self {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Maps a size onto the dimensions it occupies when `side` faces down.
///
/// bottom/top keep the size; left/right swap x and z; back/front swap y and z.
pub const fn rotate_onto_side(side: Side, size: Vec3i) -> Vec3i {
    match side {
        Side::Bottom | Side::Top => size,
        Side::Left | Side::Right => size.swap_xz(),
        Side::Back | Side::Front => size.swap_yz(),
    }
}

/// Applies the in-plane rotation: 90° swaps x and y.
pub const fn rotate_zero_or_90_z(rotation: Rotation, size: Vec3i) -> Vec3i {
    match rotation {
        Rotation::Deg0 => size,
        Rotation::Deg90 => size.swap_xy(),
    }
}

/// Oriented dimensions of `size`: side mapping first, then the in-plane turn.
pub const fn orient(side: Side, rotation: Rotation, size: Vec3i) -> Vec3i {
    rotate_zero_or_90_z(rotation, rotate_onto_side(side, size))
}

/// Inverse of [`orient`]: recovers the original size from oriented dimensions.
///
/// Both mappings are axis swaps and therefore involutions, so the inverse
/// applies them in reverse order.
pub const fn unorient(side: Side, rotation: Rotation, oriented: Vec3i) -> Vec3i {
    rotate_onto_side(side, rotate_zero_or_90_z(rotation, oriented))
}

/// True if `size` fits within `bound` in some in-plane rotation.
///
/// ```
/// use loadplan_core::{could_fit, Vec3i};
///
/// let shelf = Vec3i::new(10, 4, 3);
/// assert!(could_fit(shelf, Vec3i::new(4, 10, 3)));
/// assert!(!could_fit(shelf, Vec3i::new(4, 10, 4)));
/// ```
pub fn could_fit(bound: Vec3i, size: Vec3i) -> bool {
    if size.z() > bound.z() {
        return false;
    }
    let straight = size.x() <= bound.x() && size.y() <= bound.y();
    let turned = size.y() <= bound.x() && size.x() <= bound.y();
    straight || turned
}

/// A concrete orientation: which side faces down plus the in-plane turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub side: Side,
    pub rotation: Rotation,
}

impl Orientation {
    pub const fn new(side: Side, rotation: Rotation) -> Self {
        Self { side, rotation }
    }

    /// All twelve (side, rotation) combinations.
    pub fn all() -> impl Iterator<Item = Orientation> {
        Side::ALL
            .into_iter()
            .flat_map(|side| Rotation::ALL.into_iter().map(move |r| Orientation::new(side, r)))
    }

    pub const fn apply(&self, size: Vec3i) -> Vec3i {
        orient(self.side, self.rotation, size)
    }

    pub const fn invert(&self, oriented: Vec3i) -> Vec3i {
        unorient(self.side, self.rotation, oriented)
    }
}
