use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An immutable integer 3-tuple used for sizes, positions and origins.
///
/// Division truncates toward zero, matching integer geometry.
///
/// ```
/// use loadplan_core::Vec3i;
///
/// let size = Vec3i::new(5, 7, 3);
/// assert_eq!(size.div(2), Vec3i::new(2, 3, 1));
/// assert_eq!(Vec3i::new(-5, 7, 0).div(2), Vec3i::new(-2, 3, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3i {
    x: i32,
    y: i32,
    z: i32,
}

impl Vec3i {
    pub const ZERO: Vec3i = Vec3i { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Vec3i { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Multiplies every component by `factor`.
    pub const fn scale(&self, factor: i32) -> Self {
        Vec3i::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides every component by `divisor`, truncating toward zero.
    pub const fn div(&self, divisor: i32) -> Self {
        Vec3i::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }

    pub const fn with_z(&self, z: i32) -> Self {
        Vec3i::new(self.x, self.y, z)
    }

    pub const fn swap_xy(&self) -> Self {
        Vec3i::new(self.y, self.x, self.z)
    }

    pub const fn swap_xz(&self) -> Self {
        Vec3i::new(self.z, self.y, self.x)
    }

    pub const fn swap_yz(&self) -> Self {
        Vec3i::new(self.x, self.z, self.y)
    }

    /// Largest of the three components.
    pub fn max_component(&self) -> i32 {
        self.x.max(self.y).max(self.z)
    }

    /// Smallest of the three components.
    pub fn min_component(&self) -> i32 {
        self.x.min(self.y).min(self.z)
    }

    /// Product `x * y`, widened to avoid overflow.
    pub const fn area_xy(&self) -> i64 {
        self.x as i64 * self.y as i64
    }

    /// Product `x * y * z`, widened to avoid overflow.
    pub const fn volume(&self) -> i64 {
        self.x as i64 * self.y as i64 * self.z as i64
    }

    /// True when every component is strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.x > 0 && self.y > 0 && self.z > 0
    }

    /// Manhattan distance over the X and Y axes.
    pub fn manhattan_xy(&self, other: &Vec3i) -> i64 {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs()
    }
}

impl Add for Vec3i {
    type Output = Vec3i;

    fn add(self, other: Vec3i) -> Vec3i {
        Vec3i::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3i {
    type Output = Vec3i;

    fn sub(self, other: Vec3i) -> Vec3i {
        Vec3i::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vec3i {
    type Output = Vec3i;

    fn neg(self) -> Vec3i {
        Vec3i::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for Vec3i {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Vec3i::new(x, y, z)
    }
}

impl fmt::Debug for Vec3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
