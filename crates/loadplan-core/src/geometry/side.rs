use std::fmt;

use smallvec::SmallVec;

/// One of the six faces of a cuboid.
///
/// The side "down" is the face resting on the surface. Opposite faces yield
/// identical footprints, so `left`, `back` and `bottom` are designated as the
/// canonical representatives of their pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
    Back,
    Front,
    Bottom,
    Top,
}

impl Side {
    /// All sides in declaration order.
    pub const ALL: [Side; 6] = [
        Side::Left,
        Side::Right,
        Side::Back,
        Side::Front,
        Side::Bottom,
        Side::Top,
    ];

    /// The canonical representative of each opposite pair.
    pub const fn canonical() -> [Side; 3] {
        [Side::Left, Side::Back, Side::Bottom]
    }

    /// Returns the mirrored face.
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Back => Side::Front,
            Side::Front => Side::Back,
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
        }
    }

    pub const fn is_canonical(self) -> bool {
        matches!(self, Side::Left | Side::Back | Side::Bottom)
    }

    /// Maps a side to the canonical representative of its pair.
    pub const fn to_canonical(self) -> Side {
        if self.is_canonical() {
            self
        } else {
            self.opposite()
        }
    }

    /// Lowercase name, as used in requests and messages.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Back => "back",
            Side::Front => "front",
            Side::Bottom => "bottom",
            Side::Top => "top",
        }
    }

    /// Collapses every side present together with its opposite into the
    /// canonical one.
    pub fn normalize(sides: &SideSet) -> SideSet {
        sides.normalize()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A small, insertion-ordered set of sides.
///
/// Membership gives set semantics (equality ignores order); the order of
/// the members expresses search priority and is preserved by every
/// operation except explicit sorting.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Side>", into = "Vec<Side>"))]
pub struct SideSet {
    sides: SmallVec<[Side; 6]>,
}

impl SideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All six sides.
    pub fn all() -> Self {
        Side::ALL.into_iter().collect()
    }

    /// The allowed sides of a part that declares none: bottom, left, back.
    pub fn default_allowed() -> Self {
        [Side::Bottom, Side::Left, Side::Back].into_iter().collect()
    }

    pub fn contains(&self, side: Side) -> bool {
        self.sides.contains(&side)
    }

    /// Adds a side at the end; returns false if it was already present.
    pub fn insert(&mut self, side: Side) -> bool {
        if self.contains(side) {
            return false;
        }
        self.sides.push(side);
        true
    }

    /// Removes a side; returns true if it was present.
    pub fn remove(&mut self, side: Side) -> bool {
        match self.sides.iter().position(|&s| s == side) {
            Some(idx) => {
                self.sides.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&Side) -> bool) {
        self.sides.retain(|side| keep(side));
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn first(&self) -> Option<Side> {
        self.sides.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        self.sides.iter().copied()
    }

    pub fn as_slice(&self) -> &[Side] {
        &self.sides
    }

    /// Stable sort of the members by a priority key.
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&Side) -> K) {
        self.sides.sort_by_key(key);
    }

    /// Symmetry reduction: a side present together with its opposite is
    /// replaced by the canonical side of the pair.
    ///
    /// ```
    /// use loadplan_core::{Side, SideSet};
    ///
    /// let sides: SideSet = [Side::Top, Side::Bottom, Side::Right].into_iter().collect();
    /// let expected: SideSet = [Side::Bottom, Side::Right].into_iter().collect();
    /// assert_eq!(sides.normalize(), expected);
    /// ```
    pub fn normalize(&self) -> SideSet {
        self.normalize_preferring(None)
    }

    /// Like [`normalize`](Self::normalize), but when `pinned` and its
    /// opposite are both present, `pinned` represents the pair instead of
    /// the canonical side.
    pub fn normalize_preferring(&self, pinned: Option<Side>) -> SideSet {
        let mut out = SideSet::new();
        for side in self.iter() {
            let representative = if self.contains(side.opposite()) {
                match pinned {
                    Some(p) if p == side || p == side.opposite() => p,
                    _ => side.to_canonical(),
                }
            } else {
                side
            };
            out.insert(representative);
        }
        out
    }

    /// Number of members left after symmetry reduction.
    pub fn distinct_count(&self) -> usize {
        self.normalize().len()
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut set = SideSet::new();
        for side in iter {
            set.insert(side);
        }
        set
    }
}

impl From<Vec<Side>> for SideSet {
    fn from(sides: Vec<Side>) -> Self {
        sides.into_iter().collect()
    }
}

impl From<SideSet> for Vec<Side> {
    fn from(set: SideSet) -> Self {
        set.sides.into_vec()
    }
}

impl PartialEq for SideSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|s| other.contains(s))
    }
}

impl Eq for SideSet {}

impl fmt::Debug for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sides.iter()).finish()
    }
}
