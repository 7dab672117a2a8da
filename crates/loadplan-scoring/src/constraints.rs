//! The layout constraints.
//!
//! Each constraint walks the layout and reports every match to a sink as
//! the parts involved plus a non-negative penalty. Counting, breakdowns
//! and explanations are all built on the same walk, so they can never
//! disagree.

use loadplan_core::{Carrier, ConstraintRef, HardSoftScore, Layout, Part, Region, SurfaceId};

/// Package name shared by all layout constraint references.
pub const PACKAGE: &str = "loadplan";

/// One term of the layout objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutConstraint {
    /// Two parts on the same surface whose margin-expanded footprints meet.
    Overlap,
    /// A part reaching past its surface, or on a surface that does not exist.
    OutsideSurface,
    /// A part resting on a side it is not allowed to rest on.
    DisallowedSide,
    /// A part with a mandatory hint that is not exactly where it asks to be.
    MandatoryHintMismatch,
    /// A part not resting on its preferred side.
    NotPreferredSide,
    /// Distance between a mandatory-hinted part and its target center.
    MandatoryHintDistance,
}

impl LayoutConstraint {
    /// Hard constraints first, in evaluation order.
    pub const ALL: [LayoutConstraint; 6] = [
        LayoutConstraint::Overlap,
        LayoutConstraint::OutsideSurface,
        LayoutConstraint::DisallowedSide,
        LayoutConstraint::MandatoryHintMismatch,
        LayoutConstraint::NotPreferredSide,
        LayoutConstraint::MandatoryHintDistance,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LayoutConstraint::Overlap => "Overlap",
            LayoutConstraint::OutsideSurface => "OutsideSurface",
            LayoutConstraint::DisallowedSide => "DisallowedSide",
            LayoutConstraint::MandatoryHintMismatch => "MandatoryHintMismatch",
            LayoutConstraint::NotPreferredSide => "NotPreferredSide",
            LayoutConstraint::MandatoryHintDistance => "MandatoryHintDistance",
        }
    }

    pub const fn is_hard(self) -> bool {
        matches!(
            self,
            LayoutConstraint::Overlap
                | LayoutConstraint::OutsideSurface
                | LayoutConstraint::DisallowedSide
                | LayoutConstraint::MandatoryHintMismatch
        )
    }

    pub fn constraint_ref(self) -> ConstraintRef {
        if self.is_hard() {
            ConstraintRef::hard(PACKAGE, self.name())
        } else {
            ConstraintRef::soft(PACKAGE, self.name())
        }
    }

    /// Score of a single unit of penalty.
    pub const fn weight(self) -> HardSoftScore {
        if self.is_hard() {
            HardSoftScore::ONE_HARD
        } else {
            HardSoftScore::ONE_SOFT
        }
    }

    /// Score impact of a penalty of `amount` units.
    pub const fn penalty(self, amount: i64) -> HardSoftScore {
        if self.is_hard() {
            HardSoftScore::of_hard(-amount)
        } else {
            HardSoftScore::of_soft(-amount)
        }
    }

    /// Reports every match of this constraint in `layout` to `sink`.
    pub fn evaluate<F>(self, layout: &Layout, sink: &mut F)
    where
        F: FnMut(&[&Part], i64),
    {
        let carrier = layout.carrier();
        let parts = layout.parts();
        match self {
            LayoutConstraint::Overlap => each_overlap(parts, sink),
            LayoutConstraint::OutsideSurface => {
                for part in parts.iter().filter(|p| is_outside(p, carrier)) {
                    sink(&[part], 1);
                }
            }
            LayoutConstraint::DisallowedSide => {
                for part in parts.iter().filter(|p| has_disallowed_side(p)) {
                    sink(&[part], 1);
                }
            }
            LayoutConstraint::MandatoryHintMismatch => {
                for part in parts.iter().filter(|p| misses_mandatory_hint(p, carrier)) {
                    sink(&[part], 1);
                }
            }
            LayoutConstraint::NotPreferredSide => {
                for part in parts.iter().filter(|p| is_not_preferred(p)) {
                    sink(&[part], 1);
                }
            }
            LayoutConstraint::MandatoryHintDistance => {
                for part in parts {
                    if let Some(distance) = mandatory_distance(part) {
                        if distance > 0 {
                            sink(&[part], distance);
                        }
                    }
                }
            }
        }
    }

    /// Total penalty of this constraint in `layout`.
    pub fn total(self, layout: &Layout) -> i64 {
        let mut total = 0;
        self.evaluate(layout, &mut |_, amount| total += amount);
        total
    }
}

fn each_overlap<F>(parts: &[Part], sink: &mut F)
where
    F: FnMut(&[&Part], i64),
{
    let placed: Vec<(&Part, Region, SurfaceId)> = parts
        .iter()
        .filter(|p| p.is_fully_initialized())
        .filter_map(|p| Some((p, p.current_region()?, p.surface_id()?)))
        .collect();

    for (i, (a, region_a, surface_a)) in placed.iter().enumerate() {
        for (b, region_b, surface_b) in &placed[i + 1..] {
            if surface_a == surface_b && regions_collide(a, region_a, b, region_b) {
                sink(&[*a, *b], 1);
            }
        }
    }
}

fn regions_collide(a: &Part, region_a: &Region, b: &Part, region_b: &Region) -> bool {
    let margin = a.margin().max(b.margin());
    region_a
        .expanded_xy(margin)
        .intersects_xy(&region_b.expanded_xy(margin))
}

/// True if two fully initialized parts on the same surface collide once
/// both are grown by the larger of their margins.
///
/// ```
/// use loadplan_core::{Part, Rotation, Side, Vec3i};
/// use loadplan_scoring::overlaps;
///
/// let mut a = Part::builder(1, Vec3i::new(5, 10, 1)).build().unwrap();
/// let mut b = Part::builder(2, Vec3i::new(5, 10, 1)).build().unwrap();
/// for (part, x) in [(&mut a, 0), (&mut b, 5)] {
///     part.set_side_down(Some(Side::Bottom));
///     part.set_rotation(Some(Rotation::Deg0));
///     part.set_position(Some(Vec3i::new(x, 0, 0)));
/// }
/// assert!(!overlaps(&a, &b));
/// ```
pub fn overlaps(a: &Part, b: &Part) -> bool {
    if !a.is_fully_initialized() || !b.is_fully_initialized() || a.surface_id() != b.surface_id() {
        return false;
    }
    match (a.current_region(), b.current_region()) {
        (Some(region_a), Some(region_b)) => regions_collide(a, &region_a, b, &region_b),
        _ => false,
    }
}

/// Area shared by the footprints of two parts on the same surface.
///
/// Kept as a diagnostic; it is not part of the score.
pub fn overlap_area(a: &Part, b: &Part) -> i64 {
    if a.surface_id().is_none() || a.surface_id() != b.surface_id() {
        return 0;
    }
    match (a.current_region(), b.current_region()) {
        (Some(ra), Some(rb)) => ra.overlap_area_xy(&rb),
        _ => 0,
    }
}

/// True if the part extends past its surface or sits on an unknown one.
pub fn is_outside(part: &Part, carrier: &Carrier) -> bool {
    if !part.is_fully_initialized() {
        return false;
    }
    let Some(position) = part.position() else {
        return false;
    };
    let Some(surface) = carrier.surface(position.z()) else {
        return true;
    };
    let dims = part.current_dimensions();
    position.x() + dims.x() > surface.width()
        || position.y() + dims.y() > surface.depth()
        || dims.z() > surface.height()
}

pub fn has_disallowed_side(part: &Part) -> bool {
    part.side_down()
        .is_some_and(|side| !part.allowed_down().contains(side))
}

/// Surface a mandatory hint pins its part to; hints without a surface id
/// target the first surface.
pub fn hinted_surface(part: &Part, carrier: &Carrier) -> Option<SurfaceId> {
    part.hint()
        .map(|hint| hint.surface_id.unwrap_or_else(|| carrier.first_surface().id()))
}

/// True if the part carries a mandatory hint it does not match exactly.
///
/// A part without a full assignment never matches.
pub fn misses_mandatory_hint(part: &Part, carrier: &Carrier) -> bool {
    let Some(hint) = part.hint().filter(|h| h.is_mandatory()) else {
        return false;
    };
    let Some(center) = part.current_center() else {
        return true;
    };
    if center.x() != hint.center_position.x() || center.y() != hint.center_position.y() {
        return true;
    }
    if part.surface_id() != hinted_surface(part, carrier) {
        return true;
    }
    if hint.side.is_some_and(|side| part.side_down() != Some(side)) {
        return true;
    }
    hint.rotation
        .is_some_and(|rotation| part.rotation() != Some(rotation))
}

/// A hint naming a side silences the preference, mandatory or not.
pub fn is_not_preferred(part: &Part) -> bool {
    if !part.is_fully_initialized() || part.hint_side().is_some() {
        return false;
    }
    match part.preferred_down() {
        Some(preferred) => part.side_down() != Some(preferred),
        None => false,
    }
}

/// Manhattan X/Y distance to the mandatory hint's center, once the part has
/// a center.
pub fn mandatory_distance(part: &Part) -> Option<i64> {
    let hint = part.hint().filter(|h| h.is_mandatory())?;
    let center = part.current_center()?;
    Some(center.manhattan_xy(&hint.center_position))
}
