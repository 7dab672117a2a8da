//! Tests for geometry primitives.

use super::*;

#[test]
fn test_opposite_is_involution() {
    for side in Side::ALL {
        assert_eq!(side.opposite().opposite(), side);
        assert_ne!(side.opposite(), side);
    }
}

#[test]
fn test_normalize_collapses_opposite_pair() {
    for side in Side::ALL {
        let pair: SideSet = [side, side.opposite()].into_iter().collect();
        let expected: SideSet = [side.to_canonical()].into_iter().collect();
        assert_eq!(Side::normalize(&pair), expected);
    }
}

#[test]
fn test_normalize_keeps_lonely_sides() {
    let sides: SideSet = [Side::Top, Side::Right, Side::Back].into_iter().collect();
    assert_eq!(sides.normalize(), sides);
    assert_eq!(SideSet::all().normalize().len(), 3);
    assert_eq!(SideSet::all().distinct_count(), 3);
}

#[test]
fn test_normalize_preferring_pins_representative() {
    let sides: SideSet = [Side::Bottom, Side::Top, Side::Left].into_iter().collect();
    let pinned = sides.normalize_preferring(Some(Side::Top));
    let expected: SideSet = [Side::Top, Side::Left].into_iter().collect();
    assert_eq!(pinned, expected);
}

#[test]
fn test_canonical_sides() {
    for side in Side::canonical() {
        assert!(side.is_canonical());
        assert!(!side.opposite().is_canonical());
        assert_eq!(side.opposite().to_canonical(), side);
    }
}

#[test]
fn test_side_set_keeps_insertion_order() {
    let mut sides = SideSet::new();
    assert!(sides.insert(Side::Top));
    assert!(sides.insert(Side::Left));
    assert!(!sides.insert(Side::Top));
    assert_eq!(sides.as_slice(), &[Side::Top, Side::Left]);

    sides.sort_by_key(|s| *s);
    assert_eq!(sides.as_slice(), &[Side::Left, Side::Top]);
    assert!(sides.remove(Side::Left));
    assert!(!sides.remove(Side::Left));
    assert_eq!(sides.first(), Some(Side::Top));
}

#[test]
fn test_side_set_retain_keeps_order_of_survivors() {
    let mut sides: SideSet = [Side::Back, Side::Bottom, Side::Front, Side::Top]
        .into_iter()
        .collect();
    sides.retain(|s| s.to_canonical() != Side::Bottom);
    assert_eq!(sides.as_slice(), &[Side::Back, Side::Front]);

    sides.retain(|_| false);
    assert!(sides.is_empty());
}

#[test]
fn test_side_set_equality_ignores_order() {
    let a: SideSet = [Side::Left, Side::Back].into_iter().collect();
    let b: SideSet = [Side::Back, Side::Left].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(SideSet::default_allowed().len(), 3);
}

#[test]
fn test_rotate_onto_side() {
    let size = Vec3i::new(1, 2, 3);
    assert_eq!(rotate_onto_side(Side::Bottom, size), size);
    assert_eq!(rotate_onto_side(Side::Top, size), size);
    assert_eq!(rotate_onto_side(Side::Left, size), Vec3i::new(3, 2, 1));
    assert_eq!(rotate_onto_side(Side::Right, size), Vec3i::new(3, 2, 1));
    assert_eq!(rotate_onto_side(Side::Back, size), Vec3i::new(1, 3, 2));
    assert_eq!(rotate_onto_side(Side::Front, size), Vec3i::new(1, 3, 2));
}

#[test]
fn test_orient_applies_side_before_rotation() {
    let size = Vec3i::new(1, 2, 3);
    assert_eq!(orient(Side::Left, Rotation::Deg90, size), Vec3i::new(2, 3, 1));
    assert_eq!(orient(Side::Back, Rotation::Deg90, size), Vec3i::new(3, 1, 2));
}

#[test]
fn test_orient_round_trips() {
    let sizes = [
        Vec3i::new(1, 2, 3),
        Vec3i::new(7, 7, 2),
        Vec3i::new(10, 4, 25),
    ];
    for size in sizes {
        for orientation in Orientation::all() {
            let oriented = orientation.apply(size);
            assert_eq!(orientation.invert(oriented), size, "{orientation:?}");
            assert_eq!(oriented.volume(), size.volume());
        }
    }
}

#[test]
fn test_rotation_clamps_unknown_angles() {
    assert_eq!(Rotation::from_degrees(0), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(90), Rotation::Deg90);
    assert_eq!(Rotation::from_degrees(270), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(-90), Rotation::Deg0);
    assert_eq!(Rotation::Deg90.turned(), Rotation::Deg0);
    assert_eq!(Orientation::all().count(), 12);
}

#[test]
fn test_could_fit_ignores_which_rotation() {
    let bound = Vec3i::new(10, 5, 2);
    assert!(could_fit(bound, Vec3i::new(10, 5, 2)));
    assert!(could_fit(bound, Vec3i::new(5, 10, 2)));
    assert!(!could_fit(bound, Vec3i::new(11, 5, 2)));
    assert!(!could_fit(bound, Vec3i::new(6, 6, 1)));
    assert!(!could_fit(bound, Vec3i::new(1, 1, 3)));
}

#[test]
fn test_vec3i_arithmetic() {
    let a = Vec3i::new(4, -6, 9);
    let b = Vec3i::new(1, 2, 3);
    assert_eq!(a + b, Vec3i::new(5, -4, 12));
    assert_eq!(a - b, Vec3i::new(3, -8, 6));
    assert_eq!(b.scale(3), Vec3i::new(3, 6, 9));
    assert_eq!(a.div(4), Vec3i::new(1, -1, 2));
    assert_eq!(a.max_component(), 9);
    assert_eq!(a.min_component(), -6);
    assert_eq!(a.manhattan_xy(&b), 3 + 8);
}

#[test]
fn test_region_touching_boxes_do_not_intersect() {
    let left = Region::from_corner(Vec3i::new(0, 0, 0), Vec3i::new(5, 10, 1));
    let right = Region::from_corner(Vec3i::new(5, 0, 0), Vec3i::new(5, 10, 1));
    assert!(!left.intersects_xy(&right));
    assert_eq!(left.overlap_area_xy(&right), 0);

    let grown = left.expanded_xy(1);
    assert!(grown.intersects_xy(&right));
    assert!(right.intersects_xy(&grown));
}

#[test]
fn test_region_overlap_area() {
    let a = Region::from_corner(Vec3i::new(0, 0, 0), Vec3i::new(4, 4, 1));
    let b = Region::from_corner(Vec3i::new(2, 1, 0), Vec3i::new(4, 4, 1));
    assert_eq!(a.overlap_area_xy(&b), 2 * 3);
    assert_eq!(b.overlap_area_xy(&a), 2 * 3);
}
