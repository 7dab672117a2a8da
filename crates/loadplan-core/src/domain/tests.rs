//! Tests for the placement domain model.

use super::request::{CarrierRequest, HintRequest, LayoutRequest, PartRequest, SurfaceRequest};
use super::*;
use crate::error::LoadPlanError;
use crate::geometry::{Rotation, Side, SideSet, Vec3i};

fn surface(id: SurfaceId, w: i32, d: i32, h: i32, z: i32) -> Surface {
    Surface::new(id, Vec3i::new(w, d, h), Vec3i::new(0, 0, z)).unwrap()
}

fn part(id: PartId, x: i32, y: i32, z: i32) -> PartBuilder {
    Part::builder(id, Vec3i::new(x, y, z))
}

mod part_tests {
    use super::*;

    #[test]
    fn test_default_allowed_sides() {
        let p = part(1, 2, 3, 4).build().unwrap();
        let expected: SideSet = [Side::Bottom, Side::Left, Side::Back].into_iter().collect();
        assert_eq!(p.allowed_down(), &expected);
        assert_eq!(p.part_number(), "1");
    }

    #[test]
    fn test_side_selection_states() {
        assert_eq!(SideSelection::All.resolve().len(), 6);
        assert_eq!(SideSelection::Default.resolve(), SideSet::default_allowed());
        let explicit = SideSelection::Explicit([Side::Top].into_iter().collect()).resolve();
        assert_eq!(explicit.as_slice(), &[Side::Top]);
    }

    #[test]
    fn test_builder_rejects_bad_geometry() {
        assert!(matches!(
            part(1, 0, 3, 4).build(),
            Err(LoadPlanError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            part(1, 1, 1, 1).margin(-1).build(),
            Err(LoadPlanError::NegativeMargin { margin: -1, .. })
        ));
    }

    #[test]
    fn test_area_of_each_side() {
        let p = part(1, 2, 3, 5).build().unwrap();
        assert_eq!(p.area_of(Side::Bottom), 6);
        assert_eq!(p.area_of(Side::Top), 6);
        assert_eq!(p.area_of(Side::Back), 10);
        assert_eq!(p.area_of(Side::Front), 10);
        assert_eq!(p.area_of(Side::Left), 15);
        assert_eq!(p.area_of(Side::Right), 15);
        assert_eq!(p.min_area(), 6);
        assert_eq!(p.max_area(), 15);
        assert_eq!(p.volume(), 30);
    }

    #[test]
    fn test_allowed_areas_follow_allowed_sides() {
        let p = part(1, 2, 3, 5)
            .allowed_sides([Side::Left, Side::Back])
            .build()
            .unwrap();
        assert_eq!(p.min_allowed_area(), 10);
        assert_eq!(p.max_allowed_area(), 15);
    }

    #[test]
    fn test_min_area_side_with_all_sides_picks_two_smallest_dimensions() {
        let sizes = [(1, 2, 3), (3, 1, 2), (2, 3, 1), (4, 9, 6)];
        for (x, y, z) in sizes {
            let p = part(1, x, y, z).allowed(SideSelection::All).build().unwrap();
            let side = p.min_area_side().unwrap();
            let mut dims = [x as i64, y as i64, z as i64];
            dims.sort();
            assert_eq!(p.area_of(side), dims[0] * dims[1]);
            assert!(side.is_canonical());
        }
    }

    #[test]
    fn test_min_area_side_prefers_preferred_opposite() {
        let p = part(1, 2, 3, 5)
            .allowed(SideSelection::All)
            .preferred(Side::Top)
            .build()
            .unwrap();
        assert_eq!(p.min_area_side(), Some(Side::Top));
    }

    #[test]
    fn test_min_area_side_uses_canonical_when_allowed() {
        let p = part(1, 2, 3, 5)
            .allowed_sides([Side::Top, Side::Bottom])
            .build()
            .unwrap();
        assert_eq!(p.min_area_side(), Some(Side::Bottom));

        let only_top = part(2, 2, 3, 5).allowed_sides([Side::Top]).build().unwrap();
        assert_eq!(only_top.min_area_side(), Some(Side::Top));

        let none = part(3, 2, 3, 5)
            .allowed_sides(Vec::<Side>::new())
            .build()
            .unwrap();
        assert_eq!(none.min_area_side(), None);
    }

    #[test]
    fn test_min_area_side_on_surface_respects_height() {
        let p = part(1, 2, 3, 5)
            .allowed(SideSelection::All)
            .build()
            .unwrap();
        // Height 4 rules out bottom/top (height 5); back/front height 3 fits.
        let low = surface(0, 10, 10, 4, 0);
        let possible = p.allowed_and_possible_sides(&low);
        assert!(!possible.contains(Side::Bottom));
        assert!(!possible.contains(Side::Top));
        assert_eq!(p.min_area_side_on(&low), Some(Side::Back));
    }

    #[test]
    fn test_derived_geometry_follows_variables() {
        let mut p = part(1, 4, 2, 6).build().unwrap();
        assert!(p.current_region().is_none());
        assert!(p.current_center().is_none());
        assert_eq!(p.current_dimensions(), Vec3i::new(4, 2, 6));

        p.set_position(Some(Vec3i::new(1, 1, 0)));
        p.set_side_down(Some(Side::Left));
        p.set_rotation(Some(Rotation::Deg90));
        assert!(p.is_fully_initialized());
        assert_eq!(p.current_dimensions(), Vec3i::new(2, 6, 4));
        assert_eq!(p.current_area(), 12);

        let region = p.current_region().unwrap();
        assert_eq!(region.low, Vec3i::new(1, 1, 0));
        assert_eq!(region.high, Vec3i::new(2, 6, 3));
        assert_eq!(p.current_center(), Some(Vec3i::new(2, 4, 0)));

        p.set_rotation(Some(Rotation::Deg0));
        assert_eq!(p.current_dimensions(), Vec3i::new(6, 2, 4));

        p.clear_assignment();
        assert!(!p.is_fully_initialized());
    }

    #[test]
    fn test_corner_for_center_truncates() {
        let p = part(1, 5, 3, 1).build().unwrap();
        let corner = p.corner_for_center(Vec3i::new(10, 10, 2), Side::Bottom, Rotation::Deg0);
        assert_eq!(corner, Vec3i::new(8, 9, 2));
        let turned = p.corner_for_center(Vec3i::new(10, 10, 2), Side::Bottom, Rotation::Deg90);
        assert_eq!(turned, Vec3i::new(9, 8, 2));
    }

    #[test]
    fn test_hint_weight_bounds() {
        assert!(HintWeight::new("p", 0).is_err());
        assert!(HintWeight::new("p", 11).is_err());
        assert!(HintWeight::new("p", 10).unwrap().is_mandatory());
        assert!(!HintWeight::new("p", 9).unwrap().is_mandatory());

        let p = part(1, 1, 1, 1)
            .hint(LayoutHint::mandatory(Vec3i::ZERO).with_side(Side::Top))
            .build()
            .unwrap();
        assert!(p.has_mandatory_hint());
        assert_eq!(p.hint_side(), Some(Side::Top));
    }
}

mod carrier_tests {
    use super::*;

    #[test]
    fn test_surface_rejects_empty_dimensions() {
        assert!(Surface::new(0, Vec3i::new(10, 0, 1), Vec3i::ZERO).is_err());
    }

    #[test]
    fn test_carrier_requires_surfaces() {
        assert_eq!(
            Carrier::new("w1", vec![], Vec::new()),
            Err(LoadPlanError::NoSurfaces("w1".into()))
        );
    }

    #[test]
    fn test_carrier_rejects_duplicate_surface_ids() {
        let result = Carrier::new(
            "w1",
            vec![surface(1, 10, 10, 5, 0), surface(1, 10, 10, 5, 10)],
            Vec::new(),
        );
        assert!(matches!(result, Err(LoadPlanError::DuplicateId { kind: "surface", .. })));
    }

    #[test]
    fn test_carrier_rejects_vertically_overlapping_decks() {
        let result = Carrier::new(
            "w1",
            vec![surface(1, 10, 10, 5, 0), surface(2, 10, 10, 5, 4)],
            Vec::new(),
        );
        assert_eq!(
            result,
            Err(LoadPlanError::OverlappingSurfaces { lower: 1, upper: 2 })
        );
    }

    #[test]
    fn test_carrier_accepts_stacked_decks() {
        let carrier = Carrier::new(
            "w1",
            vec![surface(1, 10, 8, 5, 0), surface(2, 12, 6, 3, 5)],
            vec!["crane".to_string()],
        )
        .unwrap();
        assert_eq!(carrier.dimensions(), Vec3i::new(12, 8, 8));
        assert_eq!(carrier.max_extents(), Vec3i::new(12, 8, 5));
        assert_eq!(carrier.largest_dimension(), 12);
        assert_eq!(carrier.total_area(), 80 + 72);
        assert_eq!(carrier.total_volume(), 400 + 216);
        assert!(carrier.has_capability("crane"));
        assert!(!carrier.has_capability("forklift"));
        assert_eq!(carrier.surface(2).unwrap().width(), 12);
        assert_eq!(carrier.distinct_footprints().len(), 2);
    }
}

mod layout_tests {
    use super::*;

    fn carrier() -> Carrier {
        Carrier::new("w1", vec![surface(0, 10, 10, 1, 0)], Vec::new()).unwrap()
    }

    #[test]
    fn test_layout_rejects_duplicate_parts() {
        let parts = vec![part(1, 1, 1, 1).build().unwrap(), part(1, 2, 2, 1).build().unwrap()];
        assert!(matches!(
            Layout::new(carrier(), parts),
            Err(LoadPlanError::DuplicateId { kind: "part", .. })
        ));
    }

    #[test]
    fn test_layout_rejects_hint_on_unknown_surface() {
        let hinted = part(1, 1, 1, 1)
            .hint(LayoutHint::mandatory(Vec3i::ZERO).on_surface(7))
            .build()
            .unwrap();
        assert!(matches!(
            Layout::new(carrier(), vec![hinted]),
            Err(LoadPlanError::UnknownSurface { surface: 7, .. })
        ));
    }

    #[test]
    fn test_placements_report_centers() {
        let mut layout = Layout::new(carrier(), vec![part(1, 4, 2, 1).build().unwrap()]).unwrap();
        assert!(layout.placements().is_empty());

        let p = layout.part_mut(1).unwrap();
        p.set_position(Some(Vec3i::new(2, 2, 0)));
        p.set_side_down(Some(Side::Bottom));
        p.set_rotation(Some(Rotation::Deg90));

        let placements = layout.placements();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].center, Vec3i::new(3, 4, 0));
        assert_eq!(placements[0].rotation, Rotation::Deg90);
        assert_eq!(placements[0].surface_id, 0);
        assert!(layout.is_fully_initialized());
        assert_eq!(layout.surface_of(&layout.parts()[0]).unwrap().id(), 0);

        layout.clear_assignments();
        assert!(!layout.is_fully_initialized());
    }

    #[test]
    fn test_from_request_normalizes_records() {
        let request = LayoutRequest {
            carrier: CarrierRequest {
                id: "wagon".into(),
                surfaces: vec![SurfaceRequest {
                    id: 3,
                    dimensions: Vec3i::new(20, 10, 4),
                    origin: Vec3i::ZERO,
                }],
                capabilities: vec!["side-loading".into()],
                dimensions: None,
            },
            parts: vec![
                PartRequest {
                    id: 1,
                    part_number: Some("A-1".into()),
                    size: Vec3i::new(2, 2, 2),
                    allowed_down: None,
                    allow_all_sides: true,
                    preferred_down: Some(Side::Top),
                    margin: 1,
                    hint: Some(HintRequest {
                        center_position: Vec3i::new(5, 5, 0),
                        rotation: Some(270),
                        weight: 10,
                        side: Some(Side::Top),
                        surface_id: Some(3),
                    }),
                },
                PartRequest {
                    id: 2,
                    part_number: None,
                    size: Vec3i::new(1, 1, 1),
                    allowed_down: Some(vec![Side::Front]),
                    allow_all_sides: false,
                    preferred_down: None,
                    margin: 0,
                    hint: None,
                },
            ],
        };

        let layout = Layout::from_request(&request).unwrap();
        let first = layout.part(1).unwrap();
        assert_eq!(first.allowed_down().len(), 6);
        assert_eq!(first.margin(), 1);
        let hint = first.hint().unwrap();
        assert!(hint.is_mandatory());
        assert_eq!(hint.rotation, Some(Rotation::Deg0));
        assert_eq!(layout.part(2).unwrap().allowed_down().as_slice(), &[Side::Front]);
        assert_eq!(layout.part(2).unwrap().part_number(), "2");
        assert!(layout.carrier().has_capability("side-loading"));
    }

    #[test]
    fn test_from_request_rejects_bad_hint_weight() {
        let request = LayoutRequest {
            carrier: CarrierRequest {
                id: "wagon".into(),
                surfaces: vec![SurfaceRequest {
                    id: 0,
                    dimensions: Vec3i::new(5, 5, 5),
                    origin: Vec3i::ZERO,
                }],
                capabilities: Vec::new(),
                dimensions: Some(Vec3i::new(6, 6, 6)),
            },
            parts: vec![PartRequest {
                id: 1,
                part_number: None,
                size: Vec3i::new(1, 1, 1),
                allowed_down: None,
                allow_all_sides: false,
                preferred_down: None,
                margin: 0,
                hint: Some(HintRequest {
                    center_position: Vec3i::ZERO,
                    rotation: None,
                    weight: 12,
                    side: None,
                    surface_id: None,
                }),
            }],
        };
        assert!(matches!(
            Layout::from_request(&request),
            Err(LoadPlanError::InvalidHintWeight { weight: 12, .. })
        ));
    }
}

mod message_tests {
    use super::*;

    #[test]
    fn test_errors_anywhere_make_unsolvable() {
        let mut messages = Messages::new();
        assert!(messages.is_empty());
        messages.add_global(Message::warning("W", "careful"));
        assert!(!messages.has_errors());

        messages.add_part(4, Message::error("PART_TOO_LARGE", "too large"));
        assert!(messages.has_errors());
        assert_eq!(messages.for_part(4).len(), 1);
        assert!(messages.for_part(5).is_empty());
        assert_eq!(messages.count(Severity::Warning), 1);
        assert_eq!(messages.len(), 2);
        assert!(messages.contains_code("PART_TOO_LARGE"));
    }

    #[test]
    fn test_extend_merges_per_part_messages() {
        let mut a = Messages::new();
        a.add_part(1, Message::info("I1", "one"));
        let mut b = Messages::new();
        b.add_part(1, Message::info("I2", "two"));
        b.add_global(Message::info("G", "global"));
        a.extend(b);
        assert_eq!(a.for_part(1).len(), 2);
        assert_eq!(a.global().len(), 1);
        let first = a.iter().next().unwrap();
        assert_eq!(first.0, None);
    }
}
