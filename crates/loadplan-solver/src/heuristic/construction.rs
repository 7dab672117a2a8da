//! Shelf-packing construction.
//!
//! Parts are sorted by a size metric, largest first, and laid out in rows
//! from the back-left corner of each surface. A row wraps when the next
//! part would cross the surface width; the next surface is opened when the
//! depth runs out. Parts that are already placed, and every part the packer
//! puts down, block the cursor: a slot whose margin-grown footprint meets
//! one of them is skipped. The packer never backtracks: a part that no
//! longer fits anywhere is dropped at the origin of the first surface and
//! left for the optimizer to move.

use std::cmp::Reverse;

use loadplan_config::SortMetric;
use loadplan_core::{
    orient, Layout, Part, PartId, Region, Rotation, Side, Surface, SurfaceId, Vec3i,
};
use tracing::debug;

use super::comparator::default_area;

/// Sort key for [`SortMetric`]; larger keys are packed first.
pub fn metric_value(part: &Part, metric: SortMetric) -> i64 {
    match metric {
        SortMetric::MinAllowedArea => part.min_allowed_area(),
        SortMetric::DefaultArea => default_area(part),
        SortMetric::Depth => part.size().y() as i64,
    }
}

/// Greedy shelf packer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfConstruction {
    metric: SortMetric,
}

#[derive(Debug, Default)]
struct Cursor {
    surface: usize,
    x: i32,
    y: i32,
    row_depth: i32,
}

impl Cursor {
    fn wrap_row(&mut self) {
        self.x = 0;
        self.y += self.row_depth;
        self.row_depth = 0;
    }

    fn next_surface(&mut self) {
        *self = Cursor {
            surface: self.surface + 1,
            ..Cursor::default()
        };
    }

    /// Jumps past a blocker whose clearance corner is `clear`; the row
    /// grows deep enough to hold it.
    fn skip(&mut self, clear: (i32, i32)) {
        self.x = clear.0;
        self.row_depth = self.row_depth.max(clear.1 - self.y);
    }
}

#[derive(Debug)]
struct Footprint {
    surface: SurfaceId,
    region: Region,
    margin: i32,
}

/// Footprints already taken on the carrier.
#[derive(Debug, Default)]
struct Occupied(Vec<Footprint>);

impl Occupied {
    fn of(parts: &[Part]) -> Self {
        Self(
            parts
                .iter()
                .filter(|p| p.is_fully_initialized())
                .filter_map(|p| {
                    Some(Footprint {
                        surface: p.surface_id()?,
                        region: p.current_region()?,
                        margin: p.margin(),
                    })
                })
                .collect(),
        )
    }

    /// First x and y at which a footprint of `margin` starting there no
    /// longer meets the blocker of `region`, or `None` when nothing blocks.
    fn clearance(&self, surface: SurfaceId, region: Region, margin: i32) -> Option<(i32, i32)> {
        self.0
            .iter()
            .filter(|taken| taken.surface == surface)
            .find_map(|taken| {
                let gap = margin.max(taken.margin);
                region
                    .expanded_xy(gap)
                    .intersects_xy(&taken.region.expanded_xy(gap))
                    .then(|| {
                        (
                            taken.region.high.x() + 2 * gap + 1,
                            taken.region.high.y() + 2 * gap + 1,
                        )
                    })
            })
    }

    fn push(&mut self, surface: SurfaceId, region: Region, margin: i32) {
        self.0.push(Footprint {
            surface,
            region,
            margin,
        });
    }
}

impl ShelfConstruction {
    pub fn new(metric: SortMetric) -> Self {
        Self { metric }
    }

    /// Places every part that is not fully initialized yet.
    ///
    /// Returns the number of parts that fell back to the origin.
    pub fn construct(&self, layout: &mut Layout) -> usize {
        let mut order: Vec<(PartId, i64)> = layout
            .parts()
            .iter()
            .filter(|p| !p.is_fully_initialized())
            .map(|p| (p.id(), metric_value(p, self.metric)))
            .collect();
        order.sort_by_key(|&(_, value)| Reverse(value));

        let (carrier, parts) = layout.split_mut();
        let surfaces = carrier.surfaces();
        let mut occupied = Occupied::of(parts);
        let mut cursor = Cursor::default();
        let mut overflowed = 0;

        for (id, _) in order {
            let Some(part) = parts.iter_mut().find(|p| p.id() == id) else {
                continue;
            };
            match place_next(part, surfaces, &mut cursor, &mut occupied) {
                Some((corner, side, rotation)) => assign(part, corner, side, rotation),
                None => {
                    let first = carrier.first_surface();
                    let side = choose_side(part, first);
                    assign(part, Vec3i::new(0, 0, first.id()), side, Rotation::Deg0);
                    overflowed += 1;
                    debug!(event = "shelf_overflow", part = part.part_number());
                }
            }
        }
        overflowed
    }
}

fn assign(part: &mut Part, corner: Vec3i, side: Side, rotation: Rotation) {
    part.set_side_down(Some(side));
    part.set_rotation(Some(rotation));
    part.set_position(Some(corner));
}

fn choose_side(part: &Part, surface: &Surface) -> Side {
    part.side_down()
        .or_else(|| part.min_area_side_on(surface))
        .or_else(|| part.min_area_side())
        .unwrap_or(Side::Bottom)
}

/// Rotation that fits the free space and keeps the row shallowest, then
/// narrowest. Ties keep 0°.
fn best_rotation(
    part: &Part,
    side: Side,
    free_width: i32,
    free_depth: i32,
    height: i32,
    row_depth: i32,
) -> Option<(Rotation, Vec3i)> {
    let candidates: Vec<(Rotation, Vec3i)> = match part.rotation() {
        Some(rotation) => vec![(rotation, orient(side, rotation, part.size()))],
        None => Rotation::ALL
            .into_iter()
            .map(|r| (r, orient(side, r, part.size())))
            .collect(),
    };
    candidates
        .into_iter()
        .filter(|(_, dims)| dims.x() <= free_width && dims.y() <= free_depth && dims.z() <= height)
        .min_by_key(|(_, dims)| (row_depth.max(dims.y()), dims.x()))
}

fn place_next(
    part: &Part,
    surfaces: &[Surface],
    cursor: &mut Cursor,
    occupied: &mut Occupied,
) -> Option<(Vec3i, Side, Rotation)> {
    let fits_somewhere = surfaces.iter().any(|s| {
        let side = choose_side(part, s);
        best_rotation(part, side, s.width(), s.depth(), s.height(), 0).is_some()
    });
    if !fits_somewhere {
        return None;
    }

    while let Some(surface) = surfaces.get(cursor.surface) {
        let side = choose_side(part, surface);
        let found = best_rotation(
            part,
            side,
            surface.width() - cursor.x,
            surface.depth() - cursor.y,
            surface.height(),
            cursor.row_depth,
        );
        let Some((rotation, dims)) = found else {
            if cursor.x > 0 || cursor.row_depth > 0 {
                cursor.wrap_row();
            } else {
                cursor.next_surface();
            }
            continue;
        };

        let region = Region::from_corner(Vec3i::new(cursor.x, cursor.y, 0), dims);
        if let Some(clear) = occupied.clearance(surface.id(), region, part.margin()) {
            cursor.skip(clear);
            continue;
        }

        occupied.push(surface.id(), region, part.margin());
        let corner = Vec3i::new(cursor.x, cursor.y, surface.id());
        cursor.x += dims.x();
        cursor.row_depth = cursor.row_depth.max(dims.y());
        return Some((corner, side, rotation));
    }
    None
}
