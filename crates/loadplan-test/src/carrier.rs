//! Surface and carrier fixtures.
//!
//! Fixtures panic on invalid input; they are only meant for tests.

use loadplan_core::{Carrier, Surface, SurfaceId, Vec3i};

/// A surface at the carrier origin.
pub fn surface(id: SurfaceId, dims: (i32, i32, i32)) -> Surface {
    Surface::new(id, dims.into(), Vec3i::ZERO).expect("valid surface fixture")
}

/// A carrier over the given surfaces with no capabilities.
pub fn carrier(surfaces: Vec<Surface>) -> Carrier {
    Carrier::new("test-carrier", surfaces, Vec::new()).expect("valid carrier fixture")
}

pub fn single_surface_carrier(dims: (i32, i32, i32)) -> Carrier {
    carrier(vec![surface(0, dims)])
}

/// `count` identical shelves stacked directly on top of each other, with
/// ids `0..count`.
pub fn shelves(count: i32, dims: (i32, i32, i32)) -> Carrier {
    let (w, d, h) = dims;
    let surfaces = (0..count)
        .map(|i| {
            Surface::new(i, Vec3i::new(w, d, h), Vec3i::new(0, 0, i * h))
                .expect("valid shelf fixture")
        })
        .collect();
    carrier(surfaces)
}
