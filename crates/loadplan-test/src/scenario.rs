//! Layout fixtures.

use loadplan_core::{Carrier, Layout, Part};

use crate::carrier::single_surface_carrier;

pub fn layout(carrier: Carrier, parts: Vec<Part>) -> Layout {
    Layout::new(carrier, parts).expect("valid layout fixture")
}

/// A layout over a single surface of the given dimensions.
pub fn single_surface_layout(surface: (i32, i32, i32), parts: Vec<Part>) -> Layout {
    layout(single_surface_carrier(surface), parts)
}
