//! Heuristics that bias the search without running it.
//!
//! This module contains:
//! - Comparators: part orderings and the difficulty weight
//! - Orientation filter: narrows each part's allowed sides
//! - Side ordering: reorders allowed sides by search priority
//! - Initializers: hint-driven and seeded random pre-assignment
//! - Construction: greedy shelf packing

pub mod comparator;
mod construction;
mod initializer;
mod orientation;
mod side_order;

pub use comparator::{difficulty_weight, is_side_possible, part_order, sort_parts};
pub use construction::{metric_value, ShelfConstruction};
pub use initializer::{apply_hint, HintFields, HintInitializer, RandomInitializer};
pub use orientation::OrientationFilter;
pub use side_order::{order_sides, side_priority};
