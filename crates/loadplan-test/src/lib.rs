//! Shared test fixtures for loadplan crates.
//!
//! This crate provides fixture constructors only. It depends on
//! `loadplan-core` alone so that every other crate can use it as a
//! dev-dependency.
//!
//! - [`carrier`] - surfaces and carriers
//! - [`part`] - parts, with and without an assignment
//! - [`scenario`] - complete layouts for the scoring scenarios
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! loadplan-test = { workspace = true }
//! ```
//!
//! ```
//! use loadplan_test::{placed_part, single_surface_layout};
//! use loadplan_core::{Rotation, Side};
//!
//! let layout = single_surface_layout(
//!     (10, 10, 1),
//!     vec![placed_part(1, (10, 10, 1), (0, 0, 0), Side::Bottom, Rotation::Deg0)],
//! );
//! assert!(layout.is_fully_initialized());
//! ```

pub mod carrier;
pub mod part;
pub mod scenario;

pub use carrier::{carrier, shelves, single_surface_carrier, surface};
pub use part::{part, part_with_sides, place, placed_part, v};
pub use scenario::{layout, single_surface_layout};
