//! Placement domain model.
//!
//! A [`Layout`] owns a [`Carrier`] (one or more [`Surface`]s) and the
//! [`Part`]s being placed on it. Parts carry three decision variables
//! (position, side down, rotation) that preprocessing, heuristics and the
//! external optimizer assign; everything else about a part is derived from
//! those variables on demand.

mod carrier;
mod hint;
mod layout;
mod message;
mod part;
pub mod request;

#[cfg(test)]
mod tests;

pub use carrier::{Carrier, Surface, SurfaceId};
pub use hint::{HintWeight, LayoutHint};
pub use layout::{Layout, Placement};
pub use message::{Message, Messages, Severity};
pub use part::{Part, PartBuilder, PartId, SideSelection};
