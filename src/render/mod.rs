//! Turns bodies into terminal tiles.
//!
//! The physics never reads anything from here. A [`RenderPass`] walks the
//! bodies of a scene in depth order, interprets each body's
//! [`crate::bodies::Appearance`] and hands back the tiles plus the colour
//! palette the pass allocated.

mod slots;
mod tiles;
mod pass;

pub use self::slots::ColorSlots;
pub use self::tiles::{Tile, TileBuffer};
pub use self::pass::{RenderOutput, RenderPass};
