//! Drawing capability shared by every entity in a world.
//!
//! The core never rasterizes anything. Entities describe themselves through
//! [`Drawable`], and an external [`Renderer`] owned by the caller turns those
//! descriptions into pixels (or anything else).

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::position::Position;

/// Default disk radius for every entity.
pub const DEFAULT_DRAW_RADIUS: u32 = 5;

/// How an entity should be drawn: a filled disk of `radius` in `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub radius: u32,
    pub color: Srgb,
}

impl Appearance {
    pub const fn new(radius: u32, color: Srgb) -> Self {
        Self { radius, color }
    }
}

/// Something with a position and an appearance.
pub trait Drawable {
    fn position(&self) -> Position;
    fn appearance(&self) -> Appearance;
}

/// Rendering collaborator that paints filled disks.
///
/// Implementations decide canvas size, clipping, and persistence. The
/// navigator only hands over positions and radii.
pub trait Renderer {
    fn draw_disk(&mut self, center: Position, radius: u32, color: Srgb);
}

/// Draws a single entity.
pub fn draw<R: Renderer + ?Sized>(renderer: &mut R, item: &dyn Drawable) {
    let appearance = item.appearance();
    renderer.draw_disk(item.position(), appearance.radius, appearance.color);
}
