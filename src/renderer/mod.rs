//! Rendering module
//!
//! The simulation draws through the [`Canvas`] trait. [`SpriteBatch`] turns
//! those draw calls into textured quads ready for a wgpu vertex buffer.

pub mod batch;
pub mod vertex;

pub use batch::SpriteBatch;
pub use vertex::SpriteVertex;

use glam::Vec2;

use crate::sprite::{Sprite, Tint};

/// Something sprites can be drawn onto
pub trait Canvas {
    /// Start a new frame
    fn clear(&mut self);

    /// Draw `sprite` with its top-left corner at `translation` (pixels)
    ///
    /// `tint` is `None` when the sprite should be drawn unmodulated.
    fn draw_sprite(&mut self, sprite: &Sprite, translation: Vec2, tint: Option<Tint>);
}
