//! Sprite batching
//!
//! Collects one quad per draw call, in call order, so later sprites end up
//! on top when the buffer is drawn front to back.

use glam::Vec2;

use super::Canvas;
use super::vertex::{SpriteVertex, colors};
use crate::sprite::{Sprite, Tint};

/// Vertices emitted per sprite (two triangles)
pub const VERTICES_PER_SPRITE: usize = 6;

/// CPU-side vertex batch for a single frame
#[derive(Debug, Clone)]
pub struct SpriteBatch {
    /// Screen size in pixels, used for the pixel to clip-space mapping
    screen: Vec2,
    clear_color: [f32; 4],
    /// Color the current frame was cleared with, `None` until `clear`
    frame_clear: Option<[f32; 4]>,
    vertices: Vec<SpriteVertex>,
}

impl SpriteBatch {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            clear_color: colors::BACKGROUND,
            frame_clear: None,
            vertices: Vec::new(),
        }
    }

    /// Preallocate room for `sprites` quads
    ///
    /// An unsatisfiable request is logged and the batch grows on demand.
    pub fn with_capacity(screen: Vec2, sprites: usize) -> Self {
        let mut batch = Self::new(screen);
        let wanted = sprites.saturating_mul(VERTICES_PER_SPRITE);
        if let Err(e) = batch.vertices.try_reserve(wanted) {
            log::warn!("Could not preallocate {} vertices: {}", wanted, e);
        }
        batch
    }

    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    /// Raw bytes for `Queue::write_buffer`
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn draw_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_SPRITE
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Color used by the next `clear`
    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    /// Clear color recorded for the current frame (the render pass load op);
    /// `None` means the previous contents should be kept
    pub fn frame_clear(&self) -> Option<[f32; 4]> {
        self.frame_clear
    }

    /// Pixel coordinates (origin top-left, y down) to clip space
    fn to_clip(&self, p: Vec2) -> [f32; 2] {
        [
            p.x / self.screen.x * 2.0 - 1.0,
            1.0 - p.y / self.screen.y * 2.0,
        ]
    }
}

impl Canvas for SpriteBatch {
    fn clear(&mut self) {
        self.vertices.clear();
        self.frame_clear = Some(self.clear_color);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, translation: Vec2, tint: Option<Tint>) {
        let color = tint.unwrap_or(Tint::WHITE).to_array();
        let min = translation;
        let max = translation + sprite.size();

        let tl = SpriteVertex::new(self.to_clip(min), sprite.uv_min.into(), color);
        let tr = SpriteVertex::new(
            self.to_clip(Vec2::new(max.x, min.y)),
            [sprite.uv_max.x, sprite.uv_min.y],
            color,
        );
        let bl = SpriteVertex::new(
            self.to_clip(Vec2::new(min.x, max.y)),
            [sprite.uv_min.x, sprite.uv_max.y],
            color,
        );
        let br = SpriteVertex::new(self.to_clip(max), sprite.uv_max.into(), color);

        self.vertices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
    }
}
