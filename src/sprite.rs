//! Sprite handles and color tints
//!
//! Sprites are immutable views into a sprite sheet. They are shared by every
//! bunny that uses them and live for the whole run.

use std::rc::Rc;

use glam::{UVec2, Vec2};

/// RGBA color scale applied when drawing a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub [f32; 4]);

impl Tint {
    /// Identity scale, leaves the sprite unchanged
    pub const WHITE: Tint = Tint([1.0, 1.0, 1.0, 1.0]);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::WHITE
    }
}

/// One frame of a sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Position in the palette it was sliced into
    pub index: usize,
    /// Pixel dimensions
    pub width: u32,
    pub height: u32,
    /// Normalized texture coordinates within the sheet
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl Sprite {
    /// Pixel size as a float vector (for collision bounds)
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A texture atlas described only by its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub width: u32,
    pub height: u32,
}

impl SpriteSheet {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cut a single sub-rectangle out of the sheet
    pub fn sub_sprite(&self, index: usize, origin: UVec2, size: UVec2) -> Sprite {
        let sheet = Vec2::new(self.width as f32, self.height as f32);
        Sprite {
            index,
            width: size.x,
            height: size.y,
            uv_min: origin.as_vec2() / sheet,
            uv_max: (origin + size).as_vec2() / sheet,
        }
    }

    /// Slice `count` frames laid out left to right starting at `origin`
    pub fn frames(&self, origin: UVec2, frame_size: UVec2, count: u32) -> Vec<Rc<Sprite>> {
        (0..count)
            .map(|i| {
                let frame_origin = UVec2::new(origin.x + i * frame_size.x, origin.y);
                Rc::new(self.sub_sprite(i as usize, frame_origin, frame_size))
            })
            .collect()
    }
}

/// The runner strip the benchmark uses as its bunny variants
pub fn runner_variants() -> Vec<Rc<Sprite>> {
    use crate::consts::*;

    SpriteSheet::new(SHEET_WIDTH, SHEET_HEIGHT).frames(
        UVec2::new(FRAME_OX, FRAME_OY),
        UVec2::new(FRAME_WIDTH, FRAME_HEIGHT),
        FRAME_COUNT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_sliced_left_to_right() {
        let sheet = SpriteSheet::new(256, 96);
        let frames = sheet.frames(UVec2::new(0, 32), UVec2::new(32, 32), 8);

        assert_eq!(frames.len(), 8);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index, i);
            assert_eq!(frame.size(), Vec2::new(32.0, 32.0));
        }

        assert!((frames[0].uv_min.x - 0.0).abs() < 1e-6);
        assert!((frames[0].uv_min.y - 32.0 / 96.0).abs() < 1e-6);
        assert!((frames[1].uv_min.x - 32.0 / 256.0).abs() < 1e-6);
        assert!((frames[7].uv_max.x - 1.0).abs() < 1e-6);
        assert!((frames[7].uv_max.y - 64.0 / 96.0).abs() < 1e-6);
    }

    #[test]
    fn test_runner_variants() {
        let variants = runner_variants();
        assert_eq!(variants.len(), 8);
        assert_eq!(variants[3].width, 32);
        assert_eq!(variants[3].height, 32);
    }

    #[test]
    fn test_default_tint_is_identity() {
        assert_eq!(Tint::default(), Tint::WHITE);
        assert_eq!(Tint::rgb(0.5, 0.25, 1.0).to_array(), [0.5, 0.25, 1.0, 1.0]);
    }
}
