//! Simulation state
//!
//! Owns every bunny plus the world bounds, gravity, spawn controls and the
//! seeded RNG used for spawning.

use std::rc::Rc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bunny::Bunny;
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sprite::Sprite;

/// Rendering and spawn-rate mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    /// Apply each bunny's tint when drawing
    pub colored: bool,
    pub bunnies_per_second: u32,
}

/// The whole benchmark world
#[derive(Debug, Clone)]
pub struct BunnySimulation {
    pub mode: Mode,
    /// World bounds in pixels
    pub size: Vec2,
    pub gravity: Vec2,
    /// Lower bound for rolled restitution
    pub elasticity_floor: f32,
    /// Append-only, in spawn order
    bunnies: Vec<Bunny>,
    pub(crate) generating: bool,
    pub(crate) current_variant: usize,
    variants: Vec<Rc<Sprite>>,
    rng: Pcg32,
}

impl BunnySimulation {
    /// Create an empty simulation
    pub fn new(
        mode: Mode,
        size: Vec2,
        gravity: Vec2,
        elasticity_floor: f32,
        variants: Vec<Rc<Sprite>>,
        seed: u64,
    ) -> Self {
        Self {
            mode,
            size,
            gravity,
            elasticity_floor,
            bunnies: Vec::new(),
            generating: false,
            current_variant: 0,
            variants,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create an empty simulation from loaded settings
    pub fn from_settings(settings: &Settings, variants: Vec<Rc<Sprite>>) -> Self {
        Self::new(
            Mode {
                colored: settings.colored,
                bunnies_per_second: settings.bunnies_per_second,
            },
            settings.world_size(),
            settings.gravity,
            settings.elasticity,
            variants,
            settings.seed,
        )
    }

    /// Append `n` bunnies using the active variant
    pub fn generate_bunnies(&mut self, n: usize) {
        let Some(sprite) = self.variants.get(self.current_variant).cloned() else {
            log::warn!("No sprite variants loaded, skipping spawn of {} bunnies", n);
            return;
        };

        self.bunnies.reserve(n);
        for _ in 0..n {
            let bunny = Bunny::spawn(
                sprite.clone(),
                self.size,
                self.elasticity_floor,
                self.mode.colored,
                &mut self.rng,
            );
            self.bunnies.push(bunny);
        }
    }

    /// Start spawning (trigger pressed)
    pub fn start_generating(&mut self) {
        self.generating = true;
    }

    /// Stop spawning and move to the next sprite variant (trigger released)
    pub fn stop_generating(&mut self) {
        self.generating = false;
        if !self.variants.is_empty() {
            self.current_variant = (self.current_variant + 1) % self.variants.len();
        }
    }

    /// Bunnies to spawn for one step at the current rate
    ///
    /// Truncates, so the fractional remainder of each step is dropped rather
    /// than carried into the next one.
    pub fn spawn_count(&self, dt: f32) -> usize {
        (self.mode.bunnies_per_second as f32 * dt) as usize
    }

    /// Advance every bunny by `dt`
    pub fn update_bunnies(&mut self, dt: f32) {
        let (gravity, size) = (self.gravity, self.size);
        for bunny in &mut self.bunnies {
            bunny.update(gravity, size, dt);
        }
    }

    /// Draw every bunny in spawn order, newest on top
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear();
        for bunny in &self.bunnies {
            let tint = self.mode.colored.then_some(bunny.tint);
            canvas.draw_sprite(&bunny.sprite, bunny.pos, tint);
        }
    }

    pub fn bunnies(&self) -> &[Bunny] {
        &self.bunnies
    }

    pub fn bunny_count(&self) -> usize {
        self.bunnies.len()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn current_variant(&self) -> usize {
        self.current_variant
    }

    pub fn variants(&self) -> &[Rc<Sprite>] {
        &self.variants
    }

    /// Mutable access for tests that need to place bunnies by hand
    #[cfg(test)]
    pub(crate) fn bunnies_mut(&mut self) -> &mut Vec<Bunny> {
        &mut self.bunnies
    }
}
