//! A single bouncing bunny

use std::rc::Rc;

use glam::Vec2;
use rand::Rng;

use crate::consts::{SPAWN_SPEED_X, SPAWN_SPEED_Y};
use crate::sprite::{Sprite, Tint};

/// Largest f32 below 1.0; rolled restitution never reaches a lossless bounce
const MAX_ELASTICITY: f32 = 1.0 - f32::EPSILON / 2.0;

/// A bunny entity
///
/// `size` and `elasticity` are fixed at spawn; only `pos` and `vel` change
/// afterwards.
#[derive(Debug, Clone)]
pub struct Bunny {
    pub sprite: Rc<Sprite>,
    /// Only used when the simulation is in colored mode
    pub tint: Tint,
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    elasticity: f32,
}

impl Bunny {
    /// Spawn a bunny at the origin with a random launch velocity
    ///
    /// Draw order from `rng` is: x speed, y speed, elasticity, then the tint
    /// channels when `colored` is set.
    pub fn spawn<R: Rng>(
        sprite: Rc<Sprite>,
        world: Vec2,
        elasticity_floor: f32,
        colored: bool,
        rng: &mut R,
    ) -> Self {
        let vel = Vec2::new(
            rng.random::<f32>() * world.x * SPAWN_SPEED_X,
            rng.random::<f32>() * world.y * SPAWN_SPEED_Y,
        );
        let elasticity = (elasticity_floor + (1.0 - elasticity_floor) * rng.random::<f32>())
            .min(MAX_ELASTICITY);
        let tint = if colored {
            Tint::rgb(rng.random(), rng.random(), rng.random())
        } else {
            Tint::WHITE
        };

        Self {
            size: sprite.size(),
            sprite,
            tint,
            pos: Vec2::ZERO,
            vel,
            elasticity,
        }
    }

    /// Build a bunny with explicit state
    pub fn with_state(sprite: Rc<Sprite>, pos: Vec2, vel: Vec2, elasticity: f32) -> Self {
        Self {
            size: sprite.size(),
            sprite,
            tint: Tint::WHITE,
            pos,
            vel,
            elasticity,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    /// Advance one fixed step and bounce off the world bounds
    ///
    /// Sides and top reflect without loss. The floor bounce is damped by
    /// `elasticity`, so bunnies eventually come to rest on the floor.
    pub fn update(&mut self, gravity: Vec2, world: Vec2, dt: f32) {
        self.pos += self.vel * dt;
        self.vel += gravity * dt;

        if self.pos.x + self.size.x > world.x && self.vel.x > 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.x < 0.0 && self.vel.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.size.y > world.y && self.vel.y > 0.0 {
            self.vel.y *= -self.elasticity;
        }
    }
}
