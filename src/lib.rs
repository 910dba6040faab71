//! Bunnymark - a sprite physics benchmark
//!
//! Core modules:
//! - `sim`: Fixed timestep simulation (spawning, kinematics, bounces)
//! - `sprite`: Sprite sheet slicing and color tints
//! - `renderer`: Canvas trait and sprite batching for a GPU vertex buffer
//! - `bench`: Headless frame driver and frame timing
//! - `settings`: JSON configuration

pub mod bench;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sprite;

pub use settings::Settings;
pub use sim::{BunnySimulation, TickInput};

/// Benchmark configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Lowest restitution a bunny can roll
    pub const ELASTICITY: f32 = 0.85;
    /// Bunnies spawned before the first frame
    pub const START_BUNNIES: usize = 10_000;
    /// Spawn rate while the trigger is held
    pub const BUNNIES_PER_SECOND: u32 = 10_000;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY_Y: f32 = 300.0;

    /// Spawn velocity as a fraction of the world size
    pub const SPAWN_SPEED_X: f32 = 0.2;
    pub const SPAWN_SPEED_Y: f32 = 0.05;

    /// Runner sprite sheet layout: one row of frames
    pub const SHEET_WIDTH: u32 = 256;
    pub const SHEET_HEIGHT: u32 = 96;
    pub const FRAME_OX: u32 = 0;
    pub const FRAME_OY: u32 = 32;
    pub const FRAME_WIDTH: u32 = 32;
    pub const FRAME_HEIGHT: u32 = 32;
    pub const FRAME_COUNT: u32 = 8;
}
