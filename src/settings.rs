//! Benchmark settings
//!
//! Loaded once at startup from an optional JSON file and immutable after.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bounds for values that size allocations or the window
pub const MAX_WINDOW_SCALE: u32 = 8;
pub const MAX_START_BUNNIES: usize = 1_000_000;
pub const MAX_BUNNIES_PER_SECOND: u32 = 1_000_000;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Constant acceleration applied to every bunny (pixels/s²)
    pub gravity: Vec2,

    // === Bunnies ===
    /// Lowest restitution a bunny can roll, in [0, 1)
    pub elasticity: f32,
    /// Spawned before the first frame
    pub start_bunnies: usize,
    /// Spawn rate while the trigger is held
    pub bunnies_per_second: u32,
    /// Draw bunnies with their own tint
    pub colored: bool,

    // === Timing ===
    pub ticks_per_second: u32,
    /// RNG seed for spawn velocities
    pub seed: u64,

    // === Window ===
    /// Window size multiplier over the logical screen
    pub window_scale: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: Vec2::new(0.0, GRAVITY_Y),

            elasticity: ELASTICITY,
            start_bunnies: START_BUNNIES,
            bunnies_per_second: BUNNIES_PER_SECOND,
            colored: false,

            ticks_per_second: TICKS_PER_SECOND,
            seed: 0x5eed_b0a7,

            window_scale: 2,
        }
    }
}

impl Settings {
    /// Fixed timestep for one tick
    pub fn dt(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }

    /// World bounds in pixels
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            (self.screen_width as u32).saturating_mul(self.window_scale),
            (self.screen_height as u32).saturating_mul(self.window_scale),
        )
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace out-of-range values with something the simulation can run
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(0.0..1.0).contains(&self.elasticity) {
            log::warn!(
                "Elasticity {} outside [0, 1), using {}",
                self.elasticity,
                defaults.elasticity
            );
            self.elasticity = defaults.elasticity;
        }
        if self.ticks_per_second == 0 {
            log::warn!("ticks_per_second must be at least 1, using {}", defaults.ticks_per_second);
            self.ticks_per_second = defaults.ticks_per_second;
        }
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            log::warn!(
                "Screen size {}x{} is not positive, using {}x{}",
                self.screen_width,
                self.screen_height,
                defaults.screen_width,
                defaults.screen_height
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        if !self.gravity.is_finite() {
            log::warn!("Gravity {:?} is not finite, using {:?}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if self.window_scale == 0 {
            self.window_scale = 1;
        } else if self.window_scale > MAX_WINDOW_SCALE {
            log::warn!("window_scale {} capped at {}", self.window_scale, MAX_WINDOW_SCALE);
            self.window_scale = MAX_WINDOW_SCALE;
        }
        if self.start_bunnies > MAX_START_BUNNIES {
            log::warn!("start_bunnies {} capped at {}", self.start_bunnies, MAX_START_BUNNIES);
            self.start_bunnies = MAX_START_BUNNIES;
        }
        if self.bunnies_per_second > MAX_BUNNIES_PER_SECOND {
            log::warn!(
                "bunnies_per_second {} capped at {}",
                self.bunnies_per_second,
                MAX_BUNNIES_PER_SECOND
            );
            self.bunnies_per_second = MAX_BUNNIES_PER_SECOND;
        }

        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.world_size(), Vec2::new(800.0, 600.0));
        assert_eq!(settings.gravity, Vec2::new(0.0, 300.0));
        assert_eq!(settings.elasticity, 0.85);
        assert_eq!(settings.start_bunnies, 10_000);
        assert_eq!(settings.bunnies_per_second, 10_000);
        assert!((settings.dt() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(settings.window_size(), (1600, 1200));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "colored": true, "start_bunnies": 5 }"#).unwrap();
        assert!(settings.colored);
        assert_eq!(settings.start_bunnies, 5);
        assert_eq!(settings.bunnies_per_second, BUNNIES_PER_SECOND);
        assert_eq!(settings.gravity, Vec2::new(0.0, GRAVITY_Y));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            colored: true,
            seed: 42,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_sanitized_fixes_bad_values() {
        let settings = Settings {
            elasticity: 1.5,
            ticks_per_second: 0,
            screen_width: -1.0,
            window_scale: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.elasticity, ELASTICITY);
        assert_eq!(settings.ticks_per_second, TICKS_PER_SECOND);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.window_scale, 1);
    }

    #[test]
    fn test_huge_values_are_capped() {
        let settings = Settings::from_json(
            r#"{ "window_scale": 4000000000, "start_bunnies": 18446744073709551615,
                 "bunnies_per_second": 4000000000 }"#,
        )
        .unwrap()
        .sanitized();

        assert_eq!(settings.window_scale, MAX_WINDOW_SCALE);
        assert_eq!(settings.start_bunnies, MAX_START_BUNNIES);
        assert_eq!(settings.bunnies_per_second, MAX_BUNNIES_PER_SECOND);
        assert_eq!(settings.window_size(), (800 * 8, 600 * 8));
    }

    #[test]
    fn test_window_size_saturates() {
        let settings = Settings {
            window_scale: u32::MAX,
            ..Default::default()
        };
        assert_eq!(settings.window_size(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from("/nonexistent/bunnymark.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("bunnymark-settings-{}.json", std::process::id()));
        let settings = Settings {
            bunnies_per_second: 500,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
