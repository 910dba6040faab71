//! Fixed timestep simulation tick
//!
//! Turns input edges into generating state, spawns, then moves every bunny.

use super::state::BunnySimulation;

/// Input edges for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Trigger went down this frame
    pub trigger_pressed: bool,
    /// Trigger went up this frame
    pub trigger_released: bool,
}

/// Converts a per-frame "button is down" level into press/release edges
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerTracker {
    down: bool,
}

impl TriggerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's button level, get this frame's edges
    pub fn update(&mut self, down: bool) -> TickInput {
        let input = TickInput {
            trigger_pressed: down && !self.down,
            trigger_released: !down && self.down,
        };
        self.down = down;
        input
    }

    pub fn is_down(&self) -> bool {
        self.down
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(sim: &mut BunnySimulation, input: &TickInput, dt: f32) {
    if input.trigger_pressed {
        sim.start_generating();
        log::debug!("Generating with variant {}", sim.current_variant());
    }
    if input.trigger_released {
        sim.stop_generating();
        log::debug!(
            "Stopped generating at {} bunnies, next variant {}",
            sim.bunny_count(),
            sim.current_variant()
        );
    }

    if sim.is_generating() {
        let n = sim.spawn_count(dt);
        sim.generate_bunnies(n);
    }

    sim.update_bunnies(dt);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::Mode;
    use crate::sprite::runner_variants;

    fn sim() -> BunnySimulation {
        BunnySimulation::new(
            Mode {
                colored: false,
                bunnies_per_second: 10_000,
            },
            Vec2::new(800.0, 600.0),
            Vec2::new(0.0, 300.0),
            0.85,
            runner_variants(),
            12345,
        )
    }

    fn press() -> TickInput {
        TickInput {
            trigger_pressed: true,
            ..Default::default()
        }
    }

    fn release() -> TickInput {
        TickInput {
            trigger_released: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_tick_spawns_nothing() {
        let mut sim = sim();
        tick(&mut sim, &TickInput::default(), SIM_DT);
        assert_eq!(sim.bunny_count(), 0);
        assert!(!sim.is_generating());
    }

    #[test]
    fn test_press_spawns_truncated_count() {
        let mut sim = sim();
        tick(&mut sim, &press(), 1.0 / 60.0);
        assert!(sim.is_generating());
        assert_eq!(sim.bunny_count(), 166);

        // Held: keeps spawning without another press
        tick(&mut sim, &TickInput::default(), 1.0 / 60.0);
        assert_eq!(sim.bunny_count(), 332);
    }

    #[test]
    fn test_new_bunnies_move_on_spawn_tick() {
        let mut sim = sim();
        tick(&mut sim, &press(), SIM_DT);
        // Spawned at the origin, then integrated once with their launch velocity
        for bunny in sim.bunnies() {
            assert!(bunny.pos.x >= 0.0);
            assert!(bunny.vel.y > 0.0);
        }
        assert!(sim.bunnies().iter().any(|b| b.pos != Vec2::ZERO));
    }

    #[test]
    fn test_release_advances_variant() {
        let mut sim = sim();
        sim.current_variant = 1;

        tick(&mut sim, &press(), SIM_DT);
        let before = sim.bunny_count();
        tick(&mut sim, &release(), SIM_DT);
        assert!(!sim.is_generating());
        assert_eq!(sim.current_variant(), 2);
        // Release tick does not spawn
        assert_eq!(sim.bunny_count(), before);

        tick(&mut sim, &press(), SIM_DT);
        let variants = sim.variants().to_vec();
        let (old, new) = sim.bunnies().split_at(before);
        assert!(old.iter().all(|b| Rc::ptr_eq(&b.sprite, &variants[1])));
        assert!(new.iter().all(|b| Rc::ptr_eq(&b.sprite, &variants[2])));
        assert!(!new.is_empty());
    }

    #[test]
    fn test_press_and_release_same_tick() {
        let mut sim = sim();
        let input = TickInput {
            trigger_pressed: true,
            trigger_released: true,
        };
        tick(&mut sim, &input, SIM_DT);
        assert!(!sim.is_generating());
        assert_eq!(sim.bunny_count(), 0);
        assert_eq!(sim.current_variant(), 1);
    }

    #[test]
    fn test_long_run_keeps_population() {
        let mut sim = sim();
        sim.generate_bunnies(200);
        let sizes: Vec<Vec2> = sim.bunnies().iter().map(|b| b.size()).collect();
        for _ in 0..(60 * 120) {
            tick(&mut sim, &TickInput::default(), SIM_DT);
        }
        // Never appended or dropped while idle
        assert_eq!(sim.bunny_count(), 200);
        for (bunny, size) in sim.bunnies().iter().zip(sizes) {
            assert!(bunny.elasticity() >= 0.85 && bunny.elasticity() < 1.0);
            assert_eq!(bunny.size(), size);
            assert!(bunny.pos.is_finite() && bunny.vel.is_finite());
        }
    }

    #[test]
    fn test_trigger_tracker_edges() {
        let mut tracker = TriggerTracker::new();
        assert_eq!(tracker.update(false), TickInput::default());
        assert_eq!(tracker.update(true), press());
        assert!(tracker.is_down());
        assert_eq!(tracker.update(true), TickInput::default());
        assert_eq!(tracker.update(false), release());
        assert_eq!(tracker.update(false), TickInput::default());
    }
}
