//! Deterministic simulation module
//!
//! All benchmark logic lives here:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Bunnies are append-only and iterated in spawn order
//! - No rendering backend or platform dependencies

pub mod bunny;
pub mod state;
pub mod tick;

pub use bunny::Bunny;
pub use state::{BunnySimulation, Mode};
pub use tick::{TickInput, TriggerTracker, tick};
