//! Headless benchmark driver
//!
//! Plays the role of the frame clock: every frame it samples the scripted
//! trigger, ticks the simulation with a fixed `dt`, then renders into a
//! sprite batch. Tick and render are timed separately.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::renderer::SpriteBatch;
use crate::sim::{BunnySimulation, TriggerTracker, tick};

/// Statistics over a set of frame timings
#[derive(Debug, Clone)]
pub struct FrameStats {
    pub frame_count: usize,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Sorted, for percentiles
    sorted: Vec<Duration>,
}

impl FrameStats {
    pub fn from_times(times: Vec<Duration>) -> Self {
        let frame_count = times.len();
        let total = times.iter().sum();
        let min = times.iter().min().copied().unwrap_or(Duration::ZERO);
        let max = times.iter().max().copied().unwrap_or(Duration::ZERO);

        let mut sorted = times;
        sorted.sort();

        Self {
            frame_count,
            total,
            min,
            max,
            sorted,
        }
    }

    pub fn average(&self) -> Duration {
        if self.frame_count == 0 {
            Duration::ZERO
        } else {
            self.total / self.frame_count as u32
        }
    }

    pub fn median(&self) -> Duration {
        self.percentile(50)
    }

    /// Nearest-rank percentile, `p` in 0..=100
    pub fn percentile(&self, p: usize) -> Duration {
        if self.sorted.is_empty() {
            return Duration::ZERO;
        }
        let p = p.min(100);
        let idx = (p * (self.sorted.len() - 1)) / 100;
        self.sorted[idx]
    }
}

/// What the scripted "user" does during a run
#[derive(Debug, Clone)]
pub struct BenchPlan {
    pub frames: u32,
    /// Frames during which the trigger is held down
    pub hold: Range<u32>,
}

impl Default for BenchPlan {
    fn default() -> Self {
        // Idle for a second, hold for two, then watch them bounce
        Self {
            frames: 600,
            hold: 60..180,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub tick: FrameStats,
    pub render: FrameStats,
    pub bunnies: usize,
    /// Vertices in the batch after the final frame
    pub last_frame_vertices: usize,
}

impl BenchReport {
    /// Wall time per frame if tick and render were the only work
    pub fn average_frame(&self) -> Duration {
        self.tick.average() + self.render.average()
    }
}

/// Drive `sim` for `plan.frames` frames, rendering each into `batch`
pub fn run(
    sim: &mut BunnySimulation,
    batch: &mut SpriteBatch,
    plan: &BenchPlan,
    dt: f32,
) -> BenchReport {
    let mut trigger = TriggerTracker::new();
    let mut tick_times = Vec::with_capacity(plan.frames as usize);
    let mut render_times = Vec::with_capacity(plan.frames as usize);

    log::info!(
        "Running {} frames, trigger held for frames {:?}",
        plan.frames,
        plan.hold
    );

    for frame in 0..plan.frames {
        let input = trigger.update(plan.hold.contains(&frame));

        let start = Instant::now();
        tick(sim, &input, dt);
        tick_times.push(start.elapsed());

        let start = Instant::now();
        sim.render(batch);
        render_times.push(start.elapsed());

        if frame > 0 && frame % 60 == 0 {
            log::debug!("Frame {}: {} bunnies", frame, sim.bunny_count());
        }
    }

    BenchReport {
        tick: FrameStats::from_times(tick_times),
        render: FrameStats::from_times(render_times),
        bunnies: sim.bunny_count(),
        last_frame_vertices: batch.vertices().len(),
    }
}
