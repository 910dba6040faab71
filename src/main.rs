//! Bunnymark entry point
//!
//! Runs the benchmark headless: loads settings, spawns the starting bunnies
//! and drives the simulation through a scripted trigger hold.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bunnymark::bench::{self, BenchPlan};
    use bunnymark::renderer::SpriteBatch;
    use bunnymark::sprite::runner_variants;
    use bunnymark::{BunnySimulation, Settings};

    env_logger::init();
    log::info!("Bunnymark starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let (window_w, window_h) = settings.window_size();
    log::info!(
        "World {}x{} (window {}x{}), {} ticks/s, seed {}",
        settings.screen_width,
        settings.screen_height,
        window_w,
        window_h,
        settings.ticks_per_second,
        settings.seed
    );

    let mut sim = BunnySimulation::from_settings(&settings, runner_variants());
    sim.generate_bunnies(settings.start_bunnies);
    log::info!("Spawned {} starting bunnies", sim.bunny_count());

    let plan = BenchPlan::default();
    let mut batch = SpriteBatch::with_capacity(
        settings.world_size(),
        settings
            .start_bunnies
            .saturating_add(plan.hold.len().saturating_mul(sim.spawn_count(settings.dt()))),
    );

    let report = bench::run(&mut sim, &mut batch, &plan, settings.dt());

    log::info!(
        "{} bunnies after {} frames",
        report.bunnies,
        report.tick.frame_count
    );
    log::info!(
        "tick   avg {:?}  p50 {:?}  p99 {:?}  max {:?}",
        report.tick.average(),
        report.tick.median(),
        report.tick.percentile(99),
        report.tick.max
    );
    log::info!(
        "render avg {:?}  p50 {:?}  p99 {:?}  max {:?}",
        report.render.average(),
        report.render.median(),
        report.render.percentile(99),
        report.render.max
    );
    log::info!(
        "frame  avg {:?}, last frame {} vertices ({} bytes)",
        report.average_frame(),
        report.last_frame_vertices,
        batch.as_bytes().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front-end; the library can still be embedded
}
