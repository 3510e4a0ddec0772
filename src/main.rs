//! Gopher Run entry point
//!
//! Headless native driver: runs the ground simulation against a simulated
//! 60 Hz frame clock and prints the final snapshot as JSON.
//!
//! Usage: `gopher-run [tuning.json] [seed] [seconds]`

use gopher_run::consts::TICKS_PER_SECOND;
use gopher_run::platform::{FrameClock, elapsed_for};
use gopher_run::scene::Layout;
use gopher_run::{Simulator, Tuning};

const DEFAULT_SEED: u64 = 2015;
const DEFAULT_SECONDS: u64 = 30;

fn main() {
    env_logger::init();
    log::info!("Gopher Run (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) if path != "-" => Tuning::load_or_default(&path),
        _ => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let seconds = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut sim = match Simulator::new(tuning, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Cannot start simulation: {}", e);
            std::process::exit(1);
        }
    };

    // One host frame per tick, as the frame callback would deliver them
    let mut clock = FrameClock::new();
    for frame in 1..=seconds.saturating_mul(TICKS_PER_SECOND) {
        let now = clock.observe(elapsed_for(frame));
        sim.advance(now);

        if now % TICKS_PER_SECOND == 0 {
            let state = sim.state();
            log::info!(
                "t={}s tick={} velocity={:.3} tiles={}",
                now / TICKS_PER_SECOND,
                state.tick,
                state.scroll_velocity,
                state.tiles_recycled
            );
        }
    }

    let sprites = Layout::new(&sim, sim.tuning()).instances();
    log::info!("Frame has {} sprites", sprites.len());

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}
