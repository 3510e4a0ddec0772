//! Owned simulator: state, tuning and the RNG that drives ground changes

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::snapshot::GroundSnapshot;
use super::state::GroundState;
use super::tick::advance;
use crate::error::Result;
use crate::tuning::Tuning;

/// The scroll/ground simulator.
///
/// Generic over the random source so tests can inject their own; the default
/// is a seeded `Pcg32`.
#[derive(Debug, Clone)]
pub struct Simulator<R = Pcg32> {
    tuning: Tuning,
    state: GroundState,
    rng: R,
    /// Set when built from a seed, so `reset` replays the same ground
    seed: Option<u64>,
}

impl Simulator<Pcg32> {
    /// Create a simulator seeded for reproducible ground
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self> {
        let mut sim = Self::with_rng(tuning, Pcg32::seed_from_u64(seed))?;
        sim.seed = Some(seed);
        log::info!("Simulator seeded with {}", seed);
        Ok(sim)
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator drawing from an arbitrary random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self> {
        tuning.validate()?;
        let state = GroundState::new(&tuning);
        Ok(Self {
            tuning,
            state,
            rng,
            seed: None,
        })
    }

    /// Continue from a previously saved state
    pub fn resume(tuning: Tuning, state: GroundState, rng: R) -> Result<Self> {
        tuning.validate()?;
        state.check(&tuning)?;
        log::info!("Resuming simulation at tick {}", state.tick);
        Ok(Self {
            tuning,
            state,
            rng,
            seed: None,
        })
    }

    /// Simulate every tick up to and including `now`. Returns the ticks run.
    pub fn advance(&mut self, now: u64) -> u64 {
        advance(&mut self.state, &self.tuning, &mut self.rng, now)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GroundState {
        &self.state
    }

    pub fn last_tick(&self) -> u64 {
        self.state.tick
    }

    pub fn snapshot(&self) -> GroundSnapshot {
        GroundSnapshot::from(&self.state)
    }

    /// Back to the initial state. The RNG keeps its current stream.
    pub fn reset(&mut self) {
        self.state = GroundState::new(&self.tuning);
        log::info!("Simulation reset");
    }
}

impl<R: Rng + SeedableRng> Simulator<R> {
    /// Reset, and rewind the RNG to its seed so the same ground replays.
    /// Without a seed this is the same as `reset`.
    pub fn restart(&mut self) {
        self.reset();
        if let Some(seed) = self.seed {
            self.rng = R::seed_from_u64(seed);
            log::info!("RNG rewound to seed {}", seed);
        }
    }
}
