//! Deterministic simulation module
//!
//! All ground and scroll logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, replayed in order
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod simulator;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use simulator::Simulator;
pub use snapshot::GroundSnapshot;
pub use state::GroundState;
pub use tick::{advance, next_height, recycle_tile, tick};
