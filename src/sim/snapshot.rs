//! Between-tick copy of the simulation for a renderer that runs elsewhere

use serde::{Deserialize, Serialize};

use super::state::GroundState;

/// Immutable view of one simulated tick. Owned, so it can cross threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundSnapshot {
    pub tick: u64,
    pub scroll_offset: f32,
    pub scroll_velocity: f32,
    pub heights: Vec<f32>,
}

impl From<&GroundState> for GroundSnapshot {
    fn from(state: &GroundState) -> Self {
        Self {
            tick: state.tick,
            scroll_offset: state.scroll_offset,
            scroll_velocity: state.scroll_velocity,
            heights: state.heights().to_vec(),
        }
    }
}
