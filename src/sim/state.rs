//! Simulation state
//!
//! All state that must be persisted for Continue/determinism lives here.
//! The RNG is owned by the `Simulator`, not by this struct.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tuning::Tuning;

/// Scroll kinematics plus the ground-height ring of tile columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundState {
    /// Highest tick already simulated
    pub tick: u64,
    /// Scroll not yet consumed by a tile recycle
    pub scroll_offset: f32,
    /// Scroll distance per tick
    pub scroll_velocity: f32,
    /// Tiles recycled since reset
    pub tiles_recycled: u64,
    /// Column heights, leftmost (oldest) first. Length is fixed.
    heights: Vec<f32>,
}

impl GroundState {
    /// Fresh state for the given tuning: flat ground at `init_ground_y`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tick: 0,
            scroll_offset: 0.0,
            scroll_velocity: tuning.init_scroll_velocity,
            tiles_recycled: 0,
            heights: vec![tuning.init_ground_y; tuning.ground_columns()],
        }
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Height of the rightmost (newest) column
    pub fn newest_height(&self) -> f32 {
        // Length is fixed at construction and never zero for validated tuning
        self.heights.last().copied().unwrap_or_default()
    }

    /// Drop column 0, shift everything left, append `height` on the right
    pub(crate) fn push_column(&mut self, height: f32) {
        if let Some(last) = self.heights.len().checked_sub(1) {
            self.heights.copy_within(1.., 0);
            self.heights[last] = height;
        }
    }

    /// Check a deserialized state against the tuning it will run under
    pub fn check(&self, tuning: &Tuning) -> Result<()> {
        let expected = tuning.ground_columns();
        if self.heights.len() != expected {
            return Err(Error::StateMismatch {
                expected,
                found: self.heights.len(),
            });
        }
        if let Some((index, &height)) = self
            .heights
            .iter()
            .enumerate()
            .find(|(_, h)| !tuning.height_in_range(**h))
        {
            return Err(Error::HeightOutOfRange { index, height });
        }
        // Range checks are false for NaN, so non-finite values are rejected too
        if !(0.0..=tuning.tile_width).contains(&self.scroll_offset) {
            return Err(Error::ScrollOffsetOutOfRange {
                offset: self.scroll_offset,
                tile_width: tuning.tile_width,
            });
        }
        let max = tuning.max_scroll_velocity();
        if !(0.0..=max).contains(&self.scroll_velocity) {
            return Err(Error::ScrollVelocityOutOfRange {
                velocity: self.scroll_velocity,
                max,
            });
        }
        Ok(())
    }
}
