//! Errors for the fallible edges: loading tuning and resuming saved state.
//!
//! The simulation itself never fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("ground buffer has {found} columns, tuning expects {expected}")]
    StateMismatch { expected: usize, found: usize },

    #[error("ground height {height} at column {index} is outside the tuned range")]
    HeightOutOfRange { index: usize, height: f32 },

    #[error("scroll offset {offset} is outside [0, {tile_width}]")]
    ScrollOffsetOutOfRange { offset: f32, tile_width: f32 },

    #[error("scroll velocity {velocity} is outside [0, {max}]")]
    ScrollVelocityOutOfRange { velocity: f32, max: f32 },
}
