//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks

pub mod time;

pub use time::{FrameClock, elapsed_for, ticks_for};
