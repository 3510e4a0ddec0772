//! Gopher Run - an endless-runner ground simulation
//!
//! Core modules:
//! - `sim`: Deterministic scroll/ground simulation (ticks, tile recycling)
//! - `scene`: Render query surface (tile placements, sprite instances)
//! - `platform`: Host time to discrete tick conversion
//! - `tuning`: Data-driven simulation constants

pub mod error;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use sim::{GroundSnapshot, GroundState, Simulator};
pub use tuning::Tuning;

/// Default simulation constants
pub mod consts {
    /// Simulation ticks per second of host time
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Tile size in world units
    pub const TILE_WIDTH: f32 = 16.0;
    pub const TILE_HEIGHT: f32 = 16.0;

    /// Visible tile grid
    pub const TILES_X: usize = 16;
    pub const TILES_Y: usize = 16;

    /// Off-screen columns kept past the visible grid
    pub const BUFFER_COLUMNS: usize = 3;

    /// Ground height range (vertical offset of a tile's top edge)
    pub const GROUND_MIN: f32 = 96.0;
    pub const GROUND_MAX: f32 = TILE_HEIGHT * TILES_Y as f32;
    /// Height every column starts at
    pub const INIT_GROUND_Y: f32 = TILE_HEIGHT * (TILES_Y - 1) as f32;

    /// Scroll distance per tick at reset
    pub const INIT_SCROLL_VELOCITY: f32 = 1.0;
    /// Scroll velocity gained per tick
    pub const SCROLL_ACCELERATION: f32 = 0.001;
    /// Velocity ceiling in tile widths per tick. Below 2^24 tile widths an f32
    /// offset still steps by whole tiles.
    pub const MAX_SCROLL_TILES_PER_TICK: f32 = 1_048_576.0;

    /// One in N recycled tiles gets a new random height (0 = never)
    pub const GROUND_CHANGE_PROB: u32 = 5;

    /// Column the gopher sprite stands on
    pub const GOPHER_COLUMN: usize = 1;
}
