//! Data-driven simulation constants
//!
//! Every number the simulator and the render query use lives here so a run
//! can be reproduced from a seed plus one JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Width of one ground tile (also the scroll unit)
    pub tile_width: f32,
    /// Height of one ground tile
    pub tile_height: f32,
    /// Visible tile columns
    pub tiles_x: usize,
    /// Visible tile rows (earth fill spans this many rows)
    pub tiles_y: usize,
    /// Lowest ground height a new tile may get
    pub ground_min: f32,
    /// Highest ground height a new tile may get
    pub ground_max: f32,
    /// Height of every column at reset
    pub init_ground_y: f32,
    /// Scroll distance per tick at reset
    pub init_scroll_velocity: f32,
    /// Scroll velocity gained per tick
    pub scroll_acceleration: f32,
    /// One in N recycled tiles gets a new random height; 0 disables changes
    pub ground_change_prob: u32,
    /// Column the gopher is drawn on
    pub gopher_column: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            tiles_x: TILES_X,
            tiles_y: TILES_Y,
            ground_min: GROUND_MIN,
            ground_max: GROUND_MAX,
            init_ground_y: INIT_GROUND_Y,
            init_scroll_velocity: INIT_SCROLL_VELOCITY,
            scroll_acceleration: SCROLL_ACCELERATION,
            ground_change_prob: GROUND_CHANGE_PROB,
            gopher_column: GOPHER_COLUMN,
        }
    }
}

impl Tuning {
    /// Number of ground columns held by the simulation (visible plus buffer)
    pub fn ground_columns(&self) -> usize {
        self.tiles_x + BUFFER_COLUMNS
    }

    /// Fastest scroll the simulator will run at
    pub fn max_scroll_velocity(&self) -> f32 {
        self.tile_width * MAX_SCROLL_TILES_PER_TICK
    }

    /// True if `height` is a legal ground height
    pub fn height_in_range(&self, height: f32) -> bool {
        (self.ground_min..=self.ground_max).contains(&height)
    }

    /// Parse and validate tuning from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check the constraints the simulator relies on
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("ground_min", self.ground_min),
            ("ground_max", self.ground_max),
            ("init_ground_y", self.init_ground_y),
            ("init_scroll_velocity", self.init_scroll_velocity),
            ("scroll_acceleration", self.scroll_acceleration),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{} is not finite", value)));
            }
        }

        if self.tile_width <= 0.0 {
            return Err(invalid("tile_width", "must be positive".into()));
        }
        if self.tile_height <= 0.0 {
            return Err(invalid("tile_height", "must be positive".into()));
        }
        if self.tiles_x == 0 {
            return Err(invalid("tiles_x", "must be at least 1".into()));
        }
        if self.tiles_y == 0 {
            return Err(invalid("tiles_y", "must be at least 1".into()));
        }
        if self.ground_min > self.ground_max {
            return Err(invalid(
                "ground_min",
                format!("{} exceeds ground_max {}", self.ground_min, self.ground_max),
            ));
        }
        if !self.height_in_range(self.init_ground_y) {
            return Err(invalid(
                "init_ground_y",
                format!(
                    "{} outside [{}, {}]",
                    self.init_ground_y, self.ground_min, self.ground_max
                ),
            ));
        }
        if self.init_scroll_velocity < 0.0 {
            return Err(invalid("init_scroll_velocity", "must not be negative".into()));
        }
        if self.scroll_acceleration < 0.0 {
            return Err(invalid("scroll_acceleration", "must not be negative".into()));
        }
        let max_velocity = self.max_scroll_velocity();
        if self.init_scroll_velocity > max_velocity {
            return Err(invalid(
                "init_scroll_velocity",
                format!("{} exceeds the ceiling {}", self.init_scroll_velocity, max_velocity),
            ));
        }
        if self.scroll_acceleration > max_velocity {
            return Err(invalid(
                "scroll_acceleration",
                format!("{} exceeds the velocity ceiling {}", self.scroll_acceleration, max_velocity),
            ));
        }
        if self.gopher_column >= self.tiles_x {
            return Err(invalid(
                "gopher_column",
                format!("{} is not a visible column (tiles_x = {})", self.gopher_column, self.tiles_x),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> Error {
    Error::InvalidTuning { field, reason }
}
