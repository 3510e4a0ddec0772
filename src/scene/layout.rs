//! Where each sprite goes, computed from ground state and column index
//!
//! Column `i` is drawn at `x = i * tile_width - scroll_offset`. The ground tile
//! sits at the column's height; the earth fill starts one tile below and spans
//! `tiles_y` tiles.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::instance::SpriteInstance;
use crate::sim::{GroundSnapshot, Simulator};
use crate::tuning::Tuning;

/// Named atlas regions the host must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Gopher,
    Ground,
    Earth,
}

impl SpriteKind {
    pub fn region_name(&self) -> &'static str {
        match self {
            SpriteKind::Gopher => "gopher",
            SpriteKind::Ground => "ground",
            SpriteKind::Earth => "earth",
        }
    }
}

/// A sprite's top-left corner and size in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sprite: SpriteKind,
    pub origin: Vec2,
    pub size: Vec2,
}

/// Read access to what the renderer needs: heights and the scroll offset
pub trait GroundView {
    fn heights(&self) -> &[f32];
    fn scroll_offset(&self) -> f32;
}

impl<R: Rng> GroundView for Simulator<R> {
    fn heights(&self) -> &[f32] {
        self.state().heights()
    }

    fn scroll_offset(&self) -> f32 {
        self.state().scroll_offset
    }
}

impl GroundView for GroundSnapshot {
    fn heights(&self) -> &[f32] {
        &self.heights
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}

/// Render query over a ground view
pub struct Layout<'a, V: GroundView + ?Sized> {
    view: &'a V,
    tuning: &'a Tuning,
}

impl<'a, V: GroundView + ?Sized> Layout<'a, V> {
    pub fn new(view: &'a V, tuning: &'a Tuning) -> Self {
        Self { view, tuning }
    }

    pub fn columns(&self) -> usize {
        self.view.heights().len()
    }

    fn column_x(&self, i: usize) -> f32 {
        i as f32 * self.tuning.tile_width - self.view.scroll_offset()
    }

    /// Top-left of the ground tile in column `i`
    pub fn ground_position(&self, i: usize) -> Option<Vec2> {
        let height = *self.view.heights().get(i)?;
        Some(Vec2::new(self.column_x(i), height))
    }

    /// Top-left of the earth fill under column `i`
    pub fn earth_position(&self, i: usize) -> Option<Vec2> {
        let height = *self.view.heights().get(i)?;
        Some(Vec2::new(self.column_x(i), height + self.tuning.tile_height))
    }

    /// The gopher does not move with the scroll
    pub fn gopher_position(&self) -> Vec2 {
        Vec2::new(self.tuning.gopher_column as f32 * self.tuning.tile_width, 0.0)
    }

    fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tuning.tile_width, self.tuning.tile_height)
    }

    fn earth_size(&self) -> Vec2 {
        Vec2::new(
            self.tuning.tile_width,
            self.tuning.tile_height * self.tuning.tiles_y as f32,
        )
    }

    /// Every sprite for the frame: gopher, then ground tiles, then earth fills
    pub fn placements(&self) -> Vec<Placement> {
        let columns = self.columns();
        let mut out = Vec::with_capacity(1 + 2 * columns);

        out.push(Placement {
            sprite: SpriteKind::Gopher,
            origin: self.gopher_position(),
            size: self.tile_size(),
        });
        out.extend((0..columns).filter_map(|i| {
            self.ground_position(i).map(|origin| Placement {
                sprite: SpriteKind::Ground,
                origin,
                size: self.tile_size(),
            })
        }));
        out.extend((0..columns).filter_map(|i| {
            self.earth_position(i).map(|origin| Placement {
                sprite: SpriteKind::Earth,
                origin,
                size: self.earth_size(),
            })
        }));
        out
    }

    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.placements().iter().map(SpriteInstance::from).collect()
    }
}
