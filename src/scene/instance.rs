//! Sprite instance records for hosts that batch sprites into a GPU buffer

use bytemuck::{Pod, Zeroable};

use super::layout::{Placement, SpriteKind};

/// One sprite: world-space offset, scale, and atlas region index
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub offset: [f32; 2],
    pub scale: [f32; 2],
    pub region: u32,
    pub _pad: u32,
}

impl SpriteInstance {
    pub const fn new(offset: [f32; 2], scale: [f32; 2], region: u32) -> Self {
        Self {
            offset,
            scale,
            region,
            _pad: 0,
        }
    }
}

impl From<&Placement> for SpriteInstance {
    fn from(placement: &Placement) -> Self {
        Self::new(
            placement.origin.to_array(),
            placement.size.to_array(),
            placement.sprite.region(),
        )
    }
}

impl SpriteKind {
    /// Index of this sprite's region in the atlas
    pub const fn region(self) -> u32 {
        match self {
            SpriteKind::Gopher => 0,
            SpriteKind::Ground => 1,
            SpriteKind::Earth => 2,
        }
    }
}
