//! Render query surface
//!
//! Turns simulation state into sprite placements. No drawing happens here;
//! the host owns textures and the frame.

pub mod instance;
pub mod layout;

pub use instance::SpriteInstance;
pub use layout::{GroundView, Layout, Placement, SpriteKind};
