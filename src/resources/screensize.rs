//! Play area size resource.
//!
//! The play area is the whole window. Movement clamping, room edges, spawn
//! ranges and HUD layout all read it.

use bevy_ecs::prelude::Resource;

/// Current play area size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
