//! Heart icons of the health HUD.
//!
//! Hearts are laid out right-to-left from the top-right corner. Slot 0 is the
//! right-most heart; health is lost from the left, so slot `i` shows broken
//! once health drops to `i` or below.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Side length of a heart icon.
pub const HEART_SIZE: f32 = 128.0;
/// Gap between the right-most heart and the play-area edge.
const RIGHT_MARGIN: f32 = 5.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heart {
    pub slot: usize,
}

impl Heart {
    pub fn is_broken(&self, health: i32) -> bool {
        self.slot as i32 >= health.max(0)
    }
}

/// Top-left corner of the heart in `slot`.
pub fn heart_position(slot: usize, area_width: f32) -> Vector2 {
    Vector2 {
        x: area_width - RIGHT_MARGIN - HEART_SIZE * (slot as f32 + 1.0),
        y: 0.0,
    }
}
