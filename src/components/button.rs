//! Clickable screen buttons.

use bevy_ecs::prelude::Component;

/// Button image size.
pub const BUTTON_WIDTH: f32 = 384.0;
pub const BUTTON_HEIGHT: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Start a new run from the title screen.
    Start,
    /// Start over after game over or victory.
    Restart,
    Exit,
}

#[derive(Component, Debug, Clone)]
pub struct Button {
    pub action: ButtonAction,
    pub label: String,
    pub hovered: bool,
}

impl Button {
    pub fn new(action: ButtonAction, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
            hovered: false,
        }
    }
}
