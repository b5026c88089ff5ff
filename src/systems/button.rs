//! Screen buttons.
//!
//! A button under the pointer shows its pressed image. A click on a hovered
//! button requests the game state its action leads to.

use bevy_ecs::prelude::*;
use log::info;

use crate::assets::keys;
use crate::components::boxcollider::BoxCollider;
use crate::components::button::{Button, ButtonAction};
use crate::components::mapposition::MapPosition;
use crate::components::visual::StaticImage;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;

/// State a button action leads to.
pub fn action_target(action: ButtonAction) -> GameStates {
    match action {
        ButtonAction::Start | ButtonAction::Restart => GameStates::Playing,
        ButtonAction::Exit => GameStates::Quitting,
    }
}

pub fn button_system(
    input: Res<InputState>,
    mut next_state: ResMut<NextGameState>,
    mut buttons: Query<(&mut Button, &MapPosition, &BoxCollider, &mut StaticImage)>,
) {
    for (mut button, position, collider, mut image) in buttons.iter_mut() {
        let hovered = collider.bounds(position.pos).contains(input.pointer);
        if button.hovered != hovered {
            button.hovered = hovered;
            image.set_texture(if hovered {
                keys::BUTTON_PRESSED
            } else {
                keys::BUTTON
            });
        }
        if hovered && input.attack.just_pressed {
            info!("Button '{}' clicked", button.label);
            next_state.set(action_target(button.action));
        }
    }
}
