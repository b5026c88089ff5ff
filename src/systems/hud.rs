//! Hearts HUD.
//!
//! Heart images are recomputed from the player's health every tick, so the
//! HUD can never drift from the actual value.

use bevy_ecs::prelude::*;

use crate::assets::keys;
use crate::components::heart::Heart;
use crate::components::player::Player;
use crate::components::visual::StaticImage;

pub fn hearts_system(players: Query<&Player>, mut hearts: Query<(&Heart, &mut StaticImage)>) {
    let Ok(player) = players.single() else {
        return;
    };
    for (heart, mut image) in hearts.iter_mut() {
        let key = if heart.is_broken(player.health) {
            keys::HEART_BROKEN
        } else {
            keys::HEART
        };
        if image.tex_key.as_ref() != key {
            image.set_texture(key);
        }
    }
}
