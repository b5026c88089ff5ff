//! Player strike event.
//!
//! Triggered on the tick an attack starts. The observer
//! [`player_strike_observer`](crate::systems::combat::player_strike_observer)
//! sweeps the strike through the monsters of the current room.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::facing::Facing;

/// One melee activation by the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerStrikeEvent {
    /// Leading corner of the player's bounds the sweep starts from.
    pub origin: Vector2,
    pub facing: Facing,
    pub damage: i32,
    /// Number of sweep steps.
    pub reach: u32,
}
