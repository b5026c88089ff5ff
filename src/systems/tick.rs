//! The per-frame gameplay step.
//!
//! [`add_gameplay_systems`] installs the gameplay systems in their fixed
//! order; they only run while [`GameStates::Playing`](crate::resources::gamestate::GameStates).
//! Chaining puts a sync point after every system that queues commands, so a
//! strike triggered by the control system is resolved before the death sweep,
//! and despawns are applied before the room is counted.
//!
//! Order: control, attack window, deaths, room clear, movement and room
//! transitions, monster AI, animation, hearts, outcome.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::persistent::Persistent;
use crate::systems::animation::animation_system;
use crate::systems::combat::player_strike_observer;
use crate::systems::gamestate::{outcome_system, state_is_playing};
use crate::systems::hud::hearts_system;
use crate::systems::monster::{monster_ai_system, monster_death_system};
use crate::systems::player::{player_attack_system, player_control_system, player_movement_system};
use crate::systems::rooms::room_clear_system;

pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            player_control_system,
            player_attack_system,
            monster_death_system,
            room_clear_system,
            player_movement_system,
            monster_ai_system,
            animation_system,
            hearts_system,
            outcome_system,
        )
            .chain()
            .run_if(state_is_playing),
    );
}

/// Spawn the observers gameplay relies on.
pub fn register_gameplay_observers(world: &mut World) {
    world.spawn((Observer::new(player_strike_observer), Persistent));
    world.flush();
}
