//! Game state systems.
//!
//! - [`check_pending_state`] turns a pending [`NextGameState`] into a
//!   [`GameStateChangedEvent`].
//! - [`outcome_system`] ends a run on player death or when the terminal room
//!   is cleared.
use crate::components::player::Player;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::rooms::RoomDirector;
use bevy_ecs::prelude::*;
use log::info;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// Request game over or victory once the run is decided.
pub fn outcome_system(
    players: Query<&Player>,
    rooms: Res<RoomDirector>,
    mut next_state: ResMut<NextGameState>,
) {
    if *next_state.get() != NextGameStates::Unchanged {
        return;
    }
    if let Ok(player) = players.single()
        && player.is_dead()
    {
        info!("Player died in room {}", rooms.current_index());
        next_state.set(GameStates::GameOver);
        return;
    }
    if rooms.is_won() {
        info!("Boss room cleared");
        next_state.set(GameStates::Victory);
    }
}
