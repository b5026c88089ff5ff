//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::{SystemsStore, enter_hook_name};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// The enter hook is looked up in [`SystemsStore`] under
/// [`enter_hook_name`]. States without a hook are entered silently.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                info!(
                    "Transitioning from {:?} to {:?}",
                    game_state.get(),
                    new_state
                );
                game_state.set(new_state);
                next_game_state.reset();
                on_state_enter(new_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. \
             next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run the enter hook registered for `state`, if any.
fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let name = enter_hook_name(state);
    match systems_store.get(&name) {
        Some(id) => commands.run_system(*id),
        None => debug!("No enter hook '{}' for {:?}", name, state),
    }
}
