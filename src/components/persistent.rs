//! Marker for entities that survive screen changes.
//!
//! Entering a new [`GameStates`](crate::resources::gamestate::GameStates)
//! despawns every entity that lacks this marker. Observers and registered
//! state hooks are entities too, so they carry it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Persistent;
