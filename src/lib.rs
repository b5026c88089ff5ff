//! Slime Rush library.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use in integration tests.

pub mod assets;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
