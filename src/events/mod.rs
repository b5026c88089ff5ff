//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`combat`] – a player strike to be resolved against monsters
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod combat;
pub mod gamestate;
pub mod switchdebug;
