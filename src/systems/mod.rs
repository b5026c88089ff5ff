//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance every frame sequence once per tick
//! - [`button`] – hover feedback and click actions of screen buttons
//! - [`combat`] – strike sweeps, per-pixel contact and the strike observer
//! - [`gamestate`] – pending state transitions and run outcome
//! - [`hud`] – hearts display
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`monster`] – monster AI and removal
//! - [`player`] – steering, attack window and movement with room transitions
//! - [`render`] – draw the world and the debug overlay using Raylib
//! - [`rooms`] – room population and clear tracking
//! - [`tick`] – ordered gameplay step

pub mod animation;
pub mod button;
pub mod combat;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod monster;
pub mod player;
pub mod render;
pub mod rooms;
pub mod tick;
