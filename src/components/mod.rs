//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animationsheets`] – walk/attack sheet pairing for animated characters
//! - [`boxcollider`] – bounding rectangle and its geometry
//! - [`button`] – clickable screen buttons
//! - [`facing`] – horizontal facing shared by sheets and characters
//! - [`framesequence`] – tick-driven sprite sheet animation
//! - [`heart`] – health HUD icons
//! - [`mapposition`] – top-left position in the play area
//! - [`monster`] – monster state and its chase/attack machine
//! - [`persistent`] – marker for entities that survive screen changes
//! - [`player`] – the player character
//! - [`visual`] – renderer-facing view of animated and static images
//! - [`zindex`] – draw order

pub mod animationsheets;
pub mod boxcollider;
pub mod button;
pub mod facing;
pub mod framesequence;
pub mod heart;
pub mod mapposition;
pub mod monster;
pub mod persistent;
pub mod player;
pub mod visual;
pub mod zindex;
