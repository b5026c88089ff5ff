//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard and mouse state relevant to the game
//! - `rooms` – the Room Director: room chain, clear state and transitions
//! - `screensize` – play area dimensions in pixels
//! - `sheetstore` – sprite sheet grids and opacity masks
//! - `spawnrng` – seedable random source for spawns
//! - `systemsstore` – registry of state enter hooks by name
//! - `texturestore` – loaded textures keyed by name
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rooms;
pub mod screensize;
pub mod sheetstore;
pub mod spawnrng;
pub mod systemsstore;
pub mod texturestore;
