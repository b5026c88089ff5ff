//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup; a missing file or key keeps the default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1920
//! height = 1080
//! target_fps = 60
//! fullscreen = false
//!
//! [gameplay]
//! player_speed = 7
//! player_health = 5
//! player_damage = 1
//! player_attack_ticks = 20
//! attack_reach = 150
//! monster_speed = 3
//! monster_hit_tick = 50
//! monster_recover_tick = 80
//!
//! [assets]
//! dir = ./data
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::framesequence::Playback;
use crate::components::monster::AttackTimings;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1920;
const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_PLAYER_SPEED: f32 = 7.0;
const DEFAULT_PLAYER_HEALTH: i32 = 5;
const DEFAULT_PLAYER_DAMAGE: i32 = 1;
const DEFAULT_PLAYER_ATTACK_TICKS: u32 = 20;
const DEFAULT_ATTACK_REACH: u32 = 150;
const DEFAULT_MONSTER_SPEED: f32 = 3.0;
const DEFAULT_MONSTER_HIT_TICK: u32 = 50;
const DEFAULT_MONSTER_RECOVER_TICK: u32 = 80;
const DEFAULT_FRAME_SIZE: f32 = 150.0;
const DEFAULT_ASSETS_DIR: &str = "./data";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window (and play area) width in pixels.
    pub window_width: u32,
    /// Window (and play area) height in pixels.
    pub window_height: u32,
    /// Target frames per second; also the animation tick rate.
    pub target_fps: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    pub player_speed: f32,
    pub player_health: i32,
    pub player_damage: i32,
    /// Ticks the player attack pose lasts.
    pub player_attack_ticks: u32,
    /// Length of the strike sweep in pixels.
    pub attack_reach: u32,
    pub monster_speed: f32,
    pub monster_hit_tick: u32,
    pub monster_recover_tick: u32,
    /// On-screen size of every character frame.
    pub frame_size: f32,
    /// Directory images and the sprite catalog are read from.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: DEFAULT_FULLSCREEN,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_health: DEFAULT_PLAYER_HEALTH,
            player_damage: DEFAULT_PLAYER_DAMAGE,
            player_attack_ticks: DEFAULT_PLAYER_ATTACK_TICKS,
            attack_reach: DEFAULT_ATTACK_REACH,
            monster_speed: DEFAULT_MONSTER_SPEED,
            monster_hit_tick: DEFAULT_MONSTER_HIT_TICK,
            monster_recover_tick: DEFAULT_MONSTER_RECOVER_TICK,
            frame_size: DEFAULT_FRAME_SIZE,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = (fps as u32).max(1);
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [gameplay] section
        if let Some(speed) = config.getfloat("gameplay", "player_speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(health) = config.getint("gameplay", "player_health").ok().flatten() {
            self.player_health = (health as i32).max(1);
        }
        if let Some(damage) = config.getint("gameplay", "player_damage").ok().flatten() {
            self.player_damage = damage as i32;
        }
        if let Some(ticks) = config
            .getuint("gameplay", "player_attack_ticks")
            .ok()
            .flatten()
        {
            self.player_attack_ticks = ticks as u32;
        }
        if let Some(reach) = config.getuint("gameplay", "attack_reach").ok().flatten() {
            self.attack_reach = reach as u32;
        }
        if let Some(speed) = config.getfloat("gameplay", "monster_speed").ok().flatten() {
            self.monster_speed = speed as f32;
        }
        if let Some(tick) = config.getuint("gameplay", "monster_hit_tick").ok().flatten() {
            self.monster_hit_tick = tick as u32;
        }
        if let Some(tick) = config
            .getuint("gameplay", "monster_recover_tick")
            .ok()
            .flatten()
        {
            self.monster_recover_tick = tick as u32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fullscreen={}, assets={:?}",
            self.window_width, self.window_height, self.target_fps, self.fullscreen, self.assets_dir
        );
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Frame size and tick rate used to build every
    /// [`FrameSequence`](crate::components::framesequence::FrameSequence).
    pub fn playback(&self) -> Playback {
        Playback {
            frame_size: self.frame_size,
            tick_rate: self.target_fps,
        }
    }

    pub fn monster_timings(&self) -> AttackTimings {
        AttackTimings {
            hit_tick: self.monster_hit_tick,
            recover_tick: self.monster_recover_tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1920, 1080));
        assert_eq!(config.playback(), Playback::default());
        assert_eq!(config.monster_timings(), AttackTimings::default());
        assert_eq!(config.player_attack_ticks, 20);
        assert_eq!(config.attack_reach, 150);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[gameplay]\nmonster_recover_tick = 100\nplayer_speed = 9.5\n")
            .unwrap();
        assert_eq!(config.monster_recover_tick, 100);
        assert_eq!(config.player_speed, 9.5);
        assert_eq!(config.monster_hit_tick, 50);
        assert_eq!(config.window_width, 1920);
    }

    #[test]
    fn test_window_and_assets_sections() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1280\nheight = 720\nfullscreen = true\n\n\
                 [assets]\ndir = /opt/slime\n",
            )
            .unwrap();
        assert_eq!(config.window_size(), (1280, 720));
        assert!(config.fullscreen);
        assert_eq!(config.assets_dir, PathBuf::from("/opt/slime"));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[gameplay]\nplayer_health = lots\n")
            .unwrap();
        assert_eq!(config.player_health, 5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/slimerush/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player_health, 5);
    }
}
