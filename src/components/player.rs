//! Player character state.
//!
//! The [`Player`] component holds health, combat stats, steering and the
//! melee attack window. Methods that change the look of the character take the
//! entity's [`FrameSequence`] so facing and animation stay in sync with the
//! state that drives them.

use bevy_ecs::prelude::Component;

use crate::components::facing::Facing;
use crate::components::framesequence::{FrameSequence, Playback};
use crate::resources::sheetstore::SpriteSheet;

/// Gear modifiers. Part of the character model, not granted by gameplay yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equipment {
    pub damage_bonus: i32,
    pub speed_bonus: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    pub fn opposite(self) -> Self {
        match self {
            Vertical::Up => Vertical::Down,
            Vertical::Down => Vertical::Up,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub health: i32,
    pub max_health: i32,
    pub base_damage: i32,
    pub speed: f32,
    /// Last direction the character turned to; survives key release.
    pub facing: Facing,
    /// Horizontal direction currently held, if any.
    pub horizontal: Option<Facing>,
    /// Vertical direction currently held, if any.
    pub vertical: Option<Vertical>,
    pub attacking: bool,
    pub attack_ticks: u32,
    pub equipment: Equipment,
}

impl Player {
    /// Fresh character at full health, looking left like the walk art.
    pub fn new(max_health: i32, base_damage: i32, speed: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            base_damage,
            speed,
            facing: Facing::Left,
            horizontal: None,
            vertical: None,
            attacking: false,
            attack_ticks: 0,
            equipment: Equipment::default(),
        }
    }

    /// Start moving horizontally.
    ///
    /// Frames are mirrored only when `direction` differs from the current
    /// facing, so holding or re-pressing the same key never flips again.
    pub fn steer(&mut self, direction: Facing, frames: &mut FrameSequence) {
        self.horizontal = Some(direction);
        if self.facing != direction {
            self.facing = direction;
            frames.flip_horizontal();
        }
    }

    /// Stop moving horizontally if `direction` is the one being held.
    pub fn release(&mut self, direction: Facing) {
        if self.horizontal == Some(direction) {
            self.horizontal = None;
        }
    }

    /// Start moving vertically unless the opposite direction is held.
    pub fn steer_vertical(&mut self, direction: Vertical) {
        if self.vertical != Some(direction.opposite()) {
            self.vertical = Some(direction);
        }
    }

    pub fn release_vertical(&mut self, direction: Vertical) {
        if self.vertical == Some(direction) {
            self.vertical = None;
        }
    }

    /// Damage dealt by one strike.
    pub fn damage(&self) -> i32 {
        self.base_damage + self.equipment.damage_bonus
    }

    /// Pixels moved per tick on each held axis.
    pub fn step(&self) -> f32 {
        self.speed + self.equipment.speed_bonus
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Swap to the attack animation and open the attack window.
    ///
    /// Returns `false` without touching anything if an attack is already
    /// running.
    pub fn begin_attack(
        &mut self,
        frames: &mut FrameSequence,
        attack_sheet: &SpriteSheet,
        playback: Playback,
    ) -> bool {
        if self.attacking {
            return false;
        }
        self.attacking = true;
        self.attack_ticks = 0;
        *frames = FrameSequence::build(attack_sheet, playback, self.facing);
        true
    }

    /// Count one tick of the attack window.
    ///
    /// Once the count exceeds `window` the walk animation is restored with the
    /// current facing. Returns `true` on the tick the attack ends.
    pub fn tick_attack(
        &mut self,
        frames: &mut FrameSequence,
        walk_sheet: &SpriteSheet,
        playback: Playback,
        window: u32,
    ) -> bool {
        if !self.attacking {
            return false;
        }
        self.attack_ticks += 1;
        if self.attack_ticks > window {
            self.attacking = false;
            self.attack_ticks = 0;
            *frames = FrameSequence::build(walk_sheet, playback, self.facing);
            return true;
        }
        false
    }
}
