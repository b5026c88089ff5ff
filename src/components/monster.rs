//! Monster state and chase/attack state machine.
//!
//! A monster chases the player one fixed step per axis per tick. Once the two
//! collision masks overlap it plants itself and runs an attack window: the
//! blow lands at the hit tick if the player is still in contact, and the
//! monster recovers into the chase at the recover tick no matter what.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::assets::keys;
use crate::components::facing::Facing;
use crate::components::framesequence::FrameSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterKind {
    Ratatouille,
    Skeleton,
    Zombie,
    Boss,
}

impl MonsterKind {
    /// Kinds that populate ordinary rooms.
    pub const REGULAR: [MonsterKind; 3] = [
        MonsterKind::Ratatouille,
        MonsterKind::Skeleton,
        MonsterKind::Zombie,
    ];

    pub fn walk_sheet(self) -> &'static str {
        match self {
            MonsterKind::Ratatouille => keys::RATATOUILLE,
            MonsterKind::Skeleton => keys::SKELETON,
            MonsterKind::Zombie => keys::ZOMBIE,
            MonsterKind::Boss => keys::BOSS,
        }
    }

    pub fn attack_sheet(self) -> &'static str {
        match self {
            MonsterKind::Ratatouille => keys::RATATOUILLE_ATTACK,
            MonsterKind::Skeleton => keys::SKELETON_ATTACK,
            MonsterKind::Zombie => keys::ZOMBIE_ATTACK,
            MonsterKind::Boss => keys::BOSS_ATTACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterState {
    Chasing,
    Attacking { elapsed: u32 },
}

/// Tick marks of the attack window, counted from the tick contact is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackTimings {
    pub hit_tick: u32,
    pub recover_tick: u32,
}

impl Default for AttackTimings {
    fn default() -> Self {
        Self {
            hit_tick: 50,
            recover_tick: 80,
        }
    }
}

/// What a monster does this tick, as decided by [`Monster::think`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Keep chasing: take a step toward the player.
    Chase,
    /// Contact made this tick; attack window opened, no step.
    Engage,
    /// Inside the attack window, nothing happens.
    Hold,
    /// Hit tick reached: the blow lands if contact is still there.
    Strike,
    /// Window over: back to chasing from the next tick.
    Recover,
}

#[derive(Component, Debug, Clone)]
pub struct Monster {
    pub kind: MonsterKind,
    pub hp: i32,
    /// Index of the room this monster belongs to.
    pub room: usize,
    pub step_x: f32,
    pub step_y: f32,
    pub state: MonsterState,
    pub facing: Facing,
}

impl Monster {
    /// New chaser. `facing` should match the art of the walk sheet.
    pub fn new(kind: MonsterKind, hp: i32, room: usize, facing: Facing) -> Self {
        Self {
            kind,
            hp,
            room,
            step_x: 0.0,
            step_y: 0.0,
            state: MonsterState::Chasing,
            facing,
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.state, MonsterState::Attacking { .. })
    }

    /// Advance the state machine by one tick.
    pub fn think(&mut self, overlapping: bool, timings: AttackTimings) -> Beat {
        match self.state {
            MonsterState::Chasing => {
                if overlapping {
                    self.state = MonsterState::Attacking { elapsed: 0 };
                    Beat::Engage
                } else {
                    Beat::Chase
                }
            }
            MonsterState::Attacking { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= timings.recover_tick {
                    self.state = MonsterState::Chasing;
                    Beat::Recover
                } else {
                    self.state = MonsterState::Attacking { elapsed };
                    if elapsed == timings.hit_tick {
                        Beat::Strike
                    } else {
                        Beat::Hold
                    }
                }
            }
        }
    }

    /// Compute this tick's chase step toward `target` and store it.
    ///
    /// Each axis independently moves `speed` toward the target when it is
    /// strictly farther on that axis, otherwise 0. No diagonal normalisation.
    pub fn aim(&mut self, own: Vector2, target: Vector2, speed: f32) -> (f32, f32) {
        self.step_x = axis_step(own.x, target.x, speed);
        self.step_y = axis_step(own.y, target.y, speed);
        (self.step_x, self.step_y)
    }

    /// Turn toward the horizontal step, mirroring the frames on reversal.
    ///
    /// A zero step keeps the current facing. Returns whether a flip happened.
    pub fn face_step(&mut self, frames: &mut FrameSequence) -> bool {
        match Facing::from_step(self.step_x) {
            Some(direction) if direction != self.facing => {
                self.facing = direction;
                frames.flip_horizontal();
                true
            }
            _ => false,
        }
    }
}

fn axis_step(own: f32, target: f32, speed: f32) -> f32 {
    if target > own {
        speed
    } else if target < own {
        -speed
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::framesequence::Playback;
    use crate::resources::sheetstore::{AlphaMask, SpriteSheet};

    fn frames() -> FrameSequence {
        let sheet =
            SpriteSheet::new(keys::ZOMBIE, 4, 1, Facing::Left, AlphaMask::solid(40, 10)).unwrap();
        FrameSequence::build(&sheet, Playback::default(), Facing::Left)
    }

    #[test]
    fn test_chase_until_contact() {
        let mut m = Monster::new(MonsterKind::Zombie, 3, 1, Facing::Left);
        assert_eq!(m.think(false, AttackTimings::default()), Beat::Chase);
        assert_eq!(m.state, MonsterState::Chasing);
        assert_eq!(m.think(true, AttackTimings::default()), Beat::Engage);
        assert_eq!(m.state, MonsterState::Attacking { elapsed: 0 });
    }

    #[test]
    fn test_attack_window_beats() {
        let timings = AttackTimings::default();
        let mut m = Monster::new(MonsterKind::Skeleton, 3, 1, Facing::Left);
        m.think(true, timings);

        let mut beats = Vec::new();
        for _ in 0..80 {
            beats.push(m.think(false, timings));
        }
        assert!(beats[..49].iter().all(|b| *b == Beat::Hold));
        assert_eq!(beats[49], Beat::Strike);
        assert!(beats[50..79].iter().all(|b| *b == Beat::Hold));
        assert_eq!(beats[79], Beat::Recover);
        assert_eq!(m.state, MonsterState::Chasing);
    }

    #[test]
    fn test_recover_tick_is_configurable() {
        let timings = AttackTimings {
            hit_tick: 50,
            recover_tick: 100,
        };
        let mut m = Monster::new(MonsterKind::Ratatouille, 1, 0, Facing::Left);
        m.think(true, timings);
        for _ in 0..99 {
            assert_ne!(m.think(true, timings), Beat::Recover);
        }
        assert_eq!(m.think(true, timings), Beat::Recover);
    }

    #[test]
    fn test_aim_is_per_axis() {
        let mut m = Monster::new(MonsterKind::Zombie, 3, 1, Facing::Left);
        let own = Vector2 { x: 100.0, y: 100.0 };
        assert_eq!(m.aim(own, Vector2 { x: 200.0, y: 50.0 }, 3.0), (3.0, -3.0));
        assert_eq!(m.aim(own, Vector2 { x: 100.0, y: 300.0 }, 3.0), (0.0, 3.0));
        assert_eq!(m.aim(own, Vector2 { x: 100.0, y: 100.0 }, 3.0), (0.0, 0.0));
    }

    #[test]
    fn test_face_step_flips_only_on_reversal() {
        let mut m = Monster::new(MonsterKind::Zombie, 3, 1, Facing::Left);
        let mut seq = frames();
        m.step_x = -3.0;
        assert!(!m.face_step(&mut seq));
        m.step_x = 3.0;
        assert!(m.face_step(&mut seq));
        assert!(seq.is_flipped());
        assert!(!m.face_step(&mut seq));
        m.step_x = 0.0;
        assert!(!m.face_step(&mut seq));
        assert_eq!(m.facing, Facing::Right);
    }

    #[test]
    fn test_damage_and_death() {
        let mut m = Monster::new(MonsterKind::Boss, 10, 3, Facing::Left);
        m.take_damage(9);
        assert!(!m.is_dead());
        m.take_damage(1);
        assert!(m.is_dead());
    }
}
