//! Room population and clear tracking.
//!
//! The [`RoomDirector`] decides *what* a room gets; this module turns a
//! [`SpawnPlan`] into monster entities and feeds the live count back.
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::animationsheets::AnimationSheets;
use crate::components::boxcollider::BoxCollider;
use crate::components::framesequence::{FrameSequence, Playback};
use crate::components::mapposition::MapPosition;
use crate::components::monster::{Monster, MonsterKind};
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rooms::{RoomDirector, SpawnPlan};
use crate::resources::screensize::ScreenSize;
use crate::resources::sheetstore::SheetStore;

/// Hit points of the boss.
pub const BOSS_HP: i32 = 10;
/// Regular monsters roll their hit points in this range.
pub const MONSTER_HP: std::ops::RangeInclusive<i32> = 1..=6;
/// Top-left corner of the spawn area for regular monsters.
const SPAWN_MIN_X: i32 = 400;
const SPAWN_MIN_Y: i32 = 200;
/// Boss offset from the bottom-right corner of the play area.
const BOSS_OFFSET: Vector2 = Vector2 { x: 500.0, y: 300.0 };

/// Spawn one monster of `kind` in `room` with its top-left corner at
/// `position`. Returns `None` if the walk sheet is not loaded.
pub fn spawn_monster(
    commands: &mut Commands,
    sheets: &SheetStore,
    playback: Playback,
    kind: MonsterKind,
    hp: i32,
    room: usize,
    position: Vector2,
) -> Option<Entity> {
    let Some(walk) = sheets.get(kind.walk_sheet()) else {
        warn!("Cannot spawn {:?}: sheet '{}' not loaded", kind, kind.walk_sheet());
        return None;
    };
    let facing = walk.facing();
    let entity = commands
        .spawn((
            Monster::new(kind, hp, room, facing),
            MapPosition::new(position.x, position.y),
            BoxCollider::square(playback.frame_size),
            FrameSequence::build(walk, playback, facing),
            AnimationSheets::new(kind.walk_sheet(), kind.attack_sheet()),
            ZIndex::MONSTERS,
        ))
        .id();
    Some(entity)
}

fn roll(rng: &mut fastrand::Rng, low: i32, high: i32) -> f32 {
    rng.i32(low..=high.max(low)) as f32
}

/// Create the monsters a room entry asked for. Returns how many were spawned.
pub fn spawn_room_monsters(
    commands: &mut Commands,
    plan: SpawnPlan,
    room: usize,
    sheets: &SheetStore,
    config: &GameConfig,
    screen: ScreenSize,
    rng: &mut fastrand::Rng,
) -> usize {
    let playback = config.playback();
    let size = playback.frame_size as i32;
    match plan {
        SpawnPlan::Nothing => 0,
        SpawnPlan::Monsters(count) => {
            let mut spawned = 0;
            for _ in 0..count {
                let kind = MonsterKind::REGULAR[rng.usize(..MonsterKind::REGULAR.len())];
                let hp = rng.i32(MONSTER_HP);
                let position = Vector2 {
                    x: roll(rng, SPAWN_MIN_X, screen.w - size),
                    y: roll(rng, SPAWN_MIN_Y, screen.h - size),
                };
                if spawn_monster(commands, sheets, playback, kind, hp, room, position).is_some() {
                    spawned += 1;
                }
            }
            info!("Spawned {} monster(s) in room {}", spawned, room);
            spawned
        }
        SpawnPlan::Boss => {
            let position = Vector2 {
                x: screen.width() - BOSS_OFFSET.x,
                y: screen.height() - BOSS_OFFSET.y,
            };
            let spawned = spawn_monster(
                commands,
                sheets,
                playback,
                MonsterKind::Boss,
                BOSS_HP,
                room,
                position,
            )
            .is_some();
            info!("Boss spawned in room {}", room);
            usize::from(spawned)
        }
    }
}

/// Report the live monsters of the current room to the director.
pub fn room_clear_system(mut rooms: ResMut<RoomDirector>, monsters: Query<&Monster>) {
    let room = rooms.current_index();
    let live = monsters
        .iter()
        .filter(|m| m.room == room && !m.is_dead())
        .count();
    rooms.note_live_monsters(live);
}
