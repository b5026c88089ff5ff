//! Monster AI and removal.
//!
//! - [`monster_ai_system`] runs the chase/attack machine of every monster in
//!   the current room against the player.
//! - [`monster_death_system`] despawns monsters whose hit points ran out.
//!   It runs right after strikes are resolved; the despawn is applied at the
//!   next sync point so nothing later in the tick sees a dead monster.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animationsheets::AnimationSheets;
use crate::components::framesequence::FrameSequence;
use crate::components::mapposition::MapPosition;
use crate::components::monster::{Beat, Monster};
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rooms::RoomDirector;
use crate::resources::sheetstore::SheetStore;
use crate::systems::combat::masks_overlap;

/// Advance every monster of the current room by one tick.
pub fn monster_ai_system(
    mut players: Query<(&mut Player, &MapPosition, &FrameSequence)>,
    mut monsters: Query<
        (
            &mut Monster,
            &mut MapPosition,
            &mut FrameSequence,
            &AnimationSheets,
        ),
        Without<Player>,
    >,
    rooms: Res<RoomDirector>,
    sheets: Res<SheetStore>,
    config: Res<GameConfig>,
) {
    let Ok((mut player, player_pos, player_frames)) = players.single_mut() else {
        return;
    };
    let room = rooms.current_index();
    let timings = config.monster_timings();
    let playback = config.playback();

    for (mut monster, mut position, mut frames, anim) in monsters.iter_mut() {
        if monster.room != room || monster.is_dead() {
            continue;
        }
        let overlapping = masks_overlap(
            frames.current(),
            position.pos,
            player_frames.current(),
            player_pos.pos,
        );

        match monster.think(overlapping, timings) {
            Beat::Chase => {
                let (dx, dy) = monster.aim(position.pos, player_pos.pos, config.monster_speed);
                monster.face_step(&mut frames);
                position.pos.x += dx;
                position.pos.y += dy;
            }
            Beat::Engage => {
                debug!("{:?} engages the player", monster.kind);
            }
            Beat::Hold => {}
            Beat::Strike => {
                if overlapping {
                    player.health -= 1;
                    info!(
                        "{:?} hits the player ({} health left)",
                        monster.kind, player.health
                    );
                    match sheets.get(&anim.attack) {
                        Some(sheet) => {
                            *frames = FrameSequence::build(sheet, playback, monster.facing)
                        }
                        None => warn!("Missing attack sheet '{}'", anim.attack),
                    }
                }
            }
            Beat::Recover => match sheets.get(&anim.walk) {
                Some(sheet) => *frames = FrameSequence::build(sheet, playback, monster.facing),
                None => warn!("Missing walk sheet '{}'", anim.walk),
            },
        }
    }
}

/// Despawn monsters with no hit points left.
pub fn monster_death_system(mut commands: Commands, monsters: Query<(Entity, &Monster)>) {
    for (entity, monster) in monsters.iter() {
        if monster.is_dead() {
            info!("{:?} in room {} defeated", monster.kind, monster.room);
            commands.entity(entity).despawn();
        }
    }
}
