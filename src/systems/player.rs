//! Player systems.
//!
//! - [`player_control_system`] turns input edges into steering and attacks.
//! - [`player_attack_system`] counts the attack window down.
//! - [`player_movement_system`] moves the player, walking through room edges
//!   when the [`RoomDirector`] allows it.
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animationsheets::AnimationSheets;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::framesequence::FrameSequence;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, Vertical};
use crate::events::combat::PlayerStrikeEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{BoolState, InputState};
use crate::resources::rooms::{RoomDirector, Side, Transition};
use crate::resources::screensize::ScreenSize;
use crate::resources::sheetstore::SheetStore;
use crate::resources::spawnrng::SpawnRng;
use crate::systems::combat::strike_origin;
use crate::systems::rooms::spawn_room_monsters;

/// How far the player may overhang a room edge before it counts as leaving.
pub const EDGE_SLACK: f32 = 20.0;

/// Horizontal steering from the two direction states.
///
/// Releasing a direction while the other one is still held turns around
/// instead of stopping.
fn steer_horizontal(
    player: &mut Player,
    frames: &mut FrameSequence,
    left: &BoolState,
    right: &BoolState,
) {
    if left.just_pressed {
        player.steer(Facing::Left, frames);
    }
    if right.just_pressed {
        player.steer(Facing::Right, frames);
    }
    if left.just_released {
        player.release(Facing::Left);
        if right.active && player.horizontal.is_none() {
            player.steer(Facing::Right, frames);
        }
    }
    if right.just_released {
        player.release(Facing::Right);
        if left.active && player.horizontal.is_none() {
            player.steer(Facing::Left, frames);
        }
    }
}

fn steer_vertical(player: &mut Player, up: &BoolState, down: &BoolState) {
    if up.just_pressed {
        player.steer_vertical(Vertical::Up);
    }
    if down.just_pressed {
        player.steer_vertical(Vertical::Down);
    }
    if up.just_released {
        player.release_vertical(Vertical::Up);
        if down.active {
            player.steer_vertical(Vertical::Down);
        }
    }
    if down.just_released {
        player.release_vertical(Vertical::Down);
        if up.active {
            player.steer_vertical(Vertical::Up);
        }
    }
}

/// Apply this frame's input to the player.
///
/// A strike is triggered only on the tick an attack actually starts.
pub fn player_control_system(
    mut commands: Commands,
    input: Res<InputState>,
    sheets: Res<SheetStore>,
    config: Res<GameConfig>,
    mut players: Query<(
        &mut Player,
        &mut FrameSequence,
        &AnimationSheets,
        &MapPosition,
        &BoxCollider,
    )>,
) {
    let Ok((mut player, mut frames, anim, position, collider)) = players.single_mut() else {
        return;
    };

    steer_horizontal(&mut player, &mut frames, &input.left, &input.right);
    steer_vertical(&mut player, &input.up, &input.down);

    if input.attack.just_pressed {
        let Some(attack_sheet) = sheets.get(&anim.attack) else {
            warn!("Missing attack sheet '{}'", anim.attack);
            return;
        };
        if player.begin_attack(&mut frames, attack_sheet, config.playback()) {
            let strike = PlayerStrikeEvent {
                origin: strike_origin(position.pos, collider, player.facing),
                facing: player.facing,
                damage: player.damage(),
                reach: config.attack_reach,
            };
            debug!("Player strikes {:?}", strike);
            commands.trigger(strike);
        }
    }
}

/// Count the running attack and restore the walk animation when it ends.
pub fn player_attack_system(
    sheets: Res<SheetStore>,
    config: Res<GameConfig>,
    mut players: Query<(&mut Player, &mut FrameSequence, &AnimationSheets)>,
) {
    let Ok((mut player, mut frames, anim)) = players.single_mut() else {
        return;
    };
    if !player.attacking {
        return;
    }
    let Some(walk_sheet) = sheets.get(&anim.walk) else {
        warn!("Missing walk sheet '{}'", anim.walk);
        return;
    };
    player.tick_attack(
        &mut frames,
        walk_sheet,
        config.playback(),
        config.player_attack_ticks,
    );
}

/// Move the player one step on each held axis.
///
/// Crossing the left or right edge asks the director for the neighbouring
/// room. On success the player re-enters from the opposite edge and the new
/// room is populated; otherwise the step is undone. Vertical movement is
/// clamped to the play area.
#[allow(clippy::too_many_arguments)]
pub fn player_movement_system(
    mut commands: Commands,
    mut players: Query<(&Player, &mut MapPosition, &BoxCollider)>,
    mut rooms: ResMut<RoomDirector>,
    mut rng: ResMut<SpawnRng>,
    sheets: Res<SheetStore>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
) {
    let Ok((player, mut position, collider)) = players.single_mut() else {
        return;
    };
    let step = player.step();
    let width = screen.width();
    let height = screen.height();

    if let Some(direction) = player.horizontal {
        let dx = direction.sign() * step;
        position.pos.x += dx;

        let crossing = if position.pos.x + collider.width - EDGE_SLACK > width {
            Some(Side::Right)
        } else if position.pos.x <= -EDGE_SLACK {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = crossing {
            match rooms.request_transition(side, &mut rng.0) {
                Transition::Entered { index, spawn } => {
                    position.pos.x = match side {
                        Side::Right => 0.0,
                        Side::Left => width - collider.width + EDGE_SLACK,
                    };
                    spawn_room_monsters(
                        &mut commands,
                        spawn,
                        index,
                        &sheets,
                        &config,
                        *screen,
                        &mut rng.0,
                    );
                }
                Transition::Denied(reason) => {
                    debug!("Blocked at {:?} edge: {:?}", side, reason);
                    position.pos.x -= dx;
                }
            }
        }
    }

    if let Some(direction) = player.vertical {
        let dy = match direction {
            Vertical::Up => -step,
            Vertical::Down => step,
        };
        let max_y = (height - collider.height).max(0.0);
        position.pos.y = (position.pos.y + dy).clamp(0.0, max_y);
    }
}
