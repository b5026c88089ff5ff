//! Render system.
//!
//! Draws every entity that has a [`Visual`] at its [`MapPosition`], ordered by
//! [`ZIndex`]. Flipped frames are drawn with a negative source width. Button
//! labels go on top of their images, and the debug overlay (toggled with F11)
//! outlines colliders and prints the game state.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::Button;
use crate::components::framesequence::FrameSequence;
use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::components::player::Player;
use crate::components::visual::{DrawSource, StaticImage, Visual};
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::GameState;
use crate::resources::rooms::RoomDirector;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const LABEL_FONT_SIZE: i32 = 40;
const DEBUG_FONT_SIZE: i32 = 20;

/// Source rectangle inside `tex` for a draw request.
fn source_rect(draw: &DrawSource, tex: &Texture2D) -> Rectangle {
    let mut src = match draw.source {
        Some(cell) => Rectangle {
            x: cell.x as f32,
            y: cell.y as f32,
            width: cell.w as f32,
            height: cell.h as f32,
        },
        None => Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        },
    };
    if draw.flipped {
        src.width = -src.width;
    }
    src
}

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    screen: Res<ScreenSize>,
    state: Res<GameState>,
    rooms: Option<Res<RoomDirector>>,
    debug: Option<Res<DebugMode>>,
    visuals: Query<(
        &MapPosition,
        &ZIndex,
        Option<&FrameSequence>,
        Option<&StaticImage>,
        Option<&Monster>,
    )>,
    buttons: Query<(&Button, &MapPosition, &BoxCollider)>,
    colliders: Query<(&MapPosition, &BoxCollider, Option<&Monster>)>,
    players: Query<&Player>,
) {
    let room = rooms.as_ref().map(|r| r.current_index());
    let in_view = |monster: Option<&Monster>| match (monster, room) {
        (Some(monster), Some(room)) => monster.room == room,
        _ => true,
    };

    let mut to_draw: Vec<(ZIndex, Vector2, DrawSource)> = visuals
        .iter()
        .filter(|(_, _, _, _, monster)| in_view(*monster))
        .filter_map(|(position, z, frames, image, _)| {
            let visual: &dyn Visual = match (frames, image) {
                (Some(frames), _) => frames,
                (None, Some(image)) => image,
                (None, None) => return None,
            };
            Some((*z, position.pos, visual.draw_source()))
        })
        .collect();
    to_draw.sort_by_key(|(z, _, _)| *z);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for (_, pos, draw) in to_draw.iter() {
        if let Some(tex) = textures.get(&draw.tex_key) {
            let src = source_rect(draw, tex);
            let dest = Rectangle {
                x: pos.x,
                y: pos.y,
                width: draw.width,
                height: draw.height,
            };
            d.draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
    }

    for (button, position, collider) in buttons.iter() {
        d.draw_text(
            &button.label,
            (position.pos.x + collider.width / 3.5) as i32,
            (position.pos.y + collider.height / 4.0) as i32,
            LABEL_FONT_SIZE,
            Color::WHITE,
        );
    }

    if debug.is_some() {
        for (position, collider, monster) in colliders.iter() {
            if !in_view(monster) {
                continue;
            }
            let b = collider.bounds(position.pos);
            d.draw_rectangle_lines(
                b.left as i32,
                b.top as i32,
                b.width() as i32,
                b.height() as i32,
                Color::RED,
            );
            if let Some(monster) = monster {
                d.draw_text(
                    &format!("{:?} hp {} {:?}", monster.kind, monster.hp, monster.state),
                    b.left as i32,
                    b.top as i32 - DEBUG_FONT_SIZE,
                    DEBUG_FONT_SIZE,
                    Color::YELLOW,
                );
            }
        }

        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG MODE (press F11 to toggle) | FPS: {} | {:?}", fps, state.get()),
            10,
            10,
            DEBUG_FONT_SIZE,
            Color::YELLOW,
        );
        if let Some(rooms) = rooms.as_ref() {
            let current = rooms.current();
            d.draw_text(
                &format!(
                    "Room {}/{} {:?} cleared={}",
                    current.index + 1,
                    rooms.len(),
                    current.kind,
                    current.cleared
                ),
                10,
                10 + DEBUG_FONT_SIZE + 5,
                DEBUG_FONT_SIZE,
                Color::YELLOW,
            );
        }
        if let Ok(player) = players.single() {
            d.draw_text(
                &format!(
                    "Health {}/{} facing {:?} attacking={} ({})",
                    player.health,
                    player.max_health,
                    player.facing,
                    player.attacking,
                    player.attack_ticks
                ),
                10,
                screen.h - DEBUG_FONT_SIZE - 10,
                DEBUG_FONT_SIZE,
                Color::YELLOW,
            );
        }
    }
}
