//! Combat Resolver.
//!
//! Two tests decide every exchange of blows:
//! - a player strike is a diagonal sweep of points from the leading corner of
//!   the player's bounds, tested against each monster's bounds;
//! - monster contact is per-pixel: both current frames must have an opaque
//!   pixel at the same play-area position.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::boxcollider::{Bounds, BoxCollider};
use crate::components::facing::Facing;
use crate::components::framesequence::Frame;
use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::events::combat::PlayerStrikeEvent;
use crate::resources::rooms::RoomDirector;

/// Corner of the player's bounds a strike sweeps from.
///
/// Facing right the sweep starts at the top-left corner, facing left at the
/// top-right corner.
pub fn strike_origin(position: Vector2, collider: &BoxCollider, facing: Facing) -> Vector2 {
    match facing {
        Facing::Right => position,
        Facing::Left => Vector2 {
            x: position.x + collider.width,
            y: position.y,
        },
    }
}

/// First sweep step that lands inside `target`, if any.
///
/// Step `j` tests the point `j` pixels along the facing and `j` pixels down.
/// The right and bottom edges of `target` do not count.
pub fn sweep_hit(origin: Vector2, facing: Facing, reach: u32, target: &Bounds) -> Option<u32> {
    (0..reach).find(|&j| {
        let offset = j as f32;
        let point = Vector2 {
            x: origin.x + facing.sign() * offset,
            y: origin.y + offset,
        };
        target.contains_half_open(point)
    })
}

/// Apply one strike to every candidate monster.
///
/// Each monster takes the damage at most once, however many sweep points
/// fall inside it. Returns the number of monsters hit.
pub fn resolve_strike<'a>(
    strike: &PlayerStrikeEvent,
    targets: impl IntoIterator<Item = (&'a mut Monster, Bounds)>,
) -> usize {
    let mut hits = 0;
    for (monster, bounds) in targets {
        if let Some(step) = sweep_hit(strike.origin, strike.facing, strike.reach, &bounds) {
            monster.take_damage(strike.damage);
            hits += 1;
            debug!(
                "Strike hit {:?} at step {} ({} hp left)",
                monster.kind, step, monster.hp
            );
        }
    }
    hits
}

/// Per-pixel overlap of two frames drawn at the given top-left positions.
///
/// Only the intersection of the two frame rectangles is scanned.
pub fn masks_overlap(a: &Frame, pos_a: Vector2, b: &Frame, pos_b: Vector2) -> bool {
    let rect_a = BoxCollider::new(a.width, a.height).bounds(pos_a);
    let rect_b = BoxCollider::new(b.width, b.height).bounds(pos_b);
    let Some(overlap) = rect_a.intersection(&rect_b) else {
        return false;
    };

    let mut y = overlap.top.floor();
    while y < overlap.bottom {
        let mut x = overlap.left.floor();
        while x < overlap.right {
            if a.is_opaque(x - pos_a.x, y - pos_a.y) && b.is_opaque(x - pos_b.x, y - pos_b.y) {
                return true;
            }
            x += 1.0;
        }
        y += 1.0;
    }
    false
}

/// Resolve a [`PlayerStrikeEvent`] against the monsters of the current room.
pub fn player_strike_observer(
    trigger: On<PlayerStrikeEvent>,
    rooms: Res<RoomDirector>,
    mut monsters: Query<(&mut Monster, &MapPosition, &BoxCollider)>,
) {
    let strike = trigger.event();
    let room = rooms.current_index();
    let targets = monsters
        .iter_mut()
        .filter(|(monster, _, _)| monster.room == room && !monster.is_dead())
        .map(|(monster, position, collider)| (monster.into_inner(), collider.bounds(position.pos)));
    let hits = resolve_strike(strike, targets);
    debug!("Strike from {:?} facing {:?}: {} hit(s)", strike.origin, strike.facing, hits);
}
