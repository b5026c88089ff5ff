//! Animation system.
//!
//! Every visible [`FrameSequence`] moves forward exactly one frame per tick.
//! Pacing comes from the hold runs baked into the sequence, so no time delta
//! is involved. Monsters outside the current room are frozen.

use bevy_ecs::prelude::*;

use crate::components::framesequence::FrameSequence;
use crate::components::monster::Monster;
use crate::resources::rooms::RoomDirector;

pub fn animation_system(
    mut query: Query<(&mut FrameSequence, Option<&Monster>)>,
    rooms: Option<Res<RoomDirector>>,
) {
    let room = rooms.map(|r| r.current_index());
    for (mut frames, monster) in query.iter_mut() {
        if let (Some(monster), Some(room)) = (monster, room)
            && monster.room != room
        {
            continue;
        }
        frames.advance();
    }
}
