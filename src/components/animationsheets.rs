//! Walk/attack sheet pairing for animated characters.

use std::sync::Arc;

use bevy_ecs::prelude::Component;

/// Which sheets an entity rebuilds its [`FrameSequence`](super::framesequence::FrameSequence)
/// from when it switches between walking and attacking.
#[derive(Component, Debug, Clone)]
pub struct AnimationSheets {
    pub walk: Arc<str>,
    pub attack: Arc<str>,
}

impl AnimationSheets {
    pub fn new(walk: impl Into<Arc<str>>, attack: impl Into<Arc<str>>) -> Self {
        Self {
            walk: walk.into(),
            attack: attack.into(),
        }
    }
}
