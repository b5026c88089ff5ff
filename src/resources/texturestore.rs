//! GPU textures keyed by asset name.
//!
//! Sprite sheets share their key with the matching
//! [`SpriteSheet`](super::sheetstore::SpriteSheet) in the sheet store.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<Arc<str>, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Arc<str>>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
