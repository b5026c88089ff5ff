//! What the renderer needs to know about an entity's look.
//!
//! Entities are drawn either from an animated
//! [`FrameSequence`](super::framesequence::FrameSequence) or from a
//! [`StaticImage`]. Both implement [`Visual`], and the render system collects
//! them through that trait instead of special-casing each kind.

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::components::framesequence::FrameSequence;
use crate::resources::sheetstore::CellRect;

/// A single draw request resolved from a visual.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSource {
    /// Texture key in [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: Arc<str>,
    /// Source cell; `None` means the whole texture.
    pub source: Option<CellRect>,
    pub width: f32,
    pub height: f32,
    pub flipped: bool,
}

pub trait Visual {
    fn draw_source(&self) -> DrawSource;
}

impl Visual for FrameSequence {
    fn draw_source(&self) -> DrawSource {
        let frame = self.current();
        DrawSource {
            tex_key: frame.sheet.clone(),
            source: Some(frame.source),
            width: frame.width,
            height: frame.height,
            flipped: frame.flipped,
        }
    }
}

/// Whole-texture image scaled to a fixed size: backdrops, hearts, buttons.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct StaticImage {
    pub tex_key: Arc<str>,
    pub width: f32,
    pub height: f32,
}

impl StaticImage {
    pub fn new(tex_key: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }

    /// Swap the texture; returns whether anything changed.
    pub fn set_texture(&mut self, tex_key: &str) -> bool {
        if self.tex_key.as_ref() == tex_key {
            return false;
        }
        self.tex_key = tex_key.into();
        true
    }
}

impl Visual for StaticImage {
    fn draw_source(&self) -> DrawSource {
        DrawSource {
            tex_key: self.tex_key.clone(),
            source: None,
            width: self.width,
            height: self.height,
            flipped: false,
        }
    }
}
