//! Frame sequencer: tick-driven sprite sheet animation.
//!
//! A [`FrameSequence`] is built by slicing a [`SpriteSheet`] into its grid
//! cells (row-major) and repeating every cell a fixed *hold* number of times.
//! Advancing the cursor by one frame per tick then plays the animation at a
//! speed set by the hold count alone, with no separate timer.
//!
//! Facing is expressed by mirroring the frames in place. Rebuilding a sequence
//! (walk -> attack and back) takes the desired facing so the entity never pops
//! direction on an animation switch.

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::components::facing::Facing;
use crate::resources::sheetstore::{AlphaMask, CellRect, SpriteSheet};

/// How sliced cells are scaled and paced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// On-screen width and height of every frame.
    pub frame_size: f32,
    /// Game ticks per second; the hold count is derived from it.
    pub tick_rate: u32,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            frame_size: 150.0,
            tick_rate: 60,
        }
    }
}

/// Number of consecutive ticks each cell stays on screen.
///
/// Integer arithmetic as `tick_rate / columns * rows`, never below one.
pub fn hold_count(tick_rate: u32, columns: u32, rows: u32) -> usize {
    (tick_rate / columns.max(1) * rows).max(1) as usize
}

/// One renderable frame: a sheet cell scaled to an on-screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub sheet: Arc<str>,
    pub source: CellRect,
    pub width: f32,
    pub height: f32,
    pub flipped: bool,
    mask: Arc<AlphaMask>,
}

impl Frame {
    /// Whether the on-screen pixel at local `(x, y)` is solid.
    ///
    /// Coordinates are relative to the frame's top-left corner in screen
    /// units; the sheet mask is sampled nearest-neighbour and mirrored when
    /// the frame is flipped.
    pub fn is_opaque(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return false;
        }
        let mut sx = ((x * self.source.w as f32) / self.width) as u32;
        let sy = ((y * self.source.h as f32) / self.height) as u32;
        sx = sx.min(self.source.w.saturating_sub(1));
        if self.flipped {
            sx = self.source.w - 1 - sx;
        }
        self.mask
            .is_opaque(self.source.x + sx, self.source.y + sy.min(self.source.h - 1))
    }

    pub fn flip_horizontal(&mut self) {
        self.flipped = !self.flipped;
    }
}

/// Cyclic animation owned by a single entity.
#[derive(Component, Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    cursor: usize,
    hold: usize,
}

impl FrameSequence {
    /// Slice `sheet` into a playback sequence facing `facing`.
    ///
    /// The cursor starts at zero. Frames are mirrored when `facing` is not the
    /// direction the sheet art looks natively.
    pub fn build(sheet: &SpriteSheet, playback: Playback, facing: Facing) -> Self {
        let hold = hold_count(playback.tick_rate, sheet.columns(), sheet.rows());
        let flipped = facing != sheet.facing();
        let cells = (sheet.columns() * sheet.rows()) as usize;
        let mut frames = Vec::with_capacity(cells * hold);
        for row in 0..sheet.rows() {
            for column in 0..sheet.columns() {
                let frame = Frame {
                    sheet: sheet.key().clone(),
                    source: sheet.cell(column, row),
                    width: playback.frame_size,
                    height: playback.frame_size,
                    flipped,
                    mask: sheet.mask().clone(),
                };
                frames.extend(std::iter::repeat_n(frame, hold));
            }
        }
        Self {
            frames,
            cursor: 0,
            hold,
        }
    }

    /// Move to the next frame, wrapping, and return it.
    pub fn advance(&mut self) -> &Frame {
        self.cursor = (self.cursor + 1) % self.frames.len();
        &self.frames[self.cursor]
    }

    /// Frame under the cursor.
    pub fn current(&self) -> &Frame {
        &self.frames[self.cursor]
    }

    /// Mirror every frame; cursor and hold runs are untouched.
    pub fn flip_horizontal(&mut self) {
        for frame in self.frames.iter_mut() {
            frame.flip_horizontal();
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.current().flipped
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn hold(&self) -> usize {
        self.hold
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Key of the sheet this sequence was cut from.
    pub fn sheet_key(&self) -> &str {
        &self.current().sheet
    }
}
