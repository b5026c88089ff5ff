//! Coarse bounding regions.
//!
//! A [`BoxCollider`] is the rectangle an entity occupies, anchored at its
//! [`MapPosition`](super::mapposition::MapPosition). It drives the cheap
//! tests: strike sweeps, button hover, and the broad phase before per-pixel
//! mask checks.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangle in play-area pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Inclusive point test on all edges. Used for pointer hover.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Point test that excludes the right and bottom edges, so the pixel
    /// just past the rectangle never counts. Used for strike sweeps.
    pub fn contains_half_open(&self, point: Vector2) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Shared area of two bounds, if any.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Bounds {
                left,
                top,
                right,
                bottom,
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    /// Bounds when the entity's top-left corner is at `position`.
    pub fn bounds(&self, position: Vector2) -> Bounds {
        Bounds {
            left: position.x,
            top: position.y,
            right: position.x + self.width,
            bottom: position.y + self.height,
        }
    }
}
