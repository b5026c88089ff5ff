//! Horizontal facing shared by sprite sheets, the player and monsters.

use serde::{Deserialize, Serialize};

/// Which way a sprite looks along the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing implied by a horizontal step. A zero step has no facing.
    pub fn from_step(step: f32) -> Option<Self> {
        if step > 0.0 {
            Some(Facing::Right)
        } else if step < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
