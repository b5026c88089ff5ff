//! Draw order.
//!
//! Higher values are drawn later (on top). The layers used by the game are
//! named constants on [`ZIndex`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKDROP: ZIndex = ZIndex(-10);
    pub const MONSTERS: ZIndex = ZIndex(0);
    pub const PLAYER: ZIndex = ZIndex(1);
    pub const HUD: ZIndex = ZIndex(10);
}
