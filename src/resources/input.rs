//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Each action has a
//! primary and an optional secondary binding: WASD plus arrow keys for
//! movement, the left mouse button for attacking and clicking buttons.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// A physical control an action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyboardKey),
    Mouse(MouseButton),
}

#[derive(Debug, Clone, Copy)]
/// Boolean control state with its bindings.
pub struct BoolState {
    /// Whether the control is held this frame.
    pub active: bool,
    /// Whether the control went down this frame.
    pub just_pressed: bool,
    /// Whether the control went up this frame.
    pub just_released: bool,

    /// The control bound to this action.
    pub key_binding: Binding,
    /// Optional second control for the same action.
    pub alt_binding: Option<Binding>,
}

impl BoolState {
    pub fn bound(key_binding: Binding, alt_binding: Option<Binding>) -> Self {
        Self {
            key_binding,
            alt_binding,
            ..Self::default()
        }
    }

    /// Record whether any binding is down this frame and derive the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: Binding::Key(KeyboardKey::KEY_NULL),
            alt_binding: None,
        }
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    /// Attack while playing, click on screens with buttons.
    pub attack: BoolState,
    pub mode_debug: BoolState,
    /// Mouse position in window pixels.
    pub pointer: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound(
                Binding::Key(KeyboardKey::KEY_A),
                Some(Binding::Key(KeyboardKey::KEY_LEFT)),
            ),
            right: BoolState::bound(
                Binding::Key(KeyboardKey::KEY_D),
                Some(Binding::Key(KeyboardKey::KEY_RIGHT)),
            ),
            up: BoolState::bound(
                Binding::Key(KeyboardKey::KEY_W),
                Some(Binding::Key(KeyboardKey::KEY_UP)),
            ),
            down: BoolState::bound(
                Binding::Key(KeyboardKey::KEY_S),
                Some(Binding::Key(KeyboardKey::KEY_DOWN)),
            ),
            attack: BoolState::bound(Binding::Mouse(MouseButton::MOUSE_BUTTON_LEFT), None),
            mode_debug: BoolState::bound(Binding::Key(KeyboardKey::KEY_F11), None),
            pointer: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl InputState {
    /// All action states, for bulk polling.
    pub fn actions_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.attack,
            &mut self.mode_debug,
        ]
    }
}
