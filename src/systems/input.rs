//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`]. Pressing the debug key emits a
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{Binding, InputState};

fn is_down(rl: &raylib::RaylibHandle, binding: Binding) -> bool {
    match binding {
        Binding::Key(key) => rl.is_key_down(key),
        Binding::Mouse(button) => rl.is_mouse_button_down(button),
    }
}

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for action in input.actions_mut() {
        let down = is_down(&rl, action.key_binding)
            || action.alt_binding.is_some_and(|alt| is_down(&rl, alt));
        action.update(down);
    }
    input.pointer = rl.get_mouse_position();

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
