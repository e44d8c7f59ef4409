//! Movement domain: press sampling from mouse, touch, and keyboard.

use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::movement::PressState;

pub(crate) fn read_press_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut press: ResMut<PressState>,
) {
    let began = mouse.just_pressed(MouseButton::Left)
        || keyboard.just_pressed(KeyCode::Space)
        || touches.any_just_pressed();
    let ended = mouse.just_released(MouseButton::Left)
        || keyboard.just_released(KeyCode::Space)
        || touches.any_just_released();
    let cancelled = touches.any_just_canceled();

    // A press and release in the same frame leaves the flag cleared
    if began {
        press.begin();
    }
    if ended {
        press.end();
    }
    if cancelled {
        press.cancel();
    }
}
