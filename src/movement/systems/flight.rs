//! Movement domain: forward motion and press thrust.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::LevelTuning;
use crate::movement::{Player, PressState};

/// Vertical velocity after one frame of thrust. The physics world enforces
/// the player's `MaxLinearSpeed`.
pub fn thrust_velocity(current: f32, thrust: f32) -> f32 {
    current + thrust
}

pub(crate) fn apply_flight(
    press: Res<PressState>,
    tuning: Res<LevelTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.x = tuning.forward_speed;

        if press.pressed {
            velocity.y = thrust_velocity(velocity.y, tuning.thrust);
        }
    }
}
