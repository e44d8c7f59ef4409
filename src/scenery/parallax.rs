//! Scenery domain: parallax layer positioning.

use bevy::prelude::*;

use crate::core::LevelTuning;
use crate::movement::Player;

/// A decoration layer that scrolls at `ratio` of the player's movement.
///
/// `anchor` is the layer position relative to the bottom-left corner of the
/// view when the player is at the origin.
#[derive(Component, Debug, Clone)]
pub struct ParallaxLayer {
    pub ratio: Vec2,
    pub anchor: Vec2,
    pub z: f32,
}

/// Continuous rotation for decorations
#[derive(Component, Debug)]
pub struct Spin {
    pub radians_per_second: f32,
}

/// Layer position relative to the view's bottom-left corner.
pub fn parallax_offset(player: Vec2, ratio: Vec2, anchor: Vec2) -> Vec2 {
    anchor - player * ratio
}

/// Background ratio so the background's right edge lines up with the view's
/// right edge exactly when the player reaches the end of the map.
pub fn background_ratio(background_width: f32, view_width: f32, map_width: f32) -> Vec2 {
    if map_width <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(((background_width - view_width) / map_width).max(0.0), 0.0)
}

pub(crate) fn update_parallax_layers(
    tuning: Res<LevelTuning>,
    player_query: Query<&Transform, With<Player>>,
    camera_query: Query<&Transform, (With<Camera2d>, Without<Player>)>,
    mut layer_query: Query<
        (&ParallaxLayer, &mut Transform),
        (Without<Player>, Without<Camera2d>),
    >,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(camera) = camera_query.single() else {
        return;
    };

    let origin = tuning.viewport_origin(camera.translation.truncate());
    let player_position = player.translation.truncate();

    for (layer, mut transform) in &mut layer_query {
        let offset = parallax_offset(player_position, layer.ratio, layer.anchor);
        transform.translation = (origin + offset).extend(layer.z);
    }
}

pub(crate) fn spin_decorations(time: Res<Time>, mut query: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut query {
        transform.rotate_z(spin.radians_per_second * dt);
    }
}
