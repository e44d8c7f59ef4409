//! Movement domain: player bootstrap from the requested stage.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::StageRegistry;
use crate::core::{LevelTuning, SceneEntity, StageRequest};
use crate::movement::{GameLayer, Player};

/// Point the physics world's gravity down with the tuned strength.
pub(crate) fn apply_world_gravity(mut commands: Commands, tuning: Res<LevelTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
}

/// Spawn the single player at the stage's start cell.
/// This system runs on entering ScenePhase::Playing.
pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Res<StageRegistry>,
    request: Res<StageRequest>,
    tuning: Res<LevelTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        warn!("Player already exists, skipping spawn");
        return;
    }

    let Some(stage) = registry.get(request.stage) else {
        error!("No stage layout for stage {}", request.stage.display_number());
        return;
    };

    let start = stage.player_start().unwrap_or_else(|| {
        warn!("Stage '{}' has no player start, using map center", stage.name);
        Vec2::new(stage.tile_extent(), stage.map_height() * 0.5)
    });

    info!(
        "Spawning player at ({:.0}, {:.0}) on '{}'",
        start.x, start.y, stage.name
    );

    let radius = tuning.player_radius;
    commands.spawn((
        Player,
        SceneEntity,
        // Rendering
        Sprite {
            color: Color::srgb(0.95, 0.55, 0.2),
            custom_size: Some(Vec2::splat(radius * 2.0)),
            ..default()
        },
        Transform::from_xyz(start.x, start.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::circle(radius),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity(Vec2::new(tuning.forward_speed, 0.0)),
            MaxLinearSpeed(tuning.max_speed),
            Friction::new(0.0),
            Restitution::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Enemy,
                    GameLayer::Coin,
                    GameLayer::Item,
                ],
            ),
        ),
    ));
}
