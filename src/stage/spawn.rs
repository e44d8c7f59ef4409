//! Stage domain: tile map spawning for the requested stage.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{StageRegistry, TileKind};
use crate::core::{SceneEntity, StageRequest};
use crate::movement::GameLayer;
use crate::stage::{StageLayout, Tile, TileLayer};

/// Category layer a tile of this kind belongs to
pub fn tile_layer(kind: TileKind) -> GameLayer {
    match kind {
        TileKind::Ground => GameLayer::Ground,
        TileKind::Enemy => GameLayer::Enemy,
        TileKind::Coin => GameLayer::Coin,
        TileKind::Item => GameLayer::Item,
    }
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Ground => Color::srgb(0.35, 0.4, 0.35),
        TileKind::Enemy => Color::srgb(0.75, 0.2, 0.25),
        TileKind::Coin => Color::srgb(0.9, 0.75, 0.2),
        TileKind::Item => Color::srgb(0.4, 0.8, 0.95),
    }
}

/// Visual and collider size relative to the tile extent; pickups are smaller
fn tile_fill(kind: TileKind) -> f32 {
    match kind {
        TileKind::Ground | TileKind::Enemy => 1.0,
        TileKind::Coin => 0.5,
        TileKind::Item => 0.6,
    }
}

pub(crate) fn spawn_stage(
    mut commands: Commands,
    registry: Res<StageRegistry>,
    request: Res<StageRequest>,
) {
    let Some(stage) = registry.get(request.stage) else {
        error!("No stage layout for stage {}", request.stage.display_number());
        return;
    };

    let layout = StageLayout {
        stage: request.stage,
        map_width: stage.map_width(),
    };
    info!(
        "Building stage {} '{}' ({}x{} tiles, goal at x={:.0})",
        request.stage.display_number(),
        stage.name,
        stage.columns(),
        stage.rows.len(),
        layout.map_width
    );
    commands.insert_resource(layout);

    let extent = stage.tile_extent();
    let mut count = 0;

    commands
        .spawn((
            TileLayer,
            Name::new(format!("Tiles: {}", stage.name)),
            SceneEntity,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|layer| {
            for (col, row, kind) in stage.tiles() {
                let center = stage.cell_center(col, row);
                let size = extent * tile_fill(kind);
                layer.spawn((
                    Tile,
                    Sprite {
                        color: tile_color(kind),
                        custom_size: Some(Vec2::splat(size)),
                        ..default()
                    },
                    Transform::from_xyz(center.x, center.y, 0.0),
                    RigidBody::Static,
                    Collider::rectangle(size, size),
                    CollisionLayers::new(tile_layer(kind), [GameLayer::Player]),
                ));
                count += 1;
            }
        });

    debug!("Spawned {} tiles", count);
}
