//! Core domain: the "GO!" banner played when a stage starts.

use bevy::prelude::*;

use crate::core::SceneEntity;

const GO_FONT_SIZE: f32 = 96.0;
const GROW_SECONDS: f32 = 0.1;
const HOLD_SECONDS: f32 = 0.5;
const SHRINK_SECONDS: f32 = 0.1;

#[derive(Component, Debug, Default)]
pub struct GoBanner {
    pub elapsed: f32,
}

/// Banner scale at `elapsed` seconds: grow, hold, shrink. None once finished.
pub fn go_banner_scale(elapsed: f32) -> Option<f32> {
    if elapsed < 0.0 {
        return Some(0.0);
    }
    if elapsed < GROW_SECONDS {
        return Some(elapsed / GROW_SECONDS);
    }
    let holding = elapsed - GROW_SECONDS;
    if holding < HOLD_SECONDS {
        return Some(1.0);
    }
    let shrinking = holding - HOLD_SECONDS;
    if shrinking < SHRINK_SECONDS {
        return Some(1.0 - shrinking / SHRINK_SECONDS);
    }
    None
}

pub(crate) fn spawn_go_banner(mut commands: Commands) {
    commands
        .spawn((
            SceneEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(50),
        ))
        .with_child((
            GoBanner::default(),
            Text::new("GO!"),
            TextFont {
                font_size: 1.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 0.95, 0.4)),
        ));
}

pub(crate) fn animate_go_banner(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut GoBanner, &mut TextFont)>,
) {
    for (entity, mut banner, mut font) in &mut query {
        banner.elapsed += time.delta_secs();
        match go_banner_scale(banner.elapsed) {
            Some(scale) => font.font_size = (GO_FONT_SIZE * scale).max(1.0),
            None => {
                commands.entity(entity).try_despawn();
            }
        }
    }
}
