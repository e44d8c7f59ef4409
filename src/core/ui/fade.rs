//! Core domain: full-screen fade covering a scene rebuild.

use bevy::prelude::*;

use crate::core::resources::LevelTuning;
use crate::core::state::ScenePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Darkening while the old scene is still visible
    Out,
    /// Brightening over the freshly built scene
    In,
}

/// Black overlay that lives across the rebuild; not scene-scoped.
#[derive(Component, Debug)]
pub struct FadeOverlay {
    pub direction: FadeDirection,
    pub elapsed: f32,
}

/// Overlay opacity after `elapsed` seconds of a half fade lasting `half` seconds.
pub fn fade_alpha(direction: FadeDirection, elapsed: f32, half: f32) -> f32 {
    let t = if half > 0.0 {
        (elapsed / half).clamp(0.0, 1.0)
    } else {
        1.0
    };
    match direction {
        FadeDirection::Out => t,
        FadeDirection::In => 1.0 - t,
    }
}

pub(crate) fn spawn_fade_overlay(
    mut commands: Commands,
    existing: Query<Entity, With<FadeOverlay>>,
) {
    for entity in &existing {
        commands.entity(entity).try_despawn();
    }

    commands.spawn((
        FadeOverlay {
            direction: FadeDirection::Out,
            elapsed: 0.0,
        },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        ZIndex(500),
    ));
}

pub(crate) fn advance_fade(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<LevelTuning>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
    mut query: Query<(Entity, &mut FadeOverlay, &mut BackgroundColor)>,
) {
    let half = tuning.fade_seconds * 0.5;

    for (entity, mut fade, mut color) in &mut query {
        fade.elapsed += time.delta_secs();
        let alpha = fade_alpha(fade.direction, fade.elapsed, half);
        *color = BackgroundColor(Color::srgba(0.0, 0.0, 0.0, alpha));

        if fade.elapsed < half {
            continue;
        }

        match fade.direction {
            FadeDirection::Out => {
                // Screen is black: swap scenes underneath
                next_phase.set(ScenePhase::Playing);
                fade.direction = FadeDirection::In;
                fade.elapsed = 0.0;
            }
            FadeDirection::In => {
                commands.entity(entity).try_despawn();
            }
        }
    }
}
