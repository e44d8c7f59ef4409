//! Core domain: scene lifecycle, stage rules, and camera systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::StageRegistry;
use crate::core::events::{GameOverCause, GameOverEvent, StageClearedEvent};
use crate::core::resources::{LevelTuning, StageRequest};
use crate::core::session::LevelSession;
use crate::core::state::ScenePhase;
use crate::core::SceneEntity;
use crate::movement::{Player, PressState};
use crate::stage::StageLayout;

/// Run condition: true while a session exists and is still in Main
pub fn session_is_main(session: Option<Res<LevelSession>>) -> bool {
    session.is_some_and(|s| s.is_main())
}

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<LevelTuning>) {
    let center = tuning.camera_focus(0.0);
    commands.spawn((Camera2d, Transform::from_xyz(center.x, center.y, 0.0)));
}

/// Leave Loading once stage content is available
pub(crate) fn finish_loading(
    registry: Option<Res<StageRegistry>>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    if registry.is_some_and(|r| !r.is_empty()) {
        next_phase.set(ScenePhase::Playing);
    }
}

/// Start a fresh session for the requested stage
pub(crate) fn begin_session(mut commands: Commands, request: Res<StageRequest>) {
    info!("Starting stage {}", request.stage.display_number());
    commands.insert_resource(LevelSession::new(request.stage));
}

/// Destroy everything the previous scene owned
pub(crate) fn teardown_scene(
    mut commands: Commands,
    scene_query: Query<Entity, With<SceneEntity>>,
    mut press: ResMut<PressState>,
) {
    let mut count = 0;
    for entity in &scene_query {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    commands.remove_resource::<LevelSession>();
    commands.remove_resource::<StageLayout>();
    press.reset();

    debug!("Tore down scene ({} root entities)", count);
}

/// Clear the stage at the right edge of the map; end the run outside the view
pub(crate) fn check_stage_bounds(
    tuning: Res<LevelTuning>,
    layout: Option<Res<StageLayout>>,
    mut session: ResMut<LevelSession>,
    player_query: Query<&Transform, With<Player>>,
    mut cleared_events: MessageWriter<StageClearedEvent>,
    mut game_over_events: MessageWriter<GameOverEvent>,
) {
    let Some(layout) = layout else {
        return;
    };
    let Ok(transform) = player_query.single() else {
        return;
    };
    let position = transform.translation.truncate();

    if layout.is_goal_reached(position.x)
        && let Some(next) = session.clear()
    {
        info!(
            "Stage {} cleared with {} coins and {} items",
            layout.stage.display_number(),
            session.coins(),
            session.items()
        );
        cleared_events.write(StageClearedEvent {
            stage: session.stage(),
            next,
        });
    }

    if tuning.is_out_of_bounds(position.y) && session.game_over().is_some() {
        info!(
            "Player left the view at y={:.1} on stage {}",
            position.y,
            session.stage().display_number()
        );
        game_over_events.write(GameOverEvent {
            stage: session.stage(),
            cause: GameOverCause::OutOfBounds,
            position,
        });
    }
}

pub(crate) fn follow_player_camera(
    tuning: Res<LevelTuning>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let focus = tuning.camera_focus(player.translation.x);
    camera.translation.x = focus.x;
    camera.translation.y = focus.y;
}
