//! Core domain: scene lifecycle, session state machine, and stage rules.

mod events;
mod resources;
mod session;
mod state;
mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

pub use events::{GameOverCause, GameOverEvent, StageClearedEvent};
pub use resources::{LevelTuning, StageRequest};
pub use session::{ITEM_SLOT_COUNT, LevelSession, STAGE_COUNT, StageIndex};
pub use state::{GameState, LevelSet, ScenePhase};
pub use systems::session_is_main;

use bevy::prelude::*;

use crate::core::systems::{
    begin_session, check_stage_bounds, finish_loading, follow_player_camera, setup_camera,
    teardown_scene,
};
use crate::core::ui::fade::{advance_fade, spawn_fade_overlay};
use crate::core::ui::go_banner::{animate_go_banner, spawn_go_banner};
use crate::core::ui::outcome::{handle_rebuild_button, on_game_over, on_stage_cleared};
use crate::effects::start_main_track;

/// Marker for root entities owned by the current scene; despawned on rebuild.
#[derive(Component, Debug, Default)]
pub struct SceneEntity;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ScenePhase>()
            .init_resource::<LevelTuning>()
            .init_resource::<StageRequest>()
            .add_message::<GameOverEvent>()
            .add_message::<StageClearedEvent>()
            .configure_sets(
                Update,
                (
                    LevelSet::Input,
                    LevelSet::Flight,
                    LevelSet::Contacts,
                    LevelSet::Rules,
                    LevelSet::Outcome,
                    LevelSet::Camera,
                    LevelSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_loading.run_if(in_state(ScenePhase::Loading)))
            .add_systems(
                OnEnter(ScenePhase::Playing),
                (begin_session, spawn_go_banner, start_main_track),
            )
            .add_systems(OnEnter(ScenePhase::Reloading), spawn_fade_overlay)
            .add_systems(OnExit(ScenePhase::Reloading), teardown_scene)
            .add_systems(
                Update,
                check_stage_bounds
                    .in_set(LevelSet::Rules)
                    .run_if(in_state(ScenePhase::Playing))
                    .run_if(session_is_main),
            )
            .add_systems(
                Update,
                (on_game_over, on_stage_cleared)
                    .in_set(LevelSet::Outcome)
                    .run_if(in_state(ScenePhase::Playing)),
            )
            .add_systems(
                Update,
                follow_player_camera
                    .in_set(LevelSet::Camera)
                    .run_if(in_state(ScenePhase::Playing)),
            )
            .add_systems(
                Update,
                (handle_rebuild_button, animate_go_banner)
                    .in_set(LevelSet::Presentation)
                    .run_if(in_state(ScenePhase::Playing)),
            )
            .add_systems(Update, advance_fade);
    }
}
