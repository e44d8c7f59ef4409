//! Movement domain: press input, flight physics, and player bootstrap.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{GameLayer, Player};
pub use resources::PressState;
pub use systems::flight::thrust_velocity;

use bevy::prelude::*;

use crate::core::{LevelSet, ScenePhase, session_is_main};
use crate::movement::bootstrap::{apply_world_gravity, spawn_player};
use crate::movement::systems::{apply_flight, read_press_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PressState>()
            .add_systems(Startup, apply_world_gravity)
            .add_systems(OnEnter(ScenePhase::Playing), spawn_player)
            .add_systems(
                Update,
                read_press_input
                    .in_set(LevelSet::Input)
                    .run_if(in_state(ScenePhase::Playing))
                    .run_if(session_is_main),
            )
            .add_systems(
                Update,
                apply_flight
                    .in_set(LevelSet::Flight)
                    .run_if(in_state(ScenePhase::Playing))
                    .run_if(session_is_main),
            );
    }
}
