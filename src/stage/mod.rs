//! Stage domain: tile map entities and stage geometry for the current scene.

mod spawn;


pub use spawn::tile_layer;

use bevy::prelude::*;

use crate::core::{ScenePhase, StageIndex};
use crate::stage::spawn::spawn_stage;

/// Geometry of the stage being played
#[derive(Resource, Debug, Clone)]
pub struct StageLayout {
    pub stage: StageIndex,
    /// Scaled map width; the goal line
    pub map_width: f32,
}

impl StageLayout {
    pub fn is_goal_reached(&self, x: f32) -> bool {
        x >= self.map_width
    }
}

/// Parent of all tile entities of a stage
#[derive(Component, Debug)]
pub struct TileLayer;

#[derive(Component, Debug)]
pub struct Tile;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ScenePhase::Playing), spawn_stage);
    }
}
