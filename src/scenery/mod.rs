//! Scenery domain: parallax layers that scroll against the player.

mod parallax;
mod spawn;

#[cfg(test)]
mod tests;

pub use parallax::{ParallaxLayer, Spin, background_ratio, parallax_offset};
pub use spawn::{GEAR_COUNT, GearStyle, gear_styles};

use bevy::prelude::*;

use crate::core::{LevelSet, ScenePhase};
use crate::scenery::parallax::{spin_decorations, update_parallax_layers};
use crate::scenery::spawn::spawn_scenery;

pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ScenePhase::Playing), spawn_scenery)
            .add_systems(
                Update,
                (update_parallax_layers, spin_decorations)
                    .in_set(LevelSet::Presentation)
                    .run_if(in_state(ScenePhase::Playing)),
            );
    }
}
