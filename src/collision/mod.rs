//! Collision domain: player contact dispatch for enemies and pickups.

mod contact;
mod systems;


pub use contact::{ContactKind, player_pair};

use bevy::prelude::*;

use crate::collision::systems::dispatch_player_contacts;
use crate::core::{LevelSet, ScenePhase, session_is_main};

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            dispatch_player_contacts
                .in_set(LevelSet::Contacts)
                .run_if(in_state(ScenePhase::Playing))
                .run_if(session_is_main),
        );
    }
}
