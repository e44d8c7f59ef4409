//! Effects domain: sound playback and particle effects.

mod audio;
mod particles;


pub use audio::{
    BackgroundMusic, PlaySound, SoundEffect, Track, play_track, sound_path, stop_tracks,
};
pub(crate) use audio::start_main_track;
pub use particles::{EXPLOSION_PARTICLES, Particle, spawn_explosion};

use bevy::prelude::*;

use crate::core::LevelSet;
use crate::effects::audio::play_requested_sounds;
use crate::effects::particles::update_particles;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>().add_systems(
            Update,
            (play_requested_sounds, update_particles).in_set(LevelSet::Presentation),
        );
    }
}
