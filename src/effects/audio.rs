//! Effects domain: logical sound names and fire-and-forget playback.

use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::core::SceneEntity;

const SOUND_DIR: &str = "sounds";
const SOUND_EXTENSION: &str = "ogg";

/// Marker for the entity playing the current background track
#[derive(Component, Debug)]
pub struct BackgroundMusic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Coin,
    Food,
    Explode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Main,
    Clear,
}

/// Request to play a one-shot sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound(pub SoundEffect);

impl Message for PlaySound {}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Coin => "coin",
            SoundEffect::Food => "food",
            SoundEffect::Explode => "explode",
        }
    }
}

impl Track {
    pub fn name(&self) -> &'static str {
        match self {
            Track::Main => "main",
            Track::Clear => "clear",
        }
    }

    /// The stage track repeats; the clear jingle plays once.
    pub fn looped(&self) -> bool {
        matches!(self, Track::Main)
    }
}

/// Asset path for a logical sound name.
pub fn sound_path(name: &str) -> String {
    format!("{}/{}.{}", SOUND_DIR, name, SOUND_EXTENSION)
}

fn play_effect(commands: &mut Commands, asset_server: &AssetServer, effect: SoundEffect) {
    commands.spawn((
        AudioPlayer::<AudioSource>::new(asset_server.load(sound_path(effect.name()))),
        PlaybackSettings::DESPAWN,
    ));
}

pub(crate) fn play_requested_sounds(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    asset_server: Res<AssetServer>,
) {
    for PlaySound(effect) in requests.read() {
        play_effect(&mut commands, &asset_server, *effect);
    }
}

/// Start a background track. Callers stop the previous one first.
pub fn play_track(commands: &mut Commands, asset_server: &AssetServer, track: Track) {
    let settings = if track.looped() {
        PlaybackSettings::LOOP
    } else {
        PlaybackSettings::DESPAWN
    };

    commands.spawn((
        BackgroundMusic,
        SceneEntity,
        AudioPlayer::<AudioSource>::new(asset_server.load(sound_path(track.name()))),
        settings,
    ));
}

pub fn stop_tracks(commands: &mut Commands, music_query: &Query<Entity, With<BackgroundMusic>>) {
    for entity in music_query.iter() {
        commands.entity(entity).try_despawn();
    }
}

pub(crate) fn start_main_track(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    music_query: Query<Entity, With<BackgroundMusic>>,
) {
    stop_tracks(&mut commands, &music_query);
    play_track(&mut commands, &asset_server, Track::Main);
}
