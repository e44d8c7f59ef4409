//! Core domain: scene lifecycle and per-session game state definitions.

use bevy::prelude::*;

/// Lifecycle of the level scene. A replay or continue always passes through
/// `Reloading`, which tears down the old scene before `Playing` builds a new one.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum ScenePhase {
    #[default]
    Loading,
    Playing,
    Reloading,
}

/// Outcome state of one scene instance. Only `Main -> GameOver` and
/// `Main -> Clear` are possible; both are terminal.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Main,
    GameOver,
    Clear,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Main)
    }
}

/// Ordering of the per-frame gameplay work.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum LevelSet {
    Input,
    Flight,
    Contacts,
    Rules,
    Outcome,
    Camera,
    Presentation,
}
