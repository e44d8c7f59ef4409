//! Core domain: events for terminal session transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::session::StageIndex;

/// Why a session ended in GameOver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    EnemyContact,
    OutOfBounds,
}

/// Event fired once when a session enters GameOver
#[derive(Debug)]
pub struct GameOverEvent {
    pub stage: StageIndex,
    pub cause: GameOverCause,
    /// Last known player position
    pub position: Vec2,
}

impl Message for GameOverEvent {}

/// Event fired once when a session enters Clear
#[derive(Debug)]
pub struct StageClearedEvent {
    pub stage: StageIndex,
    pub next: StageIndex,
}

impl Message for StageClearedEvent {}
