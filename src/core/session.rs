//! Core domain: the owned state of one play session.

use bevy::prelude::*;

use crate::core::state::GameState;

/// Number of stages; clearing the last one wraps to the first.
pub const STAGE_COUNT: usize = 5;

/// Number of item indicator slots in the HUD.
pub const ITEM_SLOT_COUNT: usize = 3;

/// Index of a stage, always in `0..STAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StageIndex(usize);

impl StageIndex {
    pub const fn new(index: usize) -> Self {
        Self(index % STAGE_COUNT)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// One-based number shown to the player.
    pub const fn display_number(self) -> usize {
        self.0 + 1
    }
}

/// Counters and outcome of the scene currently being played.
///
/// A session is never reset in place: replay and continue insert a fresh one.
#[derive(Resource, Debug, Clone)]
pub struct LevelSession {
    stage: StageIndex,
    state: GameState,
    coins: u32,
    items: u32,
}

impl LevelSession {
    pub fn new(stage: StageIndex) -> Self {
        Self {
            stage,
            state: GameState::Main,
            coins: 0,
            items: 0,
        }
    }

    pub fn stage(&self) -> StageIndex {
        self.stage
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_main(&self) -> bool {
        !self.state.is_terminal()
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn items(&self) -> u32 {
        self.items
    }

    /// Count a coin pickup. Returns the new total, or None once the session has ended.
    pub fn collect_coin(&mut self) -> Option<u32> {
        if !self.is_main() {
            return None;
        }
        self.coins += 1;
        Some(self.coins)
    }

    /// Count an item pickup. Returns the new total, or None once the session has ended.
    pub fn collect_item(&mut self) -> Option<u32> {
        if !self.is_main() {
            return None;
        }
        self.items += 1;
        Some(self.items)
    }

    /// How many item slots are lit.
    pub fn highlighted_slots(&self) -> usize {
        (self.items as usize).min(ITEM_SLOT_COUNT)
    }

    /// Enter GameOver. Returns the stage a replay rebuilds, only on the first call.
    pub fn game_over(&mut self) -> Option<StageIndex> {
        self.finish(GameState::GameOver).then_some(self.stage)
    }

    /// Enter Clear. Returns the stage to continue with, only on the first call.
    pub fn clear(&mut self) -> Option<StageIndex> {
        self.finish(GameState::Clear).then(|| self.stage.next())
    }

    fn finish(&mut self, outcome: GameState) -> bool {
        if self.state != GameState::Main {
            return false;
        }
        self.state = outcome;
        true
    }
}
