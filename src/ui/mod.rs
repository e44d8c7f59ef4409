//! UI domain: in-run HUD for the stage, coins, and items.

mod hud_coins;
mod hud_items;

#[cfg(test)]
mod tests;

pub use hud_coins::stage_label;
pub use hud_items::{ItemSlot, slot_color};

use bevy::prelude::*;

use crate::core::{LevelSet, ScenePhase};
use crate::ui::hud_coins::{spawn_coin_display_ui, update_coin_display};
use crate::ui::hud_items::{spawn_item_slots_ui, update_item_slots};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(ScenePhase::Playing),
            (spawn_coin_display_ui, spawn_item_slots_ui),
        )
        .add_systems(
            Update,
            (update_coin_display, update_item_slots)
                .in_set(LevelSet::Presentation)
                .run_if(in_state(ScenePhase::Playing)),
        );
    }
}
