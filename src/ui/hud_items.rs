//! UI domain: item indicator slots.

use bevy::prelude::*;

use crate::core::{ITEM_SLOT_COUNT, LevelSession, SceneEntity};
use crate::ui::hud_coins::HUD_PADDING;

const SLOT_SIZE: f32 = 20.0;

/// Marker for the item slot row, anchored top right
#[derive(Component)]
pub struct ItemSlotsUI;

/// One item indicator, ordered left to right
#[derive(Component, Debug)]
pub struct ItemSlot {
    pub index: usize,
}

pub fn slot_color(index: usize, highlighted: usize) -> Color {
    if index < highlighted {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

pub(crate) fn spawn_item_slots_ui(mut commands: Commands) {
    commands
        .spawn((
            ItemSlotsUI,
            SceneEntity,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for index in 0..ITEM_SLOT_COUNT {
                parent.spawn((
                    ItemSlot { index },
                    Node {
                        width: Val::Px(SLOT_SIZE),
                        height: Val::Px(SLOT_SIZE),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(slot_color(index, 0)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.5)),
                ));
            }
        });
}

pub(crate) fn update_item_slots(
    session: Option<Res<LevelSession>>,
    mut query: Query<(&ItemSlot, &mut BackgroundColor)>,
) {
    let Some(session) = session else {
        return;
    };
    if !session.is_changed() {
        return;
    }

    let highlighted = session.highlighted_slots();
    for (slot, mut background) in &mut query {
        *background = BackgroundColor(slot_color(slot.index, highlighted));
    }
}
