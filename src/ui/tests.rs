//! UI domain: tests for HUD formatting.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{BackgroundColor, Color, Node, Val, With, World};

use super::hud_coins::HUD_PADDING;
use super::hud_items::{ItemSlotsUI, spawn_item_slots_ui, update_item_slots};
use super::{ItemSlot, slot_color, stage_label};
use crate::core::{ITEM_SLOT_COUNT, LevelSession, StageIndex};

#[test]
fn test_stage_label_is_one_based() {
    assert_eq!(stage_label(StageIndex::new(0).display_number()), "STAGE 1");
    assert_eq!(stage_label(StageIndex::new(4).display_number()), "STAGE 5");
}

#[test]
fn test_slots_start_dim() {
    for index in 0..ITEM_SLOT_COUNT {
        assert_eq!(slot_color(index, 0), Color::BLACK);
    }
}

#[test]
fn test_slots_light_in_order_and_cap() {
    let mut session = LevelSession::new(StageIndex::new(0));
    session.collect_item();
    session.collect_item();

    let lit = session.highlighted_slots();
    assert_eq!(slot_color(0, lit), Color::WHITE);
    assert_eq!(slot_color(1, lit), Color::WHITE);
    assert_eq!(slot_color(2, lit), Color::BLACK);

    session.collect_item();
    session.collect_item();
    assert_eq!(session.highlighted_slots(), ITEM_SLOT_COUNT);
    for index in 0..ITEM_SLOT_COUNT {
        assert_eq!(slot_color(index, session.highlighted_slots()), Color::WHITE);
    }
}

#[test]
fn test_item_slots_sit_top_right() {
    let mut world = World::new();
    world
        .run_system_once(spawn_item_slots_ui)
        .expect("slots spawn");

    let mut row = world.query_filtered::<&Node, With<ItemSlotsUI>>();
    let node = row.single(&world).expect("one slot row");
    assert_eq!(node.right, Val::Px(HUD_PADDING));
    assert_eq!(node.top, Val::Px(HUD_PADDING));
    assert_eq!(node.left, Val::Auto);

    let mut slots = world.query::<&ItemSlot>();
    let mut indices: Vec<usize> = slots.iter(&world).map(|slot| slot.index).collect();
    indices.sort();
    assert_eq!(indices, (0..ITEM_SLOT_COUNT).collect::<Vec<_>>());
}

#[test]
fn test_item_slots_follow_session() {
    let mut world = World::new();
    world
        .run_system_once(spawn_item_slots_ui)
        .expect("slots spawn");

    let mut session = LevelSession::new(StageIndex::new(0));
    session.collect_item();
    session.collect_item();
    world.insert_resource(session);

    world
        .run_system_once(update_item_slots)
        .expect("slots update");

    let mut slots = world.query::<(&ItemSlot, &BackgroundColor)>();
    for (slot, background) in slots.iter(&world) {
        let expected = if slot.index < 2 {
            Color::WHITE
        } else {
            Color::BLACK
        };
        assert_eq!(background.0, expected);
    }
}
