//! Core domain: tests for the session state machine, stage rules, and flow curves.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{Transform, Vec2, World};

use super::systems::check_stage_bounds;
use super::ui::outcome::OutcomeKind;
use super::ui::{FadeDirection, fade_alpha, go_banner_scale};
use super::{
    GameOverCause, GameOverEvent, GameState, ITEM_SLOT_COUNT, LevelSession, LevelTuning,
    STAGE_COUNT, StageClearedEvent, StageIndex, session_is_main,
};
use crate::movement::Player;
use crate::stage::StageLayout;

// -----------------------------------------------------------------------------
// StageIndex tests
// -----------------------------------------------------------------------------

#[test]
fn test_stage_index_next_wraps() {
    assert_eq!(StageIndex::new(0).next(), StageIndex::new(1));
    assert_eq!(StageIndex::new(3).next(), StageIndex::new(4));
    assert_eq!(StageIndex::new(4).next(), StageIndex::new(0));
    assert_eq!(StageIndex::new(STAGE_COUNT - 1).next().get(), 0);
}

#[test]
fn test_stage_index_stays_in_range() {
    assert_eq!(StageIndex::new(STAGE_COUNT + 2).get(), 2);
    assert_eq!(StageIndex::new(2).display_number(), 3);
}

// -----------------------------------------------------------------------------
// LevelSession tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_session_starts_in_main() {
    let session = LevelSession::new(StageIndex::new(2));
    assert_eq!(session.state(), GameState::Main);
    assert!(session.is_main());
    assert_eq!(session.coins(), 0);
    assert_eq!(session.items(), 0);
    assert!(!session.state().is_terminal());
}

#[test]
fn test_coin_count_tracks_every_pickup() {
    let mut session = LevelSession::new(StageIndex::new(0));
    let mut previous = 0;
    for expected in 1..=25 {
        let total = session.collect_coin().expect("session is running");
        assert_eq!(total, expected);
        assert!(total > previous);
        previous = total;
    }
    assert_eq!(session.coins(), 25);
}

#[test]
fn test_item_highlight_capped_at_slot_count() {
    let mut session = LevelSession::new(StageIndex::new(0));
    assert_eq!(session.highlighted_slots(), 0);

    for n in 1..=5u32 {
        session.collect_item();
        assert_eq!(session.items(), n);
        assert_eq!(
            session.highlighted_slots(),
            (n as usize).min(ITEM_SLOT_COUNT)
        );
    }
    assert_eq!(session.highlighted_slots(), 3);
}

#[test]
fn test_game_over_fires_once() {
    let mut session = LevelSession::new(StageIndex::new(3));

    assert_eq!(session.game_over(), Some(StageIndex::new(3)));
    assert_eq!(session.state(), GameState::GameOver);
    assert!(session.state().is_terminal());

    assert_eq!(session.game_over(), None);
    assert_eq!(session.clear(), None);
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn test_clear_fires_once_and_selects_next_stage() {
    let mut session = LevelSession::new(StageIndex::new(4));

    assert_eq!(session.clear(), Some(StageIndex::new(0)));
    assert_eq!(session.state(), GameState::Clear);

    assert_eq!(session.clear(), None);
    assert_eq!(session.game_over(), None);
    assert_eq!(session.state(), GameState::Clear);
}

#[test]
fn test_terminal_session_ignores_pickups() {
    let mut session = LevelSession::new(StageIndex::new(0));
    session.collect_coin();
    session.collect_item();
    session.game_over();

    assert_eq!(session.collect_coin(), None);
    assert_eq!(session.collect_item(), None);
    assert_eq!(session.coins(), 1);
    assert_eq!(session.items(), 1);
}

#[test]
fn test_rebuilt_session_starts_from_zero() {
    let mut lost = LevelSession::new(StageIndex::new(1));
    lost.collect_coin();
    lost.collect_item();
    let target = lost.game_over().expect("first game over");

    let replay = LevelSession::new(target);
    assert_eq!(replay.stage(), StageIndex::new(1));
    assert_eq!(replay.coins(), 0);
    assert_eq!(replay.items(), 0);
    assert!(replay.is_main());
}

// -----------------------------------------------------------------------------
// LevelTuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_bounds_lower_edge_is_exclusive() {
    let tuning = LevelTuning::default();
    let margin = tuning.bounds_margin;

    assert!(!tuning.is_out_of_bounds(-margin));
    assert!(tuning.is_out_of_bounds(-margin - 0.01));
}

#[test]
fn test_bounds_upper_edge_is_inclusive() {
    let tuning = LevelTuning::default();
    let top = tuning.view_size.y + tuning.bounds_margin;

    assert!(tuning.is_out_of_bounds(top));
    assert!(!tuning.is_out_of_bounds(top - 0.01));
    assert!(!tuning.is_out_of_bounds(tuning.view_size.y * 0.5));
}

#[test]
fn test_camera_focus_never_scrolls_left_of_map() {
    let tuning = LevelTuning::default();
    let half = tuning.view_size * 0.5;

    assert_eq!(tuning.camera_focus(0.0), half);

    let far = 3000.0;
    let focus = tuning.camera_focus(far);
    let origin = tuning.viewport_origin(focus);
    // Player sits at the lead fraction of the screen
    let screen_x = far - origin.x;
    assert!((screen_x - tuning.view_size.x * tuning.camera_lead).abs() < 1e-3);
    assert_eq!(origin.y, 0.0);
}

#[test]
fn test_viewport_origin() {
    let tuning = LevelTuning::default();
    assert_eq!(
        tuning.viewport_origin(Vec2::new(480.0, 320.0)),
        Vec2::new(0.0, 0.0)
    );
}

// -----------------------------------------------------------------------------
// Flow curve tests
// -----------------------------------------------------------------------------

#[test]
fn test_fade_alpha() {
    assert_eq!(fade_alpha(FadeDirection::Out, 0.0, 0.5), 0.0);
    assert_eq!(fade_alpha(FadeDirection::Out, 0.25, 0.5), 0.5);
    assert_eq!(fade_alpha(FadeDirection::Out, 2.0, 0.5), 1.0);
    assert_eq!(fade_alpha(FadeDirection::In, 0.0, 0.5), 1.0);
    assert_eq!(fade_alpha(FadeDirection::In, 0.5, 0.5), 0.0);
    assert_eq!(fade_alpha(FadeDirection::Out, 0.0, 0.0), 1.0);
}

#[test]
fn test_go_banner_scale_curve() {
    assert_eq!(go_banner_scale(0.0), Some(0.0));
    assert!((go_banner_scale(0.05).unwrap() - 0.5).abs() < 1e-4);
    assert_eq!(go_banner_scale(0.3), Some(1.0));
    assert!((go_banner_scale(0.65).unwrap() - 0.5).abs() < 1e-3);
    assert_eq!(go_banner_scale(0.71), None);
}

#[test]
fn test_outcome_banner_text() {
    assert_eq!(OutcomeKind::GameOver.banner(), "GAME OVER");
    assert_eq!(OutcomeKind::GameOver.button_label(), "REPLAY");
    assert_eq!(OutcomeKind::Clear.banner(), "CLEAR!");
    assert_eq!(OutcomeKind::Clear.button_label(), "NEXT");
}

// -----------------------------------------------------------------------------
// Stage rule system tests
// -----------------------------------------------------------------------------

const MAP_WIDTH: f32 = 2880.0;

fn rules_world(stage: usize, player: Vec2) -> World {
    let mut world = World::new();
    world.insert_resource(LevelTuning::default());
    world.insert_resource(LevelSession::new(StageIndex::new(stage)));
    world.insert_resource(StageLayout {
        stage: StageIndex::new(stage),
        map_width: MAP_WIDTH,
    });
    world.init_resource::<Messages<StageClearedEvent>>();
    world.init_resource::<Messages<GameOverEvent>>();
    world.spawn((Player, Transform::from_xyz(player.x, player.y, 0.0)));
    world
}

fn run_rules(world: &mut World) {
    world
        .run_system_once(check_stage_bounds)
        .expect("stage rules run");
}

fn cleared(world: &mut World) -> Vec<StageClearedEvent> {
    world
        .resource_mut::<Messages<StageClearedEvent>>()
        .drain()
        .collect()
}

fn game_overs(world: &mut World) -> Vec<GameOverEvent> {
    world
        .resource_mut::<Messages<GameOverEvent>>()
        .drain()
        .collect()
}

#[test]
fn test_goal_clears_once_with_next_stage() {
    for stage in 0..STAGE_COUNT {
        let mut world = rules_world(stage, Vec2::new(MAP_WIDTH, 300.0));

        run_rules(&mut world);
        let events = cleared(&mut world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].stage, StageIndex::new(stage));
        assert_eq!(events[0].next.get(), (stage + 1) % STAGE_COUNT);
        assert_eq!(world.resource::<LevelSession>().state(), GameState::Clear);

        // Still past the goal next frame: nothing fires again
        run_rules(&mut world);
        assert!(cleared(&mut world).is_empty());
        assert!(game_overs(&mut world).is_empty());
    }
}

#[test]
fn test_clear_wins_over_out_of_bounds_in_same_frame() {
    let mut world = rules_world(1, Vec2::new(MAP_WIDTH + 5.0, -500.0));

    run_rules(&mut world);

    assert_eq!(cleared(&mut world).len(), 1);
    assert!(game_overs(&mut world).is_empty());
    assert_eq!(world.resource::<LevelSession>().state(), GameState::Clear);
}

#[test]
fn test_leaving_view_ends_run() {
    let tuning = LevelTuning::default();
    let top = tuning.view_size.y + tuning.bounds_margin;
    let mut world = rules_world(3, Vec2::new(400.0, top));

    run_rules(&mut world);

    let events = game_overs(&mut world);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].cause, GameOverCause::OutOfBounds);
    assert_eq!(events[0].stage, StageIndex::new(3));
    assert_eq!(events[0].position, Vec2::new(400.0, top));
    assert!(cleared(&mut world).is_empty());

    run_rules(&mut world);
    assert!(game_overs(&mut world).is_empty());
}

#[test]
fn test_inside_view_keeps_running() {
    let mut world = rules_world(0, Vec2::new(400.0, -100.0));

    run_rules(&mut world);

    assert!(cleared(&mut world).is_empty());
    assert!(game_overs(&mut world).is_empty());
    assert!(world.resource::<LevelSession>().is_main());
}

#[test]
fn test_session_is_main_condition() {
    let mut world = World::new();
    assert!(!world.run_system_once(session_is_main).expect("condition runs"));

    world.insert_resource(LevelSession::new(StageIndex::new(0)));
    assert!(world.run_system_once(session_is_main).expect("condition runs"));

    world.resource_mut::<LevelSession>().clear();
    assert!(!world.run_system_once(session_is_main).expect("condition runs"));
}
