//! Scenery domain: tests for parallax math and seeded decoration.

use bevy::prelude::Vec2;

use super::{GEAR_COUNT, background_ratio, gear_styles, parallax_offset};

#[test]
fn test_parallax_offset_ratio_extremes() {
    let player = Vec2::new(500.0, 300.0);
    let anchor = Vec2::new(200.0, 160.0);

    // A ratio of zero pins the layer to the screen
    assert_eq!(parallax_offset(player, Vec2::ZERO, anchor), anchor);
    // A ratio of one moves it fully against the player
    assert_eq!(
        parallax_offset(player, Vec2::ONE, anchor),
        Vec2::new(-300.0, -140.0)
    );
}

#[test]
fn test_nearer_layers_move_faster() {
    let anchor = Vec2::ZERO;
    let start = Vec2::new(0.0, 300.0);
    let end = Vec2::new(1000.0, 300.0);

    let far = parallax_offset(end, Vec2::new(0.2, 0.0), anchor)
        - parallax_offset(start, Vec2::new(0.2, 0.0), anchor);
    let near = parallax_offset(end, Vec2::new(0.5, 0.0), anchor)
        - parallax_offset(start, Vec2::new(0.5, 0.0), anchor);

    assert_eq!(far, Vec2::new(-200.0, 0.0));
    assert_eq!(near, Vec2::new(-500.0, 0.0));
    assert!(near.x.abs() > far.x.abs());
}

#[test]
fn test_background_ratio_spans_map() {
    let ratio = background_ratio(1600.0, 960.0, 3200.0);
    assert_eq!(ratio, Vec2::new(0.2, 0.0));

    // Background scrolls exactly its spare width across the map
    let shift = parallax_offset(Vec2::new(3200.0, 0.0), ratio, Vec2::ZERO);
    assert_eq!(shift.x, -(1600.0 - 960.0));

    assert_eq!(background_ratio(800.0, 960.0, 3200.0), Vec2::ZERO);
    assert_eq!(background_ratio(1600.0, 960.0, 0.0), Vec2::ZERO);
}

#[test]
fn test_gear_styles_are_seeded_per_stage() {
    let first = gear_styles(2);
    let again = gear_styles(2);
    assert_eq!(first.len(), GEAR_COUNT);
    assert_eq!(first, again);

    for style in &first {
        assert!((0.0..2.0).contains(&style.scale));
        assert!((-45.0..45.0).contains(&style.tilt_degrees));
        assert!((1.0..30.0).contains(&style.period_seconds));
    }
}
