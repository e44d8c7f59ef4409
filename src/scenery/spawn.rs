//! Scenery domain: background, gear, and ground layers for a stage.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::StageRegistry;
use crate::core::{LevelTuning, SceneEntity, StageRequest};
use crate::scenery::parallax::{ParallaxLayer, Spin, background_ratio};

pub const GEAR_COUNT: usize = 10;
const GEAR_SPACING: f32 = 200.0;
const GEAR_HEIGHT: f32 = 160.0;
const GEAR_RATIO: f32 = 0.2;
const GEAR_SIZE: f32 = 48.0;
const GROUND_RATIO: f32 = 0.5;
const GROUND_HEIGHT: f32 = 80.0;

const BACKGROUND_Z: f32 = -30.0;
const GEAR_Z: f32 = -20.0;
const GROUND_Z: f32 = -10.0;

/// Random look of one gear decoration
#[derive(Debug, Clone, PartialEq)]
pub struct GearStyle {
    pub scale: f32,
    pub tilt_degrees: f32,
    pub period_seconds: f32,
}

impl GearStyle {
    /// Scale in [0, 2) with 0.1 steps, tilt in [-45, 45), period in [1, 30) seconds.
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            scale: rng.random_range(0..20) as f32 / 10.0,
            tilt_degrees: rng.random_range(-45..45) as f32,
            period_seconds: rng.random_range(1..30) as f32,
        }
    }
}

/// Decoration is seeded per stage so replays look the same.
pub fn gear_styles(stage_index: usize) -> Vec<GearStyle> {
    let mut rng = ChaCha8Rng::seed_from_u64(stage_index as u64);
    (0..GEAR_COUNT).map(|_| GearStyle::roll(&mut rng)).collect()
}

pub(crate) fn spawn_scenery(
    mut commands: Commands,
    registry: Res<StageRegistry>,
    request: Res<StageRequest>,
    tuning: Res<LevelTuning>,
) {
    let Some(stage) = registry.get(request.stage) else {
        return;
    };
    let map_width = stage.map_width();
    let view = tuning.view_size;

    spawn_background(&mut commands, &tuning, map_width, request.stage.get());

    for (i, style) in gear_styles(request.stage.get()).into_iter().enumerate() {
        spawn_gear(&mut commands, i, &style);
    }

    // Ground strip drifting at half speed
    let ground_width = map_width * GROUND_RATIO + view.x * 2.0;
    commands.spawn((
        ParallaxLayer {
            ratio: Vec2::new(GROUND_RATIO, 0.0),
            anchor: Vec2::new(map_width / 2.0, GROUND_HEIGHT),
            z: GROUND_Z,
        },
        SceneEntity,
        Sprite {
            color: Color::srgb(0.2, 0.22, 0.28),
            custom_size: Some(Vec2::new(ground_width, GROUND_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, GROUND_Z),
    ));
}

fn spawn_background(commands: &mut Commands, tuning: &LevelTuning, map_width: f32, seed: usize) {
    let width = tuning.background_width;
    let height = tuning.view_size.y;
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64 ^ 0x5eed);

    commands
        .spawn((
            ParallaxLayer {
                ratio: background_ratio(width, tuning.view_size.x, map_width),
                anchor: Vec2::ZERO,
                z: BACKGROUND_Z,
            },
            SceneEntity,
            Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Sky panel, positioned from the layer's bottom-left corner
            parent.spawn((
                Sprite {
                    color: Color::srgb(0.12, 0.16, 0.3),
                    custom_size: Some(Vec2::new(width, height)),
                    ..default()
                },
                Transform::from_xyz(width / 2.0, height / 2.0, 0.0),
            ));

            // Distant skyline
            let mut x = 0.0;
            while x < width {
                let block_width = rng.random_range(40.0..120.0);
                let block_height = rng.random_range(60.0..260.0);
                parent.spawn((
                    Sprite {
                        color: Color::srgb(0.09, 0.11, 0.2),
                        custom_size: Some(Vec2::new(block_width, block_height)),
                        ..default()
                    },
                    Transform::from_xyz(x + block_width / 2.0, block_height / 2.0, 0.1),
                ));
                x += block_width + rng.random_range(0.0..30.0);
            }
        });
}

fn spawn_gear(commands: &mut Commands, index: usize, style: &GearStyle) {
    let color = Color::srgb(0.45, 0.42, 0.38);
    let size = GEAR_SIZE;

    commands
        .spawn((
            ParallaxLayer {
                ratio: Vec2::new(GEAR_RATIO, 0.0),
                anchor: Vec2::new(index as f32 * GEAR_SPACING, GEAR_HEIGHT),
                z: GEAR_Z,
            },
            Spin {
                radians_per_second: std::f32::consts::TAU / style.period_seconds,
            },
            SceneEntity,
            Sprite {
                color,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, GEAR_Z)
                .with_rotation(Quat::from_rotation_z(style.tilt_degrees.to_radians()))
                .with_scale(Vec3::splat(style.scale)),
        ))
        .with_children(|gear| {
            // Teeth
            for angle in [0.0_f32, 45.0] {
                gear.spawn((
                    Sprite {
                        color,
                        custom_size: Some(Vec2::new(size * 1.4, size * 0.3)),
                        ..default()
                    },
                    Transform::from_rotation(Quat::from_rotation_z(angle.to_radians())),
                ));
                gear.spawn((
                    Sprite {
                        color,
                        custom_size: Some(Vec2::new(size * 0.3, size * 1.4)),
                        ..default()
                    },
                    Transform::from_rotation(Quat::from_rotation_z(angle.to_radians())),
                ));
            }
        });
}
