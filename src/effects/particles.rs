//! Effects domain: one-shot particle explosion.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::SceneEntity;

pub const EXPLOSION_PARTICLES: usize = 48;

const PARTICLE_SIZE: f32 = 6.0;
const MIN_SPEED: f32 = 80.0;
const MAX_SPEED: f32 = 320.0;
const MIN_LIFETIME: f32 = 0.4;
const MAX_LIFETIME: f32 = 1.0;
/// Fraction of velocity kept per second
const DRAG: f32 = 0.25;

#[derive(Component, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub rgb: [f32; 3],
}

impl Particle {
    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

pub fn spawn_explosion(commands: &mut Commands, origin: Vec2) {
    let mut rng = rand::rng();

    for _ in 0..EXPLOSION_PARTICLES {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(MIN_SPEED..MAX_SPEED);
        let lifetime = rng.random_range(MIN_LIFETIME..MAX_LIFETIME);
        // Yellow core fading to red
        let rgb = [1.0, rng.random_range(0.2..0.9), 0.1];

        commands.spawn((
            Particle {
                velocity: Vec2::from_angle(angle) * speed,
                age: 0.0,
                lifetime,
                rgb,
            },
            SceneEntity,
            Sprite {
                color: Color::srgb(rgb[0], rgb[1], rgb[2]),
                custom_size: Some(Vec2::splat(PARTICLE_SIZE)),
                ..default()
            },
            Transform::from_xyz(origin.x, origin.y, 2.0),
        ));
    }
}

pub(crate) fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    let drag = DRAG.powf(dt);

    for (entity, mut particle, mut transform, mut sprite) in &mut query {
        particle.age += dt;
        if particle.is_expired() {
            commands.entity(entity).try_despawn();
            continue;
        }

        let step = particle.velocity * dt;
        transform.translation += step.extend(0.0);
        particle.velocity *= drag;

        let [r, g, b] = particle.rgb;
        sprite.color = Color::srgba(r, g, b, particle.alpha());
    }
}
