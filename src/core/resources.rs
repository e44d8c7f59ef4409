//! Core domain: tuning and scene request resources.

use bevy::prelude::*;

use crate::core::session::StageIndex;

/// Compiled-in gameplay constants for the level.
#[derive(Resource, Debug, Clone)]
pub struct LevelTuning {
    /// Visible area in world units; also the window size.
    pub view_size: Vec2,
    /// Downward acceleration applied by the physics world
    pub gravity: f32,
    /// Upward velocity added every frame while pressed (impulse per unit mass)
    pub thrust: f32,
    /// Physics-level speed limit of the player body
    pub max_speed: f32,
    /// Constant horizontal speed while the session is running
    pub forward_speed: f32,
    /// Distance the player may leave the view vertically before the run ends
    pub bounds_margin: f32,
    pub player_radius: f32,
    /// Screen fraction from the left edge where the camera keeps the player
    pub camera_lead: f32,
    pub background_width: f32,
    /// Full fade duration of a scene rebuild (out + in)
    pub fade_seconds: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            view_size: Vec2::new(960.0, 640.0),
            gravity: 900.0,
            thrust: 30.0,
            max_speed: 600.0,
            forward_speed: 200.0,
            bounds_margin: 100.0,
            player_radius: 14.0,
            camera_lead: 0.3,
            background_width: 1600.0,
            fade_seconds: 1.0,
        }
    }
}

impl LevelTuning {
    /// True once the player has left the view vertically by more than the margin.
    /// The lower bound is exclusive and the upper bound inclusive.
    pub fn is_out_of_bounds(&self, y: f32) -> bool {
        y < -self.bounds_margin || y >= self.view_size.y + self.bounds_margin
    }

    /// Camera center that keeps the player at `camera_lead` of the screen width
    /// without scrolling left of the map start.
    pub fn camera_focus(&self, player_x: f32) -> Vec2 {
        let half = self.view_size * 0.5;
        let x = player_x + self.view_size.x * (0.5 - self.camera_lead);
        Vec2::new(x.max(half.x), half.y)
    }

    /// World position of the bottom-left corner of the view for a camera center.
    pub fn viewport_origin(&self, camera_center: Vec2) -> Vec2 {
        camera_center - self.view_size * 0.5
    }
}

/// Stage the next scene construction builds.
#[derive(Resource, Debug, Default)]
pub struct StageRequest {
    pub stage: StageIndex,
}
