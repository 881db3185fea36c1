//! Projectile flight under gravity and wind

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GRAVITY;
use crate::launch_velocity;

/// A fired cannon ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Horizontal acceleration from wind
    pub wind: f32,
    /// Flight ends when x leaves (x_min, x_max)
    pub x_min: f32,
    pub x_max: f32,
    moving: bool,
}

impl Projectile {
    /// Launch from `pos` at `angle_deg` (counter-clockwise from +x) with `speed`
    pub fn launch(angle_deg: f32, speed: f32, wind: f32, pos: Vec2, x_min: f32, x_max: f32) -> Self {
        let mut projectile = Self {
            pos,
            vel: launch_velocity(angle_deg, speed),
            wind,
            x_min,
            x_max,
            moving: true,
        };
        projectile.moving = projectile.in_flight();
        projectile
    }

    /// Advance by `dt` seconds. No-op once the projectile has stopped.
    pub fn update(&mut self, dt: f32) {
        if !self.moving {
            return;
        }

        let vel1 = Vec2::new(self.vel.x + self.wind * dt, self.vel.y - GRAVITY * dt);
        let avg = (self.vel + vel1) * 0.5;

        self.pos.x += dt * avg.x;
        // Clamp at ground level so a landed ball rests on y = 0
        self.pos.y = (self.pos.y + dt * avg.y).max(0.0);
        self.vel = vel1;

        self.moving = self.in_flight();
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    fn in_flight(&self) -> bool {
        self.pos.y > 0.0 && self.x_min < self.pos.x && self.pos.x < self.x_max
    }
}
