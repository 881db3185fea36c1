//! Player: cannon position, aim and score

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::consts::{DEFAULT_ANGLE, DEFAULT_VELOCITY, FIELD_X_MAX, FIELD_X_MIN};
use crate::mirror_angle;

/// One side of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal cannon position (fixed for the whole game)
    pub x: f32,
    /// Color name used for the cannon and its shots
    pub color: String,
    /// Right-hand player: angles are mirrored so 45° points left
    pub reversed: bool,
    score: u32,
    /// Last (angle, velocity) this player fired with
    aim: (f32, f32),
}

impl Player {
    pub fn new(x: f32, color: impl Into<String>, reversed: bool) -> Self {
        Self {
            x,
            color: color.into(),
            reversed,
            score: 0,
            aim: (DEFAULT_ANGLE, DEFAULT_VELOCITY),
        }
    }

    /// Fire a new projectile from the cannon mouth
    ///
    /// The aim is remembered as entered; the mirroring for reversed players
    /// only affects the launch.
    pub fn fire(&mut self, angle: f32, velocity: f32, wind: f32, cannon_size: f32) -> Projectile {
        self.aim = (angle, velocity);

        let launch_angle = if self.reversed { mirror_angle(angle) } else { angle };

        Projectile::launch(
            launch_angle,
            velocity,
            wind,
            Vec2::new(self.x, cannon_size / 2.0),
            FIELD_X_MIN,
            FIELD_X_MAX,
        )
    }

    /// Signed horizontal gap between a projectile and this player's cannon
    ///
    /// Negative when the ball is left of the cannon, positive when right,
    /// and exactly 0.0 when they overlap.
    pub fn projectile_distance(&self, proj: &Projectile, cannon_size: f32, ball_size: f32) -> f32 {
        let cannon_left = self.x - cannon_size / 2.0;
        let cannon_right = self.x + cannon_size / 2.0;
        let ball_left = proj.x() - ball_size / 2.0;
        let ball_right = proj.x() + ball_size / 2.0;

        if ball_right < cannon_left {
            ball_right - cannon_left
        } else if ball_left > cannon_right {
            ball_left - cannon_right
        } else {
            0.0
        }
    }

    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn aim(&self) -> (f32, f32) {
        self.aim
    }
}
