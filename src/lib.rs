//! Cannon Game - a two-player artillery game
//!
//! Core modules:
//! - `sim`: Game model (players, projectiles, wind, turn indicator)
//! - `renderer`: Drawing surface abstraction and the headless retained scene
//! - `ui`: Button widget and the modal aim dialog
//! - `graphics`: Presenters keeping shapes in sync with the model
//! - `session`: Turn loop (prompt, fire, animate, score, switch)
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod graphics;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{GameError, ParseError, RenderError, SnapshotError};
pub use graphics::{GraphicGame, GraphicPlayer, GraphicProjectile};
pub use session::{Session, TurnOutcome};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Gravity acting on projectiles (units/s²)
    pub const GRAVITY: f32 = 9.8;

    /// Horizontal extent of the playing field
    pub const FIELD_X_MIN: f32 = -110.0;
    pub const FIELD_X_MAX: f32 = 110.0;

    /// Player positions and colors (left player first)
    pub const LEFT_PLAYER_X: f32 = -90.0;
    pub const RIGHT_PLAYER_X: f32 = 90.0;
    pub const LEFT_PLAYER_COLOR: &str = "blue";
    pub const RIGHT_PLAYER_COLOR: &str = "red";

    /// Aim shown in the first dialog of each player
    pub const DEFAULT_ANGLE: f32 = 45.0;
    pub const DEFAULT_VELOCITY: f32 = 40.0;

    /// Wind is drawn uniformly from [-MAX_WIND, MAX_WIND)
    pub const MAX_WIND: f32 = 10.0;

    /// Cannon and ball sizes (logical units)
    pub const CANNON_SIZE: f32 = 10.0;
    pub const BALL_SIZE: f32 = 3.0;

    /// Fixed simulation timestep (50 Hz)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Frames presented per second while a shot is in the air
    pub const FRAME_RATE: u32 = 50;
    /// Upper bound on ticks for a single shot
    pub const MAX_TICKS_PER_SHOT: u32 = 10_000;

    /// Game window
    pub const GAME_TITLE: &str = "Cannon game";
    pub const GAME_WIDTH: u32 = 640;
    pub const GAME_HEIGHT: u32 = 480;
    /// Logical bounds (x1, y1, x2, y2)
    pub const GAME_COORDS: [f32; 4] = [-110.0, -10.0, 110.0, 155.0];

    /// Aim dialog window
    pub const DIALOG_TITLE: &str = "Fire";
    pub const DIALOG_WIDTH: u32 = 200;
    pub const DIALOG_HEIGHT: u32 = 300;
    /// y1 > y2: the dialog's y axis grows downwards
    pub const DIALOG_COORDS: [f32; 4] = [0.0, 4.5, 4.0, 0.5];
}

/// Convert a launch angle in degrees and a speed into a velocity vector
#[inline]
pub fn launch_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}

/// Mirror a launch angle across the vertical axis
#[inline]
pub fn mirror_angle(angle_deg: f32) -> f32 {
    180.0 - angle_deg
}
