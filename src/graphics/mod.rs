//! Presenters
//!
//! Each presenter keeps shapes in one window in step with a model object:
//! - `GraphicGame` wraps `sim::Game` and owns the game window
//! - `GraphicPlayer` wraps one `sim::Player` (cannon + score label)
//! - `GraphicProjectile` wraps one `sim::Projectile` (the ball)
//!
//! Model values (score, wind, turn) are never cached here.

pub mod game;
pub mod player;
pub mod projectile;

pub use game::GraphicGame;
pub use player::GraphicPlayer;
pub use projectile::GraphicProjectile;

use crate::renderer::colors;

/// Look up a model color name, falling back to black
pub(crate) fn resolve_color(name: &str) -> [f32; 4] {
    colors::named(name).unwrap_or_else(|| {
        log::warn!("Unknown color {name:?}, drawing in black");
        colors::BLACK
    })
}
