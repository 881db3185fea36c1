//! Game model
//!
//! All gameplay rules live here. This module knows nothing about drawing:
//! - Projectile physics (gravity, wind, field bounds)
//! - Player aim, score and hit distance
//! - Turn indicator and seeded wind generation

pub mod game;
pub mod player;
pub mod projectile;

pub use game::Game;
pub use player::Player;
pub use projectile::Projectile;
