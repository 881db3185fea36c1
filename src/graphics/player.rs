//! Player presenter: cannon, score label and the player's live shot

use glam::Vec2;

use super::projectile::{GraphicProjectile, Shot};
use super::resolve_color;
use crate::error::RenderError;
use crate::renderer::{Shape, ShapeId, Style, Surface, colors};
use crate::sim::{Player, Projectile};

/// Distance below the ground at which the score label sits
const SCORE_LABEL_Y: f32 = -5.0;

pub(crate) fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Shapes drawn for one player
#[derive(Debug, Clone)]
pub(crate) struct PlayerHandles {
    score_text: ShapeId,
    cannon: ShapeId,
    /// At most one live shot per player
    shot: Option<Shot>,
}

impl PlayerHandles {
    /// Draw the score label and the cannon for `player`
    pub(crate) fn draw<W: Surface>(
        player: &Player,
        cannon_size: f32,
        window: &mut W,
    ) -> Result<Self, RenderError> {
        let score_text = window.draw(
            Shape::Text {
                anchor: Vec2::new(player.x, SCORE_LABEL_Y),
                text: score_label(player.score()),
            },
            Style::filled(colors::BLACK),
        )?;

        let half = cannon_size / 2.0;
        let cannon = window.draw(
            Shape::Rect {
                p1: Vec2::new(player.x - half, 0.0),
                p2: Vec2::new(player.x + half, cannon_size),
            },
            Style::filled(resolve_color(&player.color)),
        )?;

        Ok(Self {
            score_text,
            cannon,
            shot: None,
        })
    }
}

/// View of one player bound to its shapes and the game window
///
/// Every query goes to the model; the view only adds the draw handles.
pub struct GraphicPlayer<'a, W: Surface> {
    pub(crate) index: usize,
    pub(crate) player: &'a mut Player,
    pub(crate) handles: &'a mut PlayerHandles,
    pub(crate) window: &'a mut W,
    pub(crate) wind: f32,
    pub(crate) cannon_size: f32,
    pub(crate) ball_size: f32,
}

impl<'a, W: Surface> GraphicPlayer<'a, W> {
    /// Fire a new shot, replacing this player's previous one
    ///
    /// The old ball is undrawn before the new one appears.
    pub fn fire(self, angle: f32, velocity: f32) -> Result<GraphicProjectile<'a, W>, RenderError> {
        let GraphicPlayer {
            index,
            player,
            handles,
            window,
            wind,
            cannon_size,
            ball_size,
        } = self;

        let projectile = player.fire(angle, velocity, wind, cannon_size);
        log::debug!("Player {index} fires: angle={angle} velocity={velocity} wind={wind:.2}");

        if let Some(old) = handles.shot.take() {
            old.undraw(window)?;
        }

        let shot = Shot::draw(projectile, resolve_color(&player.color), ball_size, window)?;
        Ok(GraphicProjectile::new(handles.shot.insert(shot), window))
    }

    /// The player's current shot, if any
    pub fn projectile(&mut self) -> Option<GraphicProjectile<'_, W>> {
        let window = &mut *self.window;
        self.handles
            .shot
            .as_mut()
            .map(|shot| GraphicProjectile::new(shot, window))
    }

    /// Add one point and show it
    pub fn increase_score(&mut self) -> Result<(), RenderError> {
        // Label first: if drawing fails the model score stays untouched
        let next = self.player.score() + 1;
        self.window.set_text(self.handles.score_text, &score_label(next))?;
        self.player.increase_score();
        Ok(())
    }

    pub fn aim(&self) -> (f32, f32) {
        self.player.aim()
    }

    pub fn color(&self) -> &str {
        &self.player.color
    }

    pub fn x(&self) -> f32 {
        self.player.x
    }

    pub fn score(&self) -> u32 {
        self.player.score()
    }

    /// Position of this player in the game's roster
    pub fn index(&self) -> usize {
        self.index
    }

    /// Signed gap between `proj` and this player's cannon; 0.0 is a hit
    pub fn projectile_distance(&self, proj: &Projectile) -> f32 {
        self.player.projectile_distance(proj, self.cannon_size, self.ball_size)
    }

    pub fn score_text(&self) -> ShapeId {
        self.handles.score_text
    }

    pub fn cannon(&self) -> ShapeId {
        self.handles.cannon
    }
}
