//! Projectile presenter

use glam::Vec2;

use crate::error::RenderError;
use crate::renderer::{Shape, ShapeId, Style, Surface};
use crate::sim::Projectile;

/// A fired projectile and the circle that shows it
#[derive(Debug, Clone)]
pub(crate) struct Shot {
    projectile: Projectile,
    shape: ShapeId,
}

impl Shot {
    /// Draw a ball of diameter `ball_size` at the projectile's position
    pub(crate) fn draw<W: Surface>(
        projectile: Projectile,
        color: [f32; 4],
        ball_size: f32,
        window: &mut W,
    ) -> Result<Self, RenderError> {
        let shape = window.draw(
            Shape::Circle {
                center: projectile.pos,
                radius: ball_size / 2.0,
            },
            Style::filled(color),
        )?;
        Ok(Self { projectile, shape })
    }

    pub(crate) fn undraw<W: Surface>(self, window: &mut W) -> Result<(), RenderError> {
        window.undraw(self.shape)
    }
}

/// View of a player's live projectile, bound to the window it is drawn in
pub struct GraphicProjectile<'a, W: Surface> {
    shot: &'a mut Shot,
    window: &'a mut W,
}

impl<'a, W: Surface> GraphicProjectile<'a, W> {
    pub(crate) fn new(shot: &'a mut Shot, window: &'a mut W) -> Self {
        Self { shot, window }
    }

    /// Advance the projectile by `dt` and move its circle along
    ///
    /// The circle is moved by the same offset the model moved, so its centre
    /// always matches the model position.
    pub fn update(&mut self, dt: f32) -> Result<(), RenderError> {
        let before = self.shot.projectile.pos;
        self.shot.projectile.update(dt);
        let after = self.shot.projectile.pos;

        let delta: Vec2 = after - before;
        if delta != Vec2::ZERO {
            self.window.translate(self.shot.shape, delta)?;
        }
        Ok(())
    }

    pub fn x(&self) -> f32 {
        self.shot.projectile.x()
    }

    pub fn y(&self) -> f32 {
        self.shot.projectile.y()
    }

    pub fn is_moving(&self) -> bool {
        self.shot.projectile.is_moving()
    }

    /// Snapshot of the model projectile
    pub fn projectile(&self) -> Projectile {
        self.shot.projectile
    }

    /// Handle of the circle shape
    pub fn shape(&self) -> ShapeId {
        self.shot.shape
    }

    pub fn window(&self) -> &W {
        &*self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut *self.window
    }
}
