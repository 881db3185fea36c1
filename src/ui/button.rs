//! Clickable button widget

use glam::Vec2;

use crate::error::RenderError;
use crate::renderer::{Shape, ShapeId, Style, Surface, colors};

/// A labeled rectangle that reports clicks while active
///
/// Buttons start inactive. The hit region is fixed when the button is
/// created.
#[derive(Debug, Clone)]
pub struct Button {
    rect: ShapeId,
    label: ShapeId,
    text: String,
    min: Vec2,
    max: Vec2,
    active: bool,
}

impl Button {
    /// Draw a `width` x `height` button centered at `center`
    pub fn new<W: Surface>(
        window: &mut W,
        center: Vec2,
        width: f32,
        height: f32,
        label: &str,
    ) -> Result<Self, RenderError> {
        let half = Vec2::new(width, height) / 2.0;
        let min = center - half;
        let max = center + half;

        let rect = window.draw(Shape::Rect { p1: min, p2: max }, Style::filled(colors::LIGHT_GRAY))?;
        let label_id = window.draw(
            Shape::Text {
                anchor: center,
                text: label.to_owned(),
            },
            Style::filled(colors::BLACK),
        )?;

        let mut button = Self {
            rect,
            label: label_id,
            text: label.to_owned(),
            min,
            max,
            active: true,
        };
        button.deactivate(window)?;
        Ok(button)
    }

    /// True if the button is active and `p` lies inside it (edges included)
    pub fn clicked(&self, p: Vec2) -> bool {
        self.active
            && self.min.x <= p.x
            && p.x <= self.max.x
            && self.min.y <= p.y
            && p.y <= self.max.y
    }

    pub fn label(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Corners of the hit region (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    pub fn activate<W: Surface>(&mut self, window: &mut W) -> Result<(), RenderError> {
        window.set_fill(self.label, colors::BLACK)?;
        window.set_outline_width(self.rect, 2.0)?;
        self.active = true;
        Ok(())
    }

    pub fn deactivate<W: Surface>(&mut self, window: &mut W) -> Result<(), RenderError> {
        window.set_fill(self.label, colors::DARK_GREY)?;
        window.set_outline_width(self.rect, 1.0)?;
        self.active = false;
        Ok(())
    }
}
