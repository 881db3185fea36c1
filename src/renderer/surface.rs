//! Drawing surface abstraction
//!
//! A `Surface` is one window holding retained shapes in logical coordinates.
//! Shapes are addressed by `ShapeId` and mutated in place; input is polled
//! with `wait_event`, the only blocking call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::colors;
use crate::consts::*;
use crate::error::RenderError;

/// Handle to a shape drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// Geometry of a drawable shape, in logical coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Vec2, to: Vec2 },
    /// Axis-aligned rectangle between two opposite corners
    Rect { p1: Vec2, p2: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Text { anchor: Vec2, text: String },
    /// Editable single-line text field, `width` in characters
    Entry { anchor: Vec2, width: u32, text: String },
}

impl Shape {
    /// Centre of the shape's bounding box
    pub fn centroid(&self) -> Vec2 {
        match self {
            Shape::Line { from, to } => (*from + *to) * 0.5,
            Shape::Rect { p1, p2 } => (*p1 + *p2) * 0.5,
            Shape::Circle { center, .. } => *center,
            Shape::Text { anchor, .. } | Shape::Entry { anchor, .. } => *anchor,
        }
    }

    /// Move every point of the shape by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line { from, to } => {
                *from += delta;
                *to += delta;
            }
            Shape::Rect { p1, p2 } => {
                *p1 += delta;
                *p2 += delta;
            }
            Shape::Circle { center, .. } => *center += delta,
            Shape::Text { anchor, .. } | Shape::Entry { anchor, .. } => *anchor += delta,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Shape::Text { text, .. } | Shape::Entry { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Shape::Text { text, .. } | Shape::Entry { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Paint attributes of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Interior color (text color for text shapes); `None` leaves it hollow
    pub fill: Option<[f32; 4]>,
    pub outline: [f32; 4],
    pub outline_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            outline: colors::BLACK,
            outline_width: 1.0,
        }
    }
}

impl Style {
    pub fn filled(fill: [f32; 4]) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }
}

/// Input delivered to a waiting caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse click, already mapped to logical coordinates
    Click(Vec2),
    /// The window was closed by the user or the environment
    Closed,
}

/// Title, pixel size and logical coordinate system of a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Logical coordinates of the lower-left corner
    pub lower_left: Vec2,
    /// Logical coordinates of the upper-right corner
    pub upper_right: Vec2,
}

impl WindowSpec {
    /// `coords` is `[x1, y1, x2, y2]`: (x1, y1) maps to the lower-left pixel
    /// corner and (x2, y2) to the upper-right one. y1 > y2 flips the y axis.
    pub fn new(title: impl Into<String>, width: u32, height: u32, coords: [f32; 4]) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            lower_left: Vec2::new(coords[0], coords[1]),
            upper_right: Vec2::new(coords[2], coords[3]),
        }
    }

    /// The main game window
    pub fn game() -> Self {
        Self::new(GAME_TITLE, GAME_WIDTH, GAME_HEIGHT, GAME_COORDS)
    }

    /// The aim dialog window
    pub fn dialog() -> Self {
        Self::new(DIALOG_TITLE, DIALOG_WIDTH, DIALOG_HEIGHT, DIALOG_COORDS)
    }

    fn scale(&self) -> Vec2 {
        let span = self.upper_right - self.lower_left;
        Vec2::new(self.width as f32 / span.x, self.height as f32 / span.y)
    }

    /// Logical point to pixel (origin top-left, y down)
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(
            (world.x - self.lower_left.x) * scale.x,
            (self.upper_right.y - world.y) * scale.y,
        )
    }

    /// Pixel (origin top-left, y down) to logical point
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(
            self.lower_left.x + screen.x / scale.x,
            self.upper_right.y - screen.y / scale.y,
        )
    }

    /// Logical point to normalized device coordinates ([-1, 1], y up)
    pub fn to_clip(&self, world: Vec2) -> Vec2 {
        let screen = self.to_screen(world);
        Vec2::new(
            screen.x / self.width as f32 * 2.0 - 1.0,
            1.0 - screen.y / self.height as f32 * 2.0,
        )
    }
}

/// One window that shapes can be drawn into
pub trait Surface {
    fn spec(&self) -> &WindowSpec;

    /// Draw a new shape and return its handle
    fn draw(&mut self, shape: Shape, style: Style) -> Result<ShapeId, RenderError>;

    /// Remove a shape from the window
    fn undraw(&mut self, id: ShapeId) -> Result<(), RenderError>;

    /// Move a shape by a logical offset
    fn translate(&mut self, id: ShapeId, delta: Vec2) -> Result<(), RenderError>;

    /// Replace the text of a text or entry shape
    fn set_text(&mut self, id: ShapeId, text: &str) -> Result<(), RenderError>;

    /// Current text of a text or entry shape (entries reflect user typing)
    fn text(&self, id: ShapeId) -> Result<String, RenderError>;

    fn set_fill(&mut self, id: ShapeId, color: [f32; 4]) -> Result<(), RenderError>;

    fn set_outline_width(&mut self, id: ShapeId, width: f32) -> Result<(), RenderError>;

    /// Block until the next click or until the window is closed
    fn wait_event(&mut self) -> InputEvent;

    /// Flush pending shape changes to the screen
    fn present(&mut self) -> Result<(), RenderError>;

    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// Opens windows
pub trait WindowSystem {
    type Window: Surface;

    fn open(&mut self, spec: &WindowSpec) -> Result<Self::Window, RenderError>;
}
