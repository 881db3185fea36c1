//! Headless retained scene
//!
//! `Scene` implements `Surface` entirely in memory: shapes are kept in draw
//! order, input comes from a pre-recorded script, and the whole window can
//! be tessellated into clip-space vertices for a GPU backend.

use std::collections::{BTreeMap, HashMap, VecDeque};

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::surface::{InputEvent, Shape, ShapeId, Style, Surface, WindowSpec, WindowSystem};
use super::vertex::Vertex;
use crate::error::RenderError;

/// Scripted user input for a headless window
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    /// Mouse click at a logical point
    Click(Vec2),
    /// Replace the text of the n-th entry field (in draw order)
    Type { entry: usize, text: String },
    /// The user closes the window
    Close,
}

/// A shape together with its paint attributes
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnShape {
    pub shape: Shape,
    pub style: Style,
}

/// In-memory window
#[derive(Debug)]
pub struct Scene {
    spec: WindowSpec,
    /// Live shapes; ids grow monotonically so map order is draw order
    shapes: BTreeMap<ShapeId, DrawnShape>,
    next_id: u32,
    script: VecDeque<ScriptEvent>,
    frames: u64,
    closed: bool,
}

impl Scene {
    pub fn new(spec: WindowSpec) -> Self {
        Self {
            spec,
            shapes: BTreeMap::new(),
            next_id: 1,
            script: VecDeque::new(),
            frames: 0,
            closed: false,
        }
    }

    /// Append events to the input script
    pub fn queue(&mut self, events: impl IntoIterator<Item = ScriptEvent>) {
        self.script.extend(events);
    }

    pub fn shape(&self, id: ShapeId) -> Option<&DrawnShape> {
        self.shapes.get(&id)
    }

    pub fn centroid(&self, id: ShapeId) -> Option<Vec2> {
        self.shape(id).map(|s| s.shape.centroid())
    }

    /// Live shapes in draw order
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &DrawnShape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    pub fn live_shapes(&self) -> usize {
        self.shapes.len()
    }

    /// First live shape whose text equals `text`
    pub fn find_text(&self, text: &str) -> Option<ShapeId> {
        self.shapes()
            .find(|(_, s)| s.shape.text() == Some(text))
            .map(|(id, _)| id)
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tessellate every live shape into clip-space triangles
    ///
    /// Text and entry shapes carry no geometry and are skipped.
    pub fn vertices(&self) -> Vec<Vertex> {
        let span = self.spec.upper_right - self.spec.lower_left;
        let world_per_px = Vec2::new(
            span.x.abs() / self.spec.width as f32,
            span.y.abs() / self.spec.height as f32,
        );

        let mut vertices = Vec::new();
        for drawn in self.shapes.values() {
            let style = &drawn.style;
            let thickness = world_per_px * style.outline_width;
            match &drawn.shape {
                Shape::Line { from, to } => {
                    vertices.extend(shapes::line(*from, *to, thickness.x, style.outline));
                }
                Shape::Rect { p1, p2 } => {
                    if let Some(fill) = style.fill {
                        vertices.extend(shapes::rect(*p1, *p2, fill));
                    }
                    vertices.extend(shapes::rect_outline(*p1, *p2, thickness, style.outline));
                }
                Shape::Circle { center, radius } => {
                    if let Some(fill) = style.fill {
                        vertices.extend(shapes::circle(*center, *radius, fill, CIRCLE_SEGMENTS));
                    }
                    let inner = (*radius - thickness.x).max(0.0);
                    vertices.extend(shapes::ring(
                        *center,
                        inner,
                        *radius,
                        style.outline,
                        CIRCLE_SEGMENTS,
                    ));
                }
                Shape::Text { .. } | Shape::Entry { .. } => {}
            }
        }

        for v in &mut vertices {
            v.position = self.spec.to_clip(Vec2::from(v.position)).to_array();
        }
        vertices
    }

    /// Tessellated scene as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.closed {
            Err(RenderError::WindowClosed)
        } else {
            Ok(())
        }
    }

    fn live_mut(&mut self, id: ShapeId) -> Result<&mut DrawnShape, RenderError> {
        self.ensure_open()?;
        self.shapes.get_mut(&id).ok_or(RenderError::UnknownShape(id))
    }

    fn type_into_entry(&mut self, entry: usize, text: String) {
        let target = self
            .shapes
            .values_mut()
            .filter(|s| matches!(s.shape, Shape::Entry { .. }))
            .nth(entry);
        match target.and_then(|s| s.shape.text_mut()) {
            Some(current) => *current = text,
            None => log::warn!("{}: no entry field #{entry} to type into", self.spec.title),
        }
    }
}

impl Surface for Scene {
    fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    fn draw(&mut self, shape: Shape, style: Style) -> Result<ShapeId, RenderError> {
        self.ensure_open()?;
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, DrawnShape { shape, style });
        Ok(id)
    }

    fn undraw(&mut self, id: ShapeId) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.shapes
            .remove(&id)
            .map(|_| ())
            .ok_or(RenderError::UnknownShape(id))
    }

    fn translate(&mut self, id: ShapeId, delta: Vec2) -> Result<(), RenderError> {
        self.live_mut(id)?.shape.translate(delta);
        Ok(())
    }

    fn set_text(&mut self, id: ShapeId, text: &str) -> Result<(), RenderError> {
        let drawn = self.live_mut(id)?;
        let current = drawn.shape.text_mut().ok_or(RenderError::NotText(id))?;
        current.clear();
        current.push_str(text);
        Ok(())
    }

    fn text(&self, id: ShapeId) -> Result<String, RenderError> {
        self.ensure_open()?;
        let drawn = self.shapes.get(&id).ok_or(RenderError::UnknownShape(id))?;
        drawn
            .shape
            .text()
            .map(str::to_owned)
            .ok_or(RenderError::NotText(id))
    }

    fn set_fill(&mut self, id: ShapeId, color: [f32; 4]) -> Result<(), RenderError> {
        self.live_mut(id)?.style.fill = Some(color);
        Ok(())
    }

    fn set_outline_width(&mut self, id: ShapeId, width: f32) -> Result<(), RenderError> {
        self.live_mut(id)?.style.outline_width = width;
        Ok(())
    }

    /// Replays the script; an exhausted script means the user went away,
    /// which closes the window.
    fn wait_event(&mut self) -> InputEvent {
        while !self.closed {
            match self.script.pop_front() {
                Some(ScriptEvent::Click(world)) => {
                    // Go through pixel space like a real pointer would
                    let screen = self.spec.to_screen(world);
                    return InputEvent::Click(self.spec.to_world(screen));
                }
                Some(ScriptEvent::Type { entry, text }) => self.type_into_entry(entry, text),
                Some(ScriptEvent::Close) | None => self.closed = true,
            }
        }
        InputEvent::Closed
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Window system handing out `Scene`s with pre-recorded input
#[derive(Debug, Default)]
pub struct HeadlessWindows {
    /// Per window title, one script for each future opening
    scripts: HashMap<String, VecDeque<Vec<ScriptEvent>>>,
    opened: Vec<String>,
}

impl HeadlessWindows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the input for the next window opened with `title`
    pub fn script(&mut self, title: &str, events: impl IntoIterator<Item = ScriptEvent>) {
        self.scripts
            .entry(title.to_owned())
            .or_default()
            .push_back(events.into_iter().collect());
    }

    /// Titles of all windows opened so far, in order
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    /// Scripts not yet consumed for `title`
    pub fn pending(&self, title: &str) -> usize {
        self.scripts.get(title).map_or(0, VecDeque::len)
    }
}

impl WindowSystem for HeadlessWindows {
    type Window = Scene;

    fn open(&mut self, spec: &WindowSpec) -> Result<Scene, RenderError> {
        let mut scene = Scene::new(spec.clone());
        if let Some(script) = self.scripts.get_mut(&spec.title).and_then(VecDeque::pop_front) {
            scene.queue(script);
        }
        log::debug!("Opened headless window {:?} ({}x{})", spec.title, spec.width, spec.height);
        self.opened.push(spec.title.clone());
        Ok(scene)
    }
}
