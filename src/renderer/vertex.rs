//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with clip-space position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Named colors understood by the game
pub mod colors {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const PURPLE: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
    pub const LIGHT_GRAY: [f32; 4] = [0.83, 0.83, 0.83, 1.0];
    pub const DARK_GREY: [f32; 4] = [0.66, 0.66, 0.66, 1.0];

    /// Look up a color by its name (case-insensitive, gray/grey both accepted)
    pub fn named(name: &str) -> Option<[f32; 4]> {
        let color = match name.to_lowercase().replace("grey", "gray").as_str() {
            "black" => BLACK,
            "white" => WHITE,
            "red" => RED,
            "green" => GREEN,
            "blue" => BLUE,
            "yellow" => YELLOW,
            "orange" => ORANGE,
            "purple" => PURPLE,
            "lightgray" => LIGHT_GRAY,
            "darkgray" => DARK_GREY,
            _ => return None,
        };
        Some(color)
    }
}
