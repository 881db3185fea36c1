//! Shape tessellation for 2D primitives
//!
//! Functions emit triangles in the caller's coordinate space; the scene maps
//! them to clip space afterwards.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for circles and rings
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(p1: Vec2, p2: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = p1.min(p2);
    let max = p1.max(p2);

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        min,
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        max,
        color,
    );
    vertices
}

/// Generate vertices for a rectangle border of the given thickness
pub fn rect_outline(p1: Vec2, p2: Vec2, thickness: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = p1.min(p2);
    let max = p1.max(p2);
    let half = thickness * 0.5;

    let mut vertices = Vec::with_capacity(24);
    // Bottom, top, left, right bands
    vertices.extend(rect(
        Vec2::new(min.x - half.x, min.y - half.y),
        Vec2::new(max.x + half.x, min.y + half.y),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x - half.x, max.y - half.y),
        Vec2::new(max.x + half.x, max.y + half.y),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x - half.x, min.y + half.y),
        Vec2::new(min.x + half.x, max.y - half.y),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(max.x - half.x, min.y + half.y),
        Vec2::new(max.x + half.x, max.y - half.y),
        color,
    ));
    vertices
}

/// Generate vertices for a line segment of the given thickness
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        from + perp,
        from - perp,
        to + perp,
        to - perp,
        color,
    );
    vertices
}

/// Two triangles covering the quad a-b-c-d (a/d and b/c opposite)
fn quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}
