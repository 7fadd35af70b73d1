//! Triangle-mesh generation for the widget's shapes

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a1 = i as f32 / segments as f32 * TAU;
        let a2 = (i + 1) as f32 / segments as f32 * TAU;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * a1.cos(),
            center.y + radius * a1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * a2.cos(),
            center.y + radius * a2.sin(),
            color,
        ));
    }

    vertices
}

/// Stroked ring: an annulus centered on the stroke line, matching how the
/// widget's points are styled (ring of a given diameter, thin stroke)
pub fn ring(center: Vec2, radius: f32, stroke: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let inner = radius - stroke / 2.0;
    let outer = radius + stroke / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    let rim = |r: f32, a: f32| Vec2::new(center.x + r * a.cos(), center.y + r * a.sin());

    for i in 0..segments {
        let a1 = i as f32 / segments as f32 * TAU;
        let a2 = (i + 1) as f32 / segments as f32 * TAU;

        let i1 = rim(inner, a1);
        let o1 = rim(outer, a1);
        let i2 = rim(inner, a2);
        let o2 = rim(outer, a2);

        vertices.push(Vertex::new(i1.x, i1.y, color));
        vertices.push(Vertex::new(o1.x, o1.y, color));
        vertices.push(Vertex::new(i2.x, i2.y, color));

        vertices.push(Vertex::new(i2.x, i2.y, color));
        vertices.push(Vertex::new(o1.x, o1.y, color));
        vertices.push(Vertex::new(o2.x, o2.y, color));
    }

    vertices
}

/// Polyline through the gesture's points with round caps and joins.
///
/// Each segment is a quad; a small disc at every vertex rounds the caps
/// and hides the seams between segments. Needs at least two points.
pub fn trail(points: &[Vec2], width: f32, color: [f32; 4], joint_segments: u32) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * 6 + points.len() * (joint_segments * 3) as usize);

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = (b - a).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let a1 = a + perp;
        let a2 = a - perp;
        let b1 = b + perp;
        let b2 = b - perp;

        vertices.push(Vertex::new(a1.x, a1.y, color));
        vertices.push(Vertex::new(a2.x, a2.y, color));
        vertices.push(Vertex::new(b1.x, b1.y, color));

        vertices.push(Vertex::new(b1.x, b1.y, color));
        vertices.push(Vertex::new(a2.x, a2.y, color));
        vertices.push(Vertex::new(b2.x, b2.y, color));
    }

    for &p in points {
        vertices.extend(circle(p, half, color, joint_segments));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_needs_two_points() {
        assert!(trail(&[], 1.0, [1.0; 4], 8).is_empty());
        assert!(trail(&[Vec2::ZERO], 1.0, [1.0; 4], 8).is_empty());
        assert!(!trail(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 1.0, [1.0; 4], 8).is_empty());
    }

    #[test]
    fn test_meshes_are_whole_triangles() {
        let c = Vec2::new(5.0, 5.0);
        assert_eq!(circle(c, 2.0, [1.0; 4], 16).len() % 3, 0);
        assert_eq!(ring(c, 20.0, 1.0, [1.0; 4], 48).len() % 3, 0);
        let path = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        assert_eq!(trail(&path, 1.0, [1.0; 4], 8).len() % 3, 0);
    }
}
