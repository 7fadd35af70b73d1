//! Vertex type and widget palette

use bytemuck::{Pod, Zeroable};

/// Flat 2D vertex: position in logical units, straight-alpha color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Widget palette
pub mod colors {
    /// Selected points and the gesture trail
    pub const ACTIVE: [f32; 4] = [1.0, 0.45, 0.15, 1.0];
    /// Unselected points
    pub const INACTIVE: [f32; 4] = [0.68, 0.68, 0.68, 1.0];
    /// Unselected points in high-contrast mode
    pub const INACTIVE_HIGH_CONTRAST: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Unlock succeeded (status line)
    pub const SUCCESS: [f32; 4] = [0.2, 0.85, 0.35, 1.0];
    /// Wrong pattern (status line)
    pub const FAILURE: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
