//! Vertex format for the 2D shape pass.

use bytemuck::{Pod, Zeroable};

/// UV sentinel marking a vertex as untextured (solid color).
pub const SOLID_UV: [f32; 2] = [-1.0, -1.0];

/// Screen-space vertex for shapes and text.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// NDC position (x, y) in -1..1
    pub position: [f32; 2],
    /// UV into the font atlas, or [`SOLID_UV`] for a solid color
    pub tex_coords: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl ShapeVertex {
    pub fn solid(position: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position,
            tex_coords: SOLID_UV,
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
