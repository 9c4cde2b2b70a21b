//! Full-screen quad geometry

use bytemuck::{Pod, Zeroable};

/// Full-screen quad used to blit the canvas
pub struct FullscreenQuad {
    /// Vertex buffer
    pub vertex_buffer: wgpu::Buffer,
    /// Number of vertices
    pub vertex_count: u32,
}

/// Fullscreen quad vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in clip space
    pub position: [f32; 2],
    /// UV coordinates, origin at the canvas's top-left
    pub uv: [f32; 2],
}

/// Two triangles covering the full screen
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex {
        position: [-1.0, -1.0],
        uv: [0.0, 1.0],
    },
    QuadVertex {
        position: [1.0, -1.0],
        uv: [1.0, 1.0],
    },
    QuadVertex {
        position: [1.0, 1.0],
        uv: [1.0, 0.0],
    },
    QuadVertex {
        position: [-1.0, -1.0],
        uv: [0.0, 1.0],
    },
    QuadVertex {
        position: [1.0, 1.0],
        uv: [1.0, 0.0],
    },
    QuadVertex {
        position: [-1.0, 1.0],
        uv: [0.0, 0.0],
    },
];

impl FullscreenQuad {
    /// Create a fullscreen quad
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fullscreen_quad_vertices"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            vertex_count: QUAD_VERTICES.len() as u32,
        }
    }

    /// Get vertex buffer layout
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_uv_maps_top_left_to_origin() {
        // Clip-space top-left (-1, 1) samples the canvas origin
        let top_left = QUAD_VERTICES
            .iter()
            .find(|v| v.position == [-1.0, 1.0])
            .unwrap();
        assert_eq!(top_left.uv, [0.0, 0.0]);

        let bottom_right = QUAD_VERTICES
            .iter()
            .find(|v| v.position == [1.0, -1.0])
            .unwrap();
        assert_eq!(bottom_right.uv, [1.0, 1.0]);
    }

    #[test]
    fn test_vertex_stride_matches_layout() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 16);
        assert_eq!(FullscreenQuad::layout().attributes[1].offset, 8);
    }
}
