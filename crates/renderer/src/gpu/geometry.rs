//! Static cube geometry for the rasterized scene variant.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// One cube vertex: position plus a flat color, packed contiguously.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn vertex(position: [f32; 3], color: [f32; 4]) -> Vertex {
    Vertex { position, color }
}

/// The eight corners of a unit cube centered at the origin, each with a
/// distinct color so face interpolation is visible.
pub(crate) const CUBE_VERTICES: [Vertex; 8] = [
    vertex([-0.5, -0.5, 0.5], [1.0, 0.0, 0.0, 1.0]),
    vertex([0.5, -0.5, 0.5], [0.0, 1.0, 0.0, 1.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 0.0, 1.0, 1.0]),
    vertex([-0.5, 0.5, 0.5], [1.0, 1.0, 0.0, 1.0]),
    vertex([-0.5, -0.5, -0.5], [1.0, 0.0, 1.0, 1.0]),
    vertex([0.5, -0.5, -0.5], [0.0, 1.0, 1.0, 1.0]),
    vertex([0.5, 0.5, -0.5], [1.0, 1.0, 1.0, 1.0]),
    vertex([-0.5, 0.5, -0.5], [0.1, 0.1, 0.1, 1.0]),
];

/// Twelve triangles, two per face, wound counter-clockwise as seen from
/// outside the cube so back-face culling keeps the front faces.
pub(crate) const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front  (z+)
    5, 4, 7, 5, 7, 6, // back   (z-)
    1, 5, 6, 1, 6, 2, // right  (x+)
    4, 0, 3, 4, 3, 7, // left   (x-)
    3, 2, 6, 3, 6, 7, // top    (y+)
    4, 5, 1, 4, 1, 0, // bottom (y-)
];

/// Immutable vertex/index buffers uploaded once at bootstrap.
pub(crate) struct CubeGeometry {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl CubeGeometry {
    pub fn upload(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube vertices"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube indices"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: CUBE_INDICES.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::mem::{offset_of, size_of};

    #[test]
    fn vertex_layout_is_position_then_color() {
        assert_eq!(size_of::<Vertex>(), 28);
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(offset_of!(Vertex, color), 12);
    }

    #[test]
    fn cube_has_twelve_triangles_over_eight_vertices() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES
            .iter()
            .all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn every_vertex_is_referenced() {
        for index in 0..CUBE_VERTICES.len() as u16 {
            assert!(CUBE_INDICES.contains(&index), "vertex {index} unused");
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_seen_from_outside() {
        // For a convex solid centered at the origin, a CCW-wound triangle's
        // geometric normal must point away from the center.
        for triangle in CUBE_INDICES.chunks_exact(3) {
            let a = Vec3::from(CUBE_VERTICES[triangle[0] as usize].position);
            let b = Vec3::from(CUBE_VERTICES[triangle[1] as usize].position);
            let c = Vec3::from(CUBE_VERTICES[triangle[2] as usize].position);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {triangle:?} winds the wrong way"
            );
        }
    }

    #[test]
    fn corners_span_the_unit_cube() {
        for v in &CUBE_VERTICES {
            for coord in v.position {
                assert!((coord.abs() - 0.5).abs() < f32::EPSILON);
            }
        }
    }
}
