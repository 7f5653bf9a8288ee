use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Position + texture coordinate vertex shared by the scene meshes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> Vertex {
    Vertex { pos: [x, y, z], uv: [u, w] }
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit cube centered on the origin, six faces of two triangles each.
pub const CUBE_VERTICES: [Vertex; 36] = [
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v(0.5, -0.5, -0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    //
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(-0.5, 0.5, 0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    //
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    //
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    //
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    //
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
];

/// Textured quad in the XY plane.
pub const QUAD_VERTICES: [Vertex; 4] = [
    v(0.5, 0.5, 0.0, 1.0, 1.0),   // top right
    v(0.5, -0.5, 0.0, 1.0, 0.0),  // bottom right
    v(-0.5, -0.5, 0.0, 0.0, 0.0), // bottom left
    v(-0.5, 0.5, 0.0, 0.0, 1.0),  // top left
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// Immutable vertex (and optional index) buffers uploaded once.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    /// Index count when indexed, vertex count otherwise.
    count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            index_buffer: None,
            count: vertices.len() as u32,
        }
    }

    pub fn indexed(device: &wgpu::Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let mut mesh = Self::new(device, label, vertices);
        mesh.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
        mesh.count = indices.len() as u32;
        mesh
    }

    /// Binds the mesh at vertex slot 0 and issues `instances` draws of it.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(ibo) => {
                pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.count, 0, instances);
            }
            None => pass.draw(0..self.count, instances),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_five_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 5 * 4);
    }

    #[test]
    fn cube_faces_stay_on_the_unit_cube() {
        for face in CUBE_VERTICES.chunks(6) {
            // Each face has one axis pinned to +-0.5 for all six vertices.
            let pinned = (0..3).any(|axis| {
                let c = face[0].pos[axis];
                c.abs() == 0.5 && face.iter().all(|v| v.pos[axis] == c)
            });
            assert!(pinned, "face is not axis aligned: {face:?}");
        }
    }

    #[test]
    fn quad_indices_form_two_triangles_over_all_corners() {
        let mut used = QUAD_INDICES.to_vec();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
