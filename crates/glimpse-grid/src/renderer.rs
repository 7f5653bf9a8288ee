use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use glimpse_engine::render::{
    ColorFormat, Mesh, ProgramDesc, RenderCtx, RenderTarget, Texture, TexturedProgram, Vertex,
    CUBE_VERTICES,
};

const CONTAINER_TEXTURE: &str = "textures/container.jpg";
const FACE_TEXTURE: &str = "textures/awesomeface.png";

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniforms {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

const INSTANCE_SIZE: u64 = std::mem::size_of::<CubeInstance>() as u64;

/// Per-cube model matrix, streamed as four vec4 columns.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CubeInstance {
    model: [[f32; 4]; 4],
}

impl CubeInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: INSTANCE_SIZE,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Draws the cube grid with one instanced call per frame.
pub struct CubeRenderer {
    program: TexturedProgram<CameraUniforms>,
    mesh: Mesh,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
    staging: Vec<CubeInstance>,
}

impl CubeRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let container = Texture::load(ctx.device, ctx.queue, CONTAINER_TEXTURE, ColorFormat::Rgb);
        let face = Texture::load(ctx.device, ctx.queue, FACE_TEXTURE, ColorFormat::Rgba);

        let program = TexturedProgram::new(
            ctx,
            ProgramDesc {
                label: "cube program",
                source: include_str!("shaders/cube.wgsl"),
                vertex_layouts: &[Vertex::layout(), CubeInstance::layout()],
                textures: [&container, &face],
                depth_test: true,
            },
        )?;

        Ok(Self {
            program,
            mesh: Mesh::new(ctx.device, "cube vbo", &CUBE_VERTICES),
            instance_vbo: None,
            instance_capacity: 0,
            staging: Vec::new(),
        })
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: &CameraUniforms,
        models: &[Mat4],
    ) {
        if models.is_empty() {
            return;
        }

        self.staging.clear();
        self.staging
            .extend(models.iter().map(|m| CubeInstance { model: m.to_cols_array_2d() }));

        self.ensure_instance_capacity(ctx, self.staging.len());
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&self.staging));
        self.program.set_uniforms(ctx.queue, camera);

        let mut pass = target.load_pass("cube pass", self.program.depth_test());
        self.program.bind(&mut pass);
        pass.set_vertex_buffer(1, instance_vbo.slice(..));
        self.mesh.draw(&mut pass, 0..models.len() as u32);
    }

    /// Largest grid side whose instance buffer fits in `limits.max_buffer_size`.
    ///
    /// Capacity grows in powers of two, so the instance count is rounded down
    /// to a power of two before taking the side length.
    pub fn max_side(limits: &wgpu::Limits) -> u32 {
        let max_instances = limits.max_buffer_size / INSTANCE_SIZE;
        if max_instances == 0 {
            return 0;
        }
        let pow2 = 1u64 << max_instances.ilog2();
        u32::try_from(pow2.isqrt()).unwrap_or(u32::MAX)
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(64);
        log::debug!("growing cube instance buffer to {new_cap}");
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube instance vbo"),
            size: new_cap as u64 * INSTANCE_SIZE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_two_mat4() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 128);
    }

    #[test]
    fn instance_columns_match_glam_layout() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let inst = CubeInstance { model: m.to_cols_array_2d() };
        assert_eq!(inst.model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn max_side_buffer_fits_default_limits() {
        let limits = wgpu::Limits::default();
        let side = CubeRenderer::max_side(&limits) as u64;
        assert_eq!(side, 2048);

        let capacity = (side * side).next_power_of_two().max(64);
        assert!(capacity * INSTANCE_SIZE <= limits.max_buffer_size);

        let next = (side + 1) * (side + 1);
        assert!(next.next_power_of_two() * INSTANCE_SIZE > limits.max_buffer_size);
    }

    #[test]
    fn max_side_of_tiny_limit_is_zero() {
        let limits = wgpu::Limits { max_buffer_size: 32, ..wgpu::Limits::default() };
        assert_eq!(CubeRenderer::max_side(&limits), 0);
    }
}
