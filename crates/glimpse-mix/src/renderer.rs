use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use glimpse_engine::render::{
    ColorFormat, Mesh, ProgramDesc, RenderCtx, RenderTarget, Texture, TexturedProgram, Vertex,
    QUAD_INDICES, QUAD_VERTICES,
};

const CONTAINER_TEXTURE: &str = "textures/container.jpg";
const FACE_TEXTURE: &str = "textures/awesomeface.png";

/// Amplitude of the circular drift, in clip-space units.
const DRIFT: f32 = 0.3;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadUniforms {
    pub transform: [[f32; 4]; 4],
    pub offset: [f32; 2],
    pub mix_factor: f32,
    pub _pad: f32,
}

impl QuadUniforms {
    /// Spin about Z by `t` radians plus a drift around a circle of radius 0.3.
    pub fn at(t: f32, mix_factor: f32) -> Self {
        let offset = Vec2::new(DRIFT * t.sin(), DRIFT * t.cos());
        Self {
            transform: Mat4::from_rotation_z(t).to_cols_array_2d(),
            offset: offset.to_array(),
            mix_factor,
            _pad: 0.0,
        }
    }
}

/// Draws the blended quad.
pub struct QuadRenderer {
    program: TexturedProgram<QuadUniforms>,
    mesh: Mesh,
}

impl QuadRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let container = Texture::load(ctx.device, ctx.queue, CONTAINER_TEXTURE, ColorFormat::Rgb);
        let face = Texture::load(ctx.device, ctx.queue, FACE_TEXTURE, ColorFormat::Rgba);

        let program = TexturedProgram::new(
            ctx,
            ProgramDesc {
                label: "quad program",
                source: include_str!("shaders/quad.wgsl"),
                vertex_layouts: &[Vertex::layout()],
                textures: [&container, &face],
                depth_test: false,
            },
        )?;

        Ok(Self {
            program,
            mesh: Mesh::indexed(ctx.device, "quad", &QUAD_VERTICES, &QUAD_INDICES),
        })
    }

    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, uniforms: &QuadUniforms) {
        self.program.set_uniforms(ctx.queue, uniforms);

        let mut pass = target.load_pass("quad pass", self.program.depth_test());
        self.program.bind(&mut pass);
        self.mesh.draw(&mut pass, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<QuadUniforms>(), 80);
    }

    #[test]
    fn at_time_zero_there_is_no_spin_and_full_upward_drift() {
        let u = QuadUniforms::at(0.0, 0.2);
        assert_eq!(u.transform, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(u.offset, [0.0, 0.3]);
        assert_eq!(u.mix_factor, 0.2);
    }

    #[test]
    fn quarter_turn_rotates_x_onto_y() {
        let u = QuadUniforms::at(std::f32::consts::FRAC_PI_2, 0.0);
        let m = Mat4::from_cols_array_2d(&u.transform);
        let x = m.transform_vector3(glam::Vec3::X);
        assert!((x - glam::Vec3::Y).length() < 1e-6);
        assert!((u.offset[0] - 0.3).abs() < 1e-6);
        assert!(u.offset[1].abs() < 1e-6);
    }
}
