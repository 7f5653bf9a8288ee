//! GPU rendering subsystem.
//!
//! Overlay renderers consume `scene` draw streams in logical pixels (top-left
//! origin, +Y down) and convert to NDC with a viewport uniform. Scene
//! renderers build on [`Mesh`], [`Texture`] and [`TexturedProgram`].

mod ctx;
mod mesh;
mod program;
pub(crate) mod shapes;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, Vertex, CUBE_VERTICES, QUAD_INDICES, QUAD_VERTICES};
pub use program::{ProgramDesc, TexturedProgram};
pub use texture::{ColorFormat, Texture};
