//! Coordinate and geometry types for overlay layout.
//!
//! Canonical CPU space for 2D overlay content:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform. 3D scene math
//! uses `glam` directly.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
