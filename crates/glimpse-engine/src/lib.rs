//! Glimpse engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo programs:
//! window and event loop, wgpu device/surface, input state, frame timing,
//! meshes, textures, shader programs and the debug overlay.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod overlay;
pub mod text;
mod scene;
