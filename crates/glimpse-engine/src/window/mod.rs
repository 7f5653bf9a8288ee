//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the program window, and wires them to the GPU layer.

mod error;
mod runtime;

pub use error::StartupError;
pub use runtime::{Runtime, RuntimeConfig};
