//! Debug overlay: a fixed panel of text lines drawn over the scene.

mod debug;
mod layout;

pub use debug::DebugOverlay;
pub use layout::PanelLayout;
