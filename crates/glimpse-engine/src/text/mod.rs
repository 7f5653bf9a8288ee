//! Font loading for overlay text.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, SYSTEM_FONT_PATHS};
