//! Paint model shared between the scene pass and the overlay renderers.
//!
//! Only solid colors exist; the overlay needs nothing richer.

pub mod color;

pub use color::Color;
