//! # Particle Renderer
//!
//! Visualization layer for the light-speed orbit: colors, a recorded drawing
//! surface replayed through egui, and the HUD that reports simulation state.

pub mod color;
pub mod hud;
pub mod surface;

pub use color::*;
pub use hud::*;
pub use surface::*;
