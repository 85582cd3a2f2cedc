//! # Light-Speed Orbit Physics
//!
//! Core model for a particle whose orbital angular velocity is driven past a
//! light-speed analog `c`: time velocity, proper time, orbit position and a
//! kinetic energy that diverges at `c`.

pub mod constants;
pub mod particle;
pub mod relativity;

pub use constants::*;
pub use particle::*;
pub use relativity::*;
