//! # Particle Simulation Engine
//!
//! Frame-stepped driver state for the light-speed orbit: parameters, frame
//! clocks and the simulation context.

pub mod clock;
pub mod params;
pub mod simulation;

pub use clock::*;
pub use params::*;
pub use simulation::*;
