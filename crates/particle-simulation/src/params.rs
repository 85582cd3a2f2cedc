//! Simulation parameters

use particle_physics::RelativityParams;

/// Per-frame increase of angular velocity per second of frame time
pub const ACCELERATION: f64 = 0.5;

/// Default frame-rate target for the paced clock
pub const TARGET_FPS: u32 = 165;

/// Largest frame delta the paced clock will report (seconds)
pub const MAX_DELTA_TIME: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    pub relativity: RelativityParams,

    /// Angular velocity gained per second: each frame adds `dt * acceleration`
    pub acceleration: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            relativity: RelativityParams::default(),
            acceleration: ACCELERATION,
        }
    }
}
