//! Physical constants for the light-speed orbit simulation
//!
//! These are illustrative constants, not SI values. Angular velocity is measured
//! in radians per second and stands in for "speed" in the light-speed analogy.

/// Speed of light in angular-velocity units (rad/s)
pub const C: f64 = 10.0;

/// Half-width of the optional band around `C` in which time velocity snaps to zero.
/// Only consulted when `RelativityParams::snap_to_light_speed` is enabled.
pub const THRESHOLD: f64 = 0.01;

/// Divisor converting angular velocity into the speed unit used by the energy formula
pub const SCALE: f64 = 100.0;

/// Orbital radius of the default particle (pixels)
pub const ORBIT_DISTANCE: f64 = 200.0;

/// Mass of the default particle
pub const PARTICLE_MASS: f64 = 1.0;

/// Display radius of the default particle (pixels)
pub const PARTICLE_RADIUS: f32 = 10.0;
