//! Relativistic-style quantities derived from angular velocity
//!
//! The model is an illustrative analogy: angular velocity plays the role of
//! speed, `c` is the limit, and "time velocity" is the rate at which proper
//! time flows. Above `c` the time velocity turns negative and the orbit runs
//! backwards.

use glam::DVec2;
use thiserror::Error;

use crate::constants::{C, SCALE, THRESHOLD};

/// Invalid relativity parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("speed of light must be finite and positive, got {0}")]
    SpeedOfLight(f64),

    #[error("scale must be finite and positive, got {0}")]
    Scale(f64),

    #[error("threshold must be finite and non-negative, got {0}")]
    Threshold(f64),
}

/// Constants the particle update depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativityParams {
    /// Light-speed analog in angular-velocity units
    pub c: f64,
    /// Half-width of the snap band around `c`
    pub threshold: f64,
    /// Angular velocity to energy-speed unit divisor
    pub scale: f64,
    /// Snap time velocity to zero when `|angular_velocity - c| <= threshold`
    pub snap_to_light_speed: bool,
}

impl Default for RelativityParams {
    fn default() -> Self {
        Self {
            c: C,
            threshold: THRESHOLD,
            scale: SCALE,
            snap_to_light_speed: false,
        }
    }
}

impl RelativityParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.c.is_finite() || self.c <= 0.0 {
            return Err(ParamsError::SpeedOfLight(self.c));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ParamsError::Scale(self.scale));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ParamsError::Threshold(self.threshold));
        }
        Ok(())
    }

    /// Speed of light in the energy formula's unit
    pub fn c_scaled(&self) -> f64 {
        self.c / self.scale
    }

    /// Time velocity for the given angular velocity, honoring the snap option
    pub fn time_velocity(&self, angular_velocity: f64) -> f64 {
        if self.snap_to_light_speed && (angular_velocity - self.c).abs() <= self.threshold {
            return 0.0;
        }
        time_velocity(angular_velocity, self.c)
    }

    pub fn kinetic_energy(&self, angular_velocity: f64, mass: f64) -> f64 {
        kinetic_energy(angular_velocity / self.scale, mass, self.c_scaled())
    }

    /// E = m·c², in the unscaled unit shown on the readout
    pub fn rest_energy(&self, mass: f64) -> f64 {
        mass * self.c * self.c
    }

    /// Angular velocity as a whole percentage of `c`.
    ///
    /// Halves round to the even integer.
    pub fn percent_of_c(&self, angular_velocity: f64) -> i64 {
        (angular_velocity / self.c * 100.0).round_ties_even() as i64
    }
}

/// Tri-state sign: -1, 0 or +1.
///
/// Unlike `f64::signum`, zero (of either sign) maps to 0. NaN also maps to 0.
pub fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Rate of proper-time flow.
///
/// `sqrt(c² - ω²)` below `c`, `-sqrt(ω² - c²)` above it, exactly 0 at `c`.
pub fn time_velocity(angular_velocity: f64, c: f64) -> f64 {
    if angular_velocity < c {
        (c * c - angular_velocity * angular_velocity).sqrt()
    } else if angular_velocity > c {
        -(angular_velocity * angular_velocity - c * c).sqrt()
    } else {
        0.0
    }
}

/// γ = 1 / sqrt(1 - v²/c²)
///
/// Only meaningful for `v < c`; callers guard the singular case.
pub fn lorentz_factor(velocity: f64, c: f64) -> f64 {
    let beta = velocity / c;
    1.0 / (1.0 - beta * beta).sqrt()
}

/// Relativistic kinetic energy (γ - 1)·m·c².
///
/// Returns `f64::INFINITY` once `velocity >= c`.
pub fn kinetic_energy(velocity: f64, mass: f64, c: f64) -> f64 {
    if velocity >= c {
        return f64::INFINITY;
    }
    (lorentz_factor(velocity, c) - 1.0) * mass * c * c
}

/// Point on the orbit circle. The direction flips with the sign of the time
/// velocity; while time stands still the particle sits at angle zero.
pub fn orbit_position(angle: f64, time_velocity: f64, distance: f64) -> DVec2 {
    let theta = angle * sign(time_velocity);
    DVec2::new(theta.cos(), theta.sin()) * distance
}
