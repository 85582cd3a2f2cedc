//! Orbiting particle and its per-frame update

use glam::DVec2;

use crate::constants::{ORBIT_DISTANCE, PARTICLE_MASS, PARTICLE_RADIUS};
use crate::relativity::{orbit_position, RelativityParams};

/// One step of `Particle::update`, listed in execution order.
///
/// Each stage reads values written by the stages before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStage {
    /// angle += ω·dt
    Angle,
    /// time velocity from ω and c
    TimeVelocity,
    /// proper time += time velocity·dt
    ProperTime,
    /// position from angle, sign(time velocity) and distance
    Position,
    /// kinetic energy from ω, mass and the scaled c
    KineticEnergy,
}

impl UpdateStage {
    pub const ORDER: [UpdateStage; 5] = [
        UpdateStage::Angle,
        UpdateStage::TimeVelocity,
        UpdateStage::ProperTime,
        UpdateStage::Position,
        UpdateStage::KineticEnergy,
    ];
}

/// A particle on a circular orbit around the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Driven by the caller; `update` only reads it
    pub angular_velocity: f64,

    radius: f32,
    mass: f64,
    /// RGBA display color
    color: [u8; 4],
    distance: f64,

    angle: f64,
    time_velocity: f64,
    proper_time: f64,
    position: DVec2,
    kinetic_energy: f64,
}

impl Particle {
    /// Create a resting particle at angle zero on an orbit of `distance`
    pub fn new(radius: f32, mass: f64, color: [u8; 4], distance: f64, c: f64) -> Self {
        Self {
            angular_velocity: 0.0,
            radius,
            mass,
            color,
            distance,
            angle: 0.0,
            time_velocity: c,
            proper_time: 0.0,
            position: DVec2::new(distance, 0.0),
            kinetic_energy: 0.0,
        }
    }

    /// The default particle: radius 10, mass 1, orbit distance 200
    pub fn orbiting(color: [u8; 4], params: &RelativityParams) -> Self {
        Self::new(PARTICLE_RADIUS, PARTICLE_MASS, color, ORBIT_DISTANCE, params.c)
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// Runs every stage of `UpdateStage::ORDER`. Never fails: reaching `c`
    /// yields zero time velocity and infinite kinetic energy.
    pub fn update(&mut self, dt: f64, params: &RelativityParams) {
        for stage in UpdateStage::ORDER {
            self.run_stage(stage, dt, params);
        }
    }

    fn run_stage(&mut self, stage: UpdateStage, dt: f64, params: &RelativityParams) {
        match stage {
            UpdateStage::Angle => self.advance_angle(dt),
            UpdateStage::TimeVelocity => self.update_time_velocity(params),
            UpdateStage::ProperTime => self.integrate_proper_time(dt),
            UpdateStage::Position => self.update_position(),
            UpdateStage::KineticEnergy => self.update_kinetic_energy(params),
        }
    }

    fn advance_angle(&mut self, dt: f64) {
        self.angle += self.angular_velocity * dt;
    }

    fn update_time_velocity(&mut self, params: &RelativityParams) {
        self.time_velocity = params.time_velocity(self.angular_velocity);
    }

    /// Uses the time velocity computed this frame
    fn integrate_proper_time(&mut self, dt: f64) {
        self.proper_time += self.time_velocity * dt;
    }

    fn update_position(&mut self) {
        self.position = orbit_position(self.angle, self.time_velocity, self.distance);
    }

    fn update_kinetic_energy(&mut self, params: &RelativityParams) {
        self.kinetic_energy = params.kinetic_energy(self.angular_velocity, self.mass);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> [u8; 4] {
        self.color
    }

    /// Orbital radius
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Accumulated orbit angle (radians)
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn time_velocity(&self) -> f64 {
        self.time_velocity
    }

    /// Elapsed proper time; runs backwards while time velocity is negative
    pub fn proper_time(&self) -> f64 {
        self.proper_time
    }

    /// Position relative to the orbit center
    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }
}
