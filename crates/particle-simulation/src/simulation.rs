//! Simulation context owning the particles and the per-frame ramp

use particle_physics::{ParamsError, Particle};

use crate::SimulationParams;

/// Explicit simulation state, owned by the driver loop
pub struct Simulation {
    params: SimulationParams,
    particles: Vec<Particle>,
    frame_count: u64,
    elapsed: f64,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Result<Self, ParamsError> {
        params.relativity.validate()?;
        log::info!(
            "Simulation initialized (c={}, scale={}, snap={})",
            params.relativity.c,
            params.relativity.scale,
            params.relativity.snap_to_light_speed
        );

        Ok(Self {
            params,
            particles: Vec::new(),
            frame_count: 0,
            elapsed: 0.0,
        })
    }

    pub fn with_particles(
        params: SimulationParams,
        particles: impl IntoIterator<Item = Particle>,
    ) -> Result<Self, ParamsError> {
        let mut simulation = Self::new(params)?;
        simulation.particles.extend(particles);
        Ok(simulation)
    }

    /// Advance every particle by one frame.
    ///
    /// Each particle first gains `dt * acceleration` angular velocity, then
    /// updates its derived state. Negative or non-finite deltas count as zero.
    pub fn step(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid frame delta {dt}, stepping with 0");
            0.0
        };

        let relativity = &self.params.relativity;
        for particle in &mut self.particles {
            particle.angular_velocity += dt * self.params.acceleration;
            particle.update(dt, relativity);
        }

        self.frame_count += 1;
        self.elapsed += dt;

        if let Some(p) = self.particles.first() {
            log::trace!(
                "frame {}: w={:.4} tv={:.4} t={:.4} ke={:.4}",
                self.frame_count,
                p.angular_velocity,
                p.time_velocity(),
                p.proper_time(),
                p.kinetic_energy()
            );
        }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total wall-clock time stepped so far (seconds)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_physics::RelativityParams;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn simulation() -> Simulation {
        let params = SimulationParams::default();
        let particle = Particle::orbiting(WHITE, &params.relativity);
        Simulation::with_particles(params, [particle]).expect("default params are valid")
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = SimulationParams {
            relativity: RelativityParams {
                c: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Simulation::new(params).is_err());
    }

    #[test]
    fn test_step_ramps_by_half_dt() {
        let mut sim = simulation();
        sim.step(0.5);
        assert_eq!(sim.particles()[0].angular_velocity, 0.25);
        sim.step(1.0);
        assert_eq!(sim.particles()[0].angular_velocity, 0.75);
        assert_eq!(sim.frame_count(), 2);
        assert_eq!(sim.elapsed(), 1.5);
    }

    #[test]
    fn test_step_ramps_before_update() {
        let mut sim = simulation();
        sim.step(1.0);
        let p = &sim.particles()[0];
        // The update already sees the ramped angular velocity
        assert_eq!(p.angle(), 0.5);
        assert!((p.time_velocity() - (100.0_f64 - 0.25).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_crosses_light_speed_after_twenty_seconds() {
        let mut sim = simulation();
        for _ in 0..19 {
            sim.step(1.0);
        }
        assert!(sim.particles()[0].time_velocity() > 0.0);

        sim.step(1.0);
        let p = &sim.particles()[0];
        assert_eq!(p.angular_velocity, 10.0);
        assert_eq!(p.time_velocity(), 0.0);
        assert_eq!(p.kinetic_energy(), f64::INFINITY);

        sim.step(1.0);
        assert!(sim.particles()[0].time_velocity() < 0.0);
    }

    #[test]
    fn test_invalid_dt_is_treated_as_zero() {
        let mut sim = simulation();
        sim.step(-1.0);
        sim.step(f64::NAN);
        let p = &sim.particles()[0];
        assert_eq!(p.angular_velocity, 0.0);
        assert_eq!(p.angle(), 0.0);
        assert_eq!(sim.elapsed(), 0.0);
        assert_eq!(sim.frame_count(), 2);
    }

    #[test]
    fn test_steps_every_particle() {
        let params = SimulationParams::default();
        let c = params.relativity.c;
        let particles = [
            Particle::orbiting(WHITE, &params.relativity),
            Particle::new(5.0, 2.0, WHITE, 100.0, c),
        ];
        let mut sim = Simulation::with_particles(params, particles).expect("valid params");
        sim.step(1.0);
        assert_eq!(sim.particles().len(), 2);

        for p in sim.particles() {
            assert_eq!(p.angular_velocity, 0.5);
            assert!((p.position().length() - p.distance()).abs() < 1e-9);
        }
    }
}
