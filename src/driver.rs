//! Frame loop: ramp and update the simulation, draw, present, then wait for
//! the next tick.

use particle_renderer::{DisplayList, Hud, Present};
use particle_simulation::{Clock, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

pub struct FrameLoop<C: Clock> {
    simulation: Simulation,
    clock: C,
    hud: Hud,
    frame: DisplayList,
    /// Delta for the next frame; zero before the first tick
    dt: f64,
    running: bool,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(simulation: Simulation, clock: C) -> Self {
        Self {
            simulation,
            clock,
            hud: Hud::default(),
            frame: DisplayList::new(),
            dt: 0.0,
            running: true,
        }
    }

    /// Stop before the next frame. A frame already in progress completes.
    pub fn request_quit(&mut self) {
        if self.running {
            log::debug!("Quit requested after {} frames", self.simulation.frame_count());
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Run one iteration: step → draw → present → next delta
    pub fn frame<P: Present>(&mut self, presenter: &mut P) -> Result<FrameStatus, P::Error> {
        if !self.running {
            return Ok(FrameStatus::Stopped);
        }

        self.simulation.step(self.dt);

        self.frame.clear();
        self.hud.draw(
            self.simulation.particles(),
            &self.simulation.params().relativity,
            presenter.viewport(),
            &mut self.frame,
        );
        let presented = presenter.present(&self.frame);

        // Tick even when present failed; a retry steps with this delta
        self.dt = self.clock.next_delta_time();
        presented?;
        Ok(FrameStatus::Continue)
    }
}
