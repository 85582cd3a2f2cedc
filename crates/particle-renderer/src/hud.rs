//! Heads-up display: the orbiting particles plus six text readouts

use glam::{DVec2, Vec2};
use particle_physics::{Particle, RelativityParams};

use crate::color::{theme, Color};
use crate::surface::{Anchor, RenderSurface, TextStyle};

/// Vertical distance between readout lines (points)
pub const LINE_SPACING: f32 = 48.0;

/// Formatted readouts for one particle, top to bottom
pub fn readouts(particle: &Particle, params: &RelativityParams) -> [String; 6] {
    [
        format!("Time Vel: {:.2}", particle.time_velocity()),
        format!("Time Elapsed: {:.2}", particle.proper_time()),
        format!("Velocity: {:.2} p/s", particle.angular_velocity),
        format!(
            "Speed of Light: {}%",
            params.percent_of_c(particle.angular_velocity)
        ),
        format!("Kinetic Energy: {:.2} J", particle.kinetic_energy()),
        format!("Energy: {:.2} N", params.rest_energy(particle.mass())),
    ]
}

/// Screen point for an orbit position, with the origin at the viewport center.
///
/// The center is rounded down to whole points and the result truncated toward zero.
pub fn screen_position(position: DVec2, viewport: Vec2) -> Vec2 {
    let center = (viewport / 2.0).floor().as_dvec2();
    (position + center).trunc().as_vec2()
}

pub struct Hud {
    pub style: TextStyle,
    pub text_color: Color,
    pub background: Color,
    pub line_spacing: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            style: TextStyle::default(),
            text_color: theme::text(),
            background: theme::background(),
            line_spacing: LINE_SPACING,
        }
    }
}

impl Hud {
    /// Draw one frame. Readouts describe the first particle; nothing but the
    /// background is drawn when there are no particles.
    pub fn draw(
        &self,
        particles: &[Particle],
        params: &RelativityParams,
        viewport: Vec2,
        surface: &mut impl RenderSurface,
    ) {
        surface.fill(self.background);

        for particle in particles {
            surface.draw_circle(
                Color::from(particle.color()),
                screen_position(particle.position(), viewport),
                particle.radius(),
            );
        }

        let Some(subject) = particles.first() else {
            return;
        };

        let x = (viewport.x / 2.0).floor();
        for (i, line) in readouts(subject, params).iter().enumerate() {
            let y = self.line_spacing * (i + 1) as f32;
            surface.draw_text(
                line,
                self.style,
                self.text_color,
                Vec2::new(x, y),
                Anchor::Center,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawCommand};

    fn particle(params: &RelativityParams) -> Particle {
        Particle::orbiting(Color::WHITE.into(), params)
    }

    #[test]
    fn test_readouts_at_rest() {
        let params = RelativityParams::default();
        let mut p = particle(&params);
        p.update(1.0, &params);

        assert_eq!(
            readouts(&p, &params),
            [
                "Time Vel: 10.00",
                "Time Elapsed: 10.00",
                "Velocity: 0.00 p/s",
                "Speed of Light: 0%",
                "Kinetic Energy: 0.00 J",
                "Energy: 100.00 N",
            ]
        );
    }

    #[test]
    fn test_readouts_past_light_speed() {
        let params = RelativityParams::default();
        let mut p = particle(&params);
        p.angular_velocity = 20.0;
        p.update(1.0, &params);

        let lines = readouts(&p, &params);
        assert_eq!(lines[0], "Time Vel: -17.32");
        assert_eq!(lines[1], "Time Elapsed: -17.32");
        assert_eq!(lines[2], "Velocity: 20.00 p/s");
        assert_eq!(lines[3], "Speed of Light: 200%");
        assert_eq!(lines[4], "Kinetic Energy: inf J");
    }

    #[test]
    fn test_screen_position() {
        let viewport = Vec2::new(2560.0, 1440.0);
        assert_eq!(
            screen_position(DVec2::new(200.0, 0.0), viewport),
            Vec2::new(1480.0, 720.0)
        );
        assert_eq!(
            screen_position(DVec2::new(-0.7, 10.9), viewport),
            Vec2::new(1279.0, 730.0)
        );
        // Odd viewport: the center rounds down
        assert_eq!(
            screen_position(DVec2::ZERO, Vec2::new(101.0, 51.0)),
            Vec2::new(50.0, 25.0)
        );
    }

    #[test]
    fn test_draw_layout() {
        let params = RelativityParams::default();
        let p = particle(&params);
        let hud = Hud::default();
        let mut list = DisplayList::new();

        hud.draw(&[p], &params, Vec2::new(800.0, 600.0), &mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 1 + 1 + 6);
        assert_eq!(commands[0], DrawCommand::Fill(hud.background));
        assert_eq!(
            commands[1],
            DrawCommand::Circle {
                color: Color::WHITE,
                center: Vec2::new(600.0, 300.0),
                radius: 10.0,
            }
        );

        for (i, command) in commands[2..].iter().enumerate() {
            match command {
                DrawCommand::Text { at, anchor, .. } => {
                    assert_eq!(*at, Vec2::new(400.0, 48.0 * (i + 1) as f32));
                    assert_eq!(*anchor, Anchor::Center);
                }
                other => panic!("expected text, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_draw_without_particles() {
        let hud = Hud::default();
        let mut list = DisplayList::new();
        hud.draw(&[], &RelativityParams::default(), Vec2::new(100.0, 100.0), &mut list);
        assert_eq!(list.len(), 1);
    }
}
