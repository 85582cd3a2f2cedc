//! Window and frame-rate configuration

use particle_simulation::TARGET_FPS;

/// Window title
pub const WINDOW_TITLE: &str = "Lightspeed";

/// Requested window size in physical pixels
pub const RESOLUTION: (u32, u32) = (2560, 1440);

/// Open as a borderless fullscreen window
pub const FULLSCREEN: bool = true;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub resolution: (u32, u32),
    pub fullscreen: bool,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            resolution: RESOLUTION,
            fullscreen: FULLSCREEN,
            target_fps: TARGET_FPS,
        }
    }
}

impl WindowConfig {
    pub fn window_attributes(&self) -> winit::window::WindowAttributes {
        let (width, height) = self.resolution;
        let attributes = winit::window::Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        if self.fullscreen {
            attributes.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)))
        } else {
            attributes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Lightspeed");
        assert_eq!(config.resolution, (2560, 1440));
        assert!(config.fullscreen);
        assert_eq!(config.target_fps, 165);
    }
}
