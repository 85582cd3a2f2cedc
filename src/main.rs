//! Light-Speed Orbit
//!
//! A particle circles the origin while its angular velocity ramps past a
//! light-speed analog. The HUD reports time velocity, proper time, percent of
//! c and a kinetic energy that diverges at c.

mod config;
mod driver;
mod error;
mod gui;

use config::WindowConfig;
use driver::{FrameLoop, FrameStatus};
use error::AppError;
use glam::Vec2;
use gui::Gui;
use particle_physics::Particle;
use particle_renderer::{Color, DisplayList, Present};
use particle_simulation::{FrameClock, Simulation, SimulationParams};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    gui: Gui,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, AppError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(AppError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        // Frame pacing is done by the clock, not by vsync
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "✓ Surface configured: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        let gui = Gui::new(&device, config.format, &window);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            gui,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            log::debug!("Resizing surface to {}x{}", new_size.width, new_size.height);
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

impl Present for GpuState {
    type Error = wgpu::SurfaceError;

    fn viewport(&self) -> Vec2 {
        Gui::viewport(&self.window)
    }

    fn present(&mut self, frame: &DisplayList) -> Result<(), Self::Error> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("HUD Encoder"),
            });

        let upload_buffers = self.gui.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &self.window,
            &view,
            frame,
        );

        self.queue.submit(
            upload_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();
        Ok(())
    }
}

struct App {
    config: WindowConfig,
    driver: FrameLoop<FrameClock>,
    gpu_state: Option<GpuState>,
    error: Option<AppError>,
}

impl App {
    fn new(config: WindowConfig, driver: FrameLoop<FrameClock>) -> Self {
        Self {
            config,
            driver,
            gpu_state: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        self.error = Some(error);
        self.driver.request_quit();
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window = Arc::new(event_loop.create_window(self.config.window_attributes())?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;
        self.gpu_state = Some(gpu_state);
        window.request_redraw();
        Ok(())
    }

    fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu_state.is_none() && self.driver.is_running() {
            if let Err(error) = self.init(event_loop) {
                self.fail(event_loop, error);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        if gpu_state.gui.handle_event(&gpu_state.window, &event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.driver.request_quit();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => gpu_state.resize(physical_size),

            WindowEvent::RedrawRequested => match self.driver.frame(gpu_state) {
                Ok(FrameStatus::Continue) => gpu_state.window.request_redraw(),
                Ok(FrameStatus::Stopped) => event_loop.exit(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("Surface lost or outdated, reconfiguring");
                    let size = gpu_state.window.inner_size();
                    gpu_state.resize(size);
                    gpu_state.window.request_redraw();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    self.driver.request_quit();
                    event_loop.exit();
                }
                Err(e) => {
                    log::warn!("Render error: {:?}", e);
                    gpu_state.window.request_redraw();
                }
            },

            _ => {}
        }
    }
}

fn main() -> Result<(), AppError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting light-speed orbit simulation...");

    let config = WindowConfig::default();
    let params = SimulationParams::default();
    let particle = Particle::orbiting(Color::WHITE.into(), &params.relativity);
    let simulation = Simulation::with_particles(params, [particle])?;
    let clock = FrameClock::new(config.target_fps);
    log::info!("Pacing frames every {:?}", clock.frame_interval());
    let driver = FrameLoop::new(simulation, clock);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, driver);
    event_loop.run_app(&mut app)?;

    let simulation = app.driver.simulation();
    log::info!(
        "Exiting after {} frames ({:.2}s simulated)",
        simulation.frame_count(),
        simulation.elapsed()
    );
    app.into_result()
}
