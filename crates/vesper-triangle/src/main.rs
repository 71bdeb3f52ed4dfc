//! Triangle demo context setup.
//!
//! Opens a window, stands up the full wgpu context for it with default
//! settings, reports what it got, and exits. Everything past the configured
//! surface (pipelines, the frame loop) is out of scope here.

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vesper_gpu::device::{Gpu, GpuInit};
use vesper_gpu::logging::{LogConfig, init_logging};

struct Demo {
    outcome: Option<Result<()>>,
}

impl Demo {
    fn init_context(&self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("vesper triangle")
            .with_inner_size(LogicalSize::new(800.0, 600.0));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu = Gpu::new_blocking(&window, GpuInit::default())?;

        log::info!(
            "triangle context ready: {:?} at {}x{} (scale factor {})",
            gpu.surface_format(),
            gpu.size().width,
            gpu.size().height,
            window.scale_factor()
        );

        Ok(())
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.outcome.is_some() {
            return;
        }

        let outcome = self.init_context(event_loop);
        if let Err(e) = &outcome {
            log::error!("initialization failed: {e:#}");
        }
        self.outcome = Some(outcome);
        event_loop.exit();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
        }
    }
}

fn main() -> Result<()> {
    init_logging(LogConfig::default());

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut demo = Demo { outcome: None };
    event_loop
        .run_app(&mut demo)
        .context("winit event loop terminated with error")?;

    demo.outcome.unwrap_or(Ok(()))
}
