//! Canvas demo context setup.
//!
//! Same initialization sequence as the triangle demo with a different
//! configuration: a plain (non-sRGB) BGRA8 surface for software-composited
//! content, and the low-power adapter when one exists. Also drains the queue
//! once to exercise the submitted-work rendezvous before exiting.

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vesper_gpu::device::{Gpu, GpuInit};
use vesper_gpu::logging::{LogConfig, init_logging};

fn canvas_init() -> GpuInit {
    GpuInit {
        power_preference: wgpu::PowerPreference::LowPower,
        preferred_formats: vec![wgpu::TextureFormat::Bgra8Unorm],
        ..GpuInit::default()
    }
}

struct Demo {
    outcome: Option<Result<()>>,
}

impl Demo {
    fn init_context(&self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("vesper canvas")
            .with_inner_size(LogicalSize::new(640.0, 480.0));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu = Gpu::new_blocking(&window, canvas_init())?;

        log::info!(
            "canvas context ready: {:?} at {}x{}",
            gpu.surface_format(),
            gpu.size().width,
            gpu.size().height
        );

        gpu.flush_and_wait()
            .context("device did not settle after initialization")?;
        log::info!("device idle, shutting down");

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
