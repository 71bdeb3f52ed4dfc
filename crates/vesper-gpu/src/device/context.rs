use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{GpuInit, adapter, surface};
use crate::sync::rendezvous;

/// Owns the wgpu core objects and the surface configuration for one window.
///
/// Construction runs the whole initialization sequence: instance, adapter
/// enumeration, surface, adapter request, device/queue request, surface
/// configuration. The handles stay valid until the `Gpu` is dropped; the
/// surface must not outlive the window, which the `'w` lifetime enforces.
pub struct Gpu<'w> {
    instance: wgpu::Instance,
    surface: wgpu::Surface<'w>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter and device acquisition are asynchronous under wgpu; callers
    /// without an executor can use [`Gpu::new_blocking`].
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let GpuInit {
            backends,
            power_preference,
            force_fallback_adapter,
            preferred_formats,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        adapter::log_available_adapters(&instance, backends).await;

        // Surface lifetime is tied to `window` via `'w`.
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        adapter::log_selected_adapter(&adapter);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("vesper-gpu device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_format(&caps.formats, &preferred_formats)
            .context("surface reports no supported formats")?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, alpha_mode);
        let present_mode = surface::choose_present_mode(&caps.present_modes, present_mode);
        let extent = surface::clamp_extent(size);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: extent.width,
            height: extent.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        log::info!(
            "surface configured: {}x{} {:?}, {:?}, {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode,
            config.alpha_mode
        );

        Ok(Self {
            instance,
            surface,
            adapter,
            device,
            queue,
            config,
            size,
        })
    }

    /// Synchronous facade over [`Gpu::new`].
    ///
    /// Blocks the calling thread until both asynchronous requests resolve.
    pub fn new_blocking(window: &'w Window, init: GpuInit) -> Result<Self> {
        pollster::block_on(Self::new(window, init))
    }

    /// Returns a reference to the selected adapter.
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the active surface configuration.
    pub fn config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigures the surface after a resize.
    ///
    /// wgpu cannot configure a 0x0 surface; in that case only internal state
    /// is updated and configuration happens on the next non-empty resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Blocks until all work submitted so far has completed on the device.
    ///
    /// The completion callback may run on a driver-internal thread; the
    /// rendezvous hands its signal back to this thread. The callback fires
    /// on every completion status, so the wait always terminates once the
    /// device poll returns.
    pub fn flush_and_wait(&self) -> Result<()> {
        self.queue.submit(std::iter::empty());

        let (tx, rx) = rendezvous();
        self.queue.on_submitted_work_done(move || {
            tx.signal(());
        });

        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .context("device poll failed while waiting for submitted work")?;
        rx.wait();

        Ok(())
    }
}
