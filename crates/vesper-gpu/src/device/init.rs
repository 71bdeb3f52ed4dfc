/// Initialization parameters for a [`Gpu`](super::Gpu).
///
/// The defaults reproduce the fixed choices of the demos: any backend, the
/// high-performance adapter, a BGRA8-family surface format, FIFO presentation.
/// Fields exist for the knobs the demos actually vary; nothing more.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backend mask handed to the instance and to adapter enumeration.
    pub backends: wgpu::Backends,

    /// Adapter selection preference.
    pub power_preference: wgpu::PowerPreference,

    /// Accept a software fallback adapter if no hardware adapter matches.
    pub force_fallback_adapter: bool,

    /// Surface formats to try, in order. The first one the surface supports
    /// is used; if none is supported, the surface's first reported format is.
    pub preferred_formats: Vec<wgpu::TextureFormat>,

    /// Present mode (swap behavior). Falls back to FIFO when unsupported.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference; a supported mode is substituted when this one
    /// is not available on the surface.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Features the device must support.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Maximum frame latency hint for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            preferred_formats: vec![
                wgpu::TextureFormat::Bgra8UnormSrgb,
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureFormat::Rgba8UnormSrgb,
            ],
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
