use winit::dpi::PhysicalSize;

/// Picks the first preferred format the surface supports, falling back to the
/// surface's own first format. `None` only when the surface reports nothing.
pub(crate) fn choose_format(
    supported: &[wgpu::TextureFormat],
    preferred: &[wgpu::TextureFormat],
) -> Option<wgpu::TextureFormat> {
    preferred
        .iter()
        .find(|f| supported.contains(f))
        .or_else(|| supported.first())
        .copied()
}

/// Honors the requested alpha mode when the surface supports it, otherwise
/// takes the surface's first supported mode.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Honors the requested present mode when supported; FIFO otherwise.
///
/// FIFO support is mandated by the WebGPU spec, so the fallback is always
/// valid.
pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if supported.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Clamps a drawable size to the 1x1 minimum the surface accepts.
pub(crate) fn clamp_extent(size: PhysicalSize<u32>) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.max(1), size.height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, PresentMode, TextureFormat};

    // ── choose_format ─────────────────────────────────────────────────────

    #[test]
    fn format_takes_first_supported_preference() {
        let supported = [TextureFormat::Rgba8Unorm, TextureFormat::Bgra8Unorm];
        let preferred = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(
            choose_format(&supported, &preferred),
            Some(TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn format_falls_back_to_first_supported() {
        let supported = [TextureFormat::Rgba16Float];
        let preferred = [TextureFormat::Bgra8UnormSrgb];
        assert_eq!(
            choose_format(&supported, &preferred),
            Some(TextureFormat::Rgba16Float)
        );
    }

    #[test]
    fn format_none_when_surface_reports_nothing() {
        assert_eq!(choose_format(&[], &[TextureFormat::Bgra8Unorm]), None);
    }

    // ── choose_alpha_mode ─────────────────────────────────────────────────

    #[test]
    fn alpha_honors_supported_request() {
        let supported = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn alpha_substitutes_unsupported_request() {
        let supported = [CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn alpha_defaults_to_auto_without_capabilities() {
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    // ── choose_present_mode ───────────────────────────────────────────────

    #[test]
    fn present_mode_honors_supported_request() {
        let supported = [PresentMode::Fifo, PresentMode::Mailbox];
        assert_eq!(
            choose_present_mode(&supported, PresentMode::Mailbox),
            PresentMode::Mailbox
        );
    }

    #[test]
    fn present_mode_falls_back_to_fifo() {
        let supported = [PresentMode::Fifo];
        assert_eq!(
            choose_present_mode(&supported, PresentMode::Immediate),
            PresentMode::Fifo
        );
    }

    // ── clamp_extent ──────────────────────────────────────────────────────

    #[test]
    fn extent_clamps_zero_axes_to_one() {
        assert_eq!(clamp_extent(PhysicalSize::new(0, 0)), PhysicalSize::new(1, 1));
        assert_eq!(
            clamp_extent(PhysicalSize::new(800, 0)),
            PhysicalSize::new(800, 1)
        );
    }

    #[test]
    fn extent_passes_valid_sizes_through() {
        assert_eq!(
            clamp_extent(PhysicalSize::new(1920, 1080)),
            PhysicalSize::new(1920, 1080)
        );
    }
}
