use wgpu::{Adapter, Backends, Instance};

/// Logs every adapter the instance exposes for the given backends.
///
/// Enumeration is purely informational; selection happens separately through
/// `request_adapter` so the driver can weigh surface compatibility.
pub(crate) async fn log_available_adapters(instance: &Instance, backends: Backends) {
    let adapters = instance.enumerate_adapters(backends).await;

    log::info!("available adapters: {}", adapters.len());
    for adapter in &adapters {
        let info = adapter.get_info();
        log::info!("  {}", describe(&info.name, info.device_type, info.backend));
    }
}

/// Logs the adapter the driver selected for us.
pub(crate) fn log_selected_adapter(adapter: &Adapter) {
    let info = adapter.get_info();

    log::info!(
        "selected adapter: {}",
        describe(&info.name, info.device_type, info.backend)
    );
    log::debug!(
        "  vendor {:#06x}, device {:#06x}, driver {} {}",
        info.vendor,
        info.device,
        info.driver,
        info.driver_info
    );
}

fn describe(name: &str, device_type: wgpu::DeviceType, backend: wgpu::Backend) -> String {
    let name = if name.is_empty() { "<unnamed>" } else { name };
    format!("{name} ({device_type:?}, {backend:?})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_type_and_backend() {
        let s = describe("Foo GPU", wgpu::DeviceType::DiscreteGpu, wgpu::Backend::Vulkan);
        assert!(s.starts_with("Foo GPU"));
        assert!(s.contains("DiscreteGpu"));
    }

    #[test]
    fn describe_handles_empty_name() {
        let s = describe("", wgpu::DeviceType::Cpu, wgpu::Backend::Gl);
        assert!(s.starts_with("<unnamed>"));
    }
}
