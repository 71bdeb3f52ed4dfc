//! Vesper GPU crate.
//!
//! This crate owns the wgpu/winit initialization glue shared by the demo
//! binaries: instance, adapter, device, queue, and a configured surface.

pub mod device;
pub mod sync;

pub mod logging;
