//! GPU context initialization.
//!
//! This module stands up the wgpu core objects for a window:
//! - creates the Instance and logs the adapters it exposes
//! - creates the Surface bound to the window
//! - requests an Adapter and a Device/Queue (async under wgpu)
//! - configures the Surface for presentation
//!
//! Frame recording and presentation belong to the callers; this module ends
//! with a configured surface and valid handles.

mod adapter;
mod context;
mod init;
mod surface;

pub use context::Gpu;
pub use init::GpuInit;
