//! Logger setup.
//!
//! Initialization glue logs a fair amount (adapter lists, selected adapter,
//! surface configuration), so the demos want a logger wired up before any
//! device work starts. This module owns that one-time setup behind the
//! standard `log` facade.

mod init;

pub use init::{LogConfig, init_logging};
