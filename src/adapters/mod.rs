//! Adapters for external systems.

pub mod plugins;
