//! Shared utilities

pub mod config;

pub use config::{Config, RegistryConfig, RenderConfig};
