#![allow(clippy::must_use_candidate)]

pub mod engine;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use engine::*;
pub use server::*;
pub use telemetry::*;

/// Top-level voxgate configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Piper engine configuration
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
