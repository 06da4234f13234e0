//! Programmatic configuration builder for integration tests

use std::{net::SocketAddr, path::Path, time::Duration};

use voxgate_config::{Config, EngineConfig, ServerConfig};

use super::fake_piper::FakePiper;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder wired to a fake Piper installation
    ///
    /// Temporary WAV files go to the fake's scratch directory so tests can
    /// check that nothing is left behind.
    pub fn new(piper: &FakePiper) -> Self {
        let listen = SocketAddr::from(([127, 0, 0, 1], 0));

        Self {
            config: Config {
                server: ServerConfig {
                    host: listen.ip(),
                    port: listen.port(),
                    ..ServerConfig::default()
                },
                engine: EngineConfig {
                    binary_path: piper.binary().to_path_buf(),
                    model_path: piper.model().to_path_buf(),
                    temp_dir: Some(piper.scratch().to_path_buf()),
                    ..EngineConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Override the engine timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.engine.timeout = timeout;
        self
    }

    /// Override the request body limit
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.config.server.body_limit = limit;
        self
    }

    /// Point the engine at a different binary
    pub fn with_binary(mut self, path: &Path) -> Self {
        self.config.engine.binary_path = path.to_path_buf();
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
