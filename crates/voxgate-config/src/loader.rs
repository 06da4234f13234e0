use std::path::Path;

use crate::{Config, EngineConfig};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Missing sections fall back to their defaults. The result is not
    /// validated; call [`Config::validate`] once all overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or TOML parsing fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        tracing::debug!(path = %path.display(), "configuration file loaded");

        Ok(config)
    }

    /// Validate that the engine can be started with this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Piper binary or the voice model does not
    /// exist, or the engine timeout is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_engine()?;
        Ok(())
    }

    fn validate_engine(&self) -> anyhow::Result<()> {
        let engine = &self.engine;

        if !EngineConfig::exists(&engine.binary_path) {
            anyhow::bail!("Piper binary not found at {}", engine.binary_path.display());
        }

        if !EngineConfig::exists(&engine.model_path) {
            anyhow::bail!("Model not found at {}", engine.model_path.display());
        }

        if engine.timeout.is_zero() {
            anyhow::bail!("engine.timeout must be greater than 0");
        }

        if let Some(ref dir) = engine.temp_dir
            && !dir.is_dir()
        {
            anyhow::bail!("engine.temp_dir {} is not a directory", dir.display());
        }

        Ok(())
    }
}
