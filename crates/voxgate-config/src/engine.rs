use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Deserializer};

/// Default location of the Piper executable
pub const DEFAULT_BINARY_PATH: &str = "/usr/local/bin/piper";

/// Default Piper voice model
pub const DEFAULT_MODEL_PATH: &str = "/models/de_DE-thorsten-medium.onnx";

/// Hard limit for a single engine invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Piper engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Path to the Piper executable
    #[serde(default = "default_binary_path")]
    pub binary_path: PathBuf,
    /// Path to the `.onnx` voice model
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Maximum time a synthesis may take (e.g. "30s", "1m")
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    /// Directory for intermediate WAV files, defaults to the OS temp dir
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Speaker id for multi-speaker models
    #[serde(default)]
    pub speaker: Option<u32>,
    /// Phoneme length multiplier, larger is slower speech
    #[serde(default)]
    pub length_scale: Option<f32>,
    /// Seconds of silence after each sentence
    #[serde(default)]
    pub sentence_silence: Option<f32>,
}

impl EngineConfig {
    /// File name of the configured voice model, without its directory
    pub fn model_name(&self) -> String {
        self.model_path
            .file_name()
            .map_or_else(|| self.model_path.display().to_string(), |name| name.to_string_lossy().into_owned())
    }

    /// Directory in which temporary output files are created
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Whether `path` points to an existing filesystem entry
    pub(crate) fn exists(path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary_path: default_binary_path(),
            model_path: default_model_path(),
            timeout: DEFAULT_TIMEOUT,
            temp_dir: None,
            speaker: None,
            length_scale: None,
            sentence_silence: None,
        }
    }
}

fn default_binary_path() -> PathBuf {
    PathBuf::from(DEFAULT_BINARY_PATH)
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    duration_str::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid duration '{raw}': {e}")))
}
