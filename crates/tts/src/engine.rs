use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use async_trait::async_trait;
use tempfile::TempPath;
use tokio::{io::AsyncWriteExt, process::Command};
use voxgate_config::EngineConfig;

use crate::error::{Result, TtsError};

/// Trait for text-to-speech engine implementations
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Synthesize text into WAV bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;

    /// Name of the loaded voice model, reported by the health endpoint
    fn model_name(&self) -> &str;
}

/// Runs the Piper executable once per request
///
/// Each call gets its own output file which is removed on every exit path,
/// including timeouts and cancellation of the calling future.
pub struct PiperEngine {
    binary_path: PathBuf,
    model_path: PathBuf,
    model_name: String,
    timeout: Duration,
    temp_dir: PathBuf,
    speaker: Option<u32>,
    length_scale: Option<f32>,
    sentence_silence: Option<f32>,
}

impl PiperEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            binary_path: config.binary_path.clone(),
            model_path: config.model_path.clone(),
            model_name: config.model_name(),
            timeout: config.timeout,
            temp_dir: config.temp_dir(),
            speaker: config.speaker,
            length_scale: config.length_scale,
            sentence_silence: config.sentence_silence,
        }
    }

    fn command(&self, output_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary_path);

        cmd.arg("--model")
            .arg(&self.model_path)
            .arg("--output_file")
            .arg(output_path);

        if let Some(speaker) = self.speaker {
            cmd.arg("--speaker").arg(speaker.to_string());
        }
        if let Some(length_scale) = self.length_scale {
            cmd.arg("--length_scale").arg(length_scale.to_string());
        }
        if let Some(sentence_silence) = self.sentence_silence {
            cmd.arg("--sentence_silence").arg(sentence_silence.to_string());
        }

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }

    async fn run(&self, text: &str, output_path: &Path) -> Result<Vec<u8>> {
        let mut cmd = self.command(output_path);

        tracing::debug!(command = ?cmd.as_std(), "running piper");

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TtsError::EngineUnavailable(format!("binary not found at '{}'", self.binary_path.display()))
            } else {
                TtsError::io("failed to start piper", e)
            }
        })?;

        let stdin = child.stdin.take();

        // Feed stdin while stdout and stderr are drained, a chatty engine
        // would otherwise fill its pipes and block before reading all input
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            stdin.write_all(text.as_bytes()).await
            // stdin is dropped here, closing it
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| TtsError::io("failed to wait for piper", e))?;

        match fed {
            Ok(()) => {}
            // Piper exited before reading everything, its status and stderr tell why
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!("piper closed stdin early");
            }
            Err(e) => return Err(TtsError::io("failed to write to piper stdin", e)),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!(status = %output.status, "piper failed: {}", stderr.trim());
            return Err(TtsError::EngineFailure { stderr });
        }

        let audio = tokio::fs::read(output_path)
            .await
            .map_err(|e| TtsError::io("failed to read piper output", e))?;

        if audio.is_empty() {
            tracing::warn!("piper produced empty output");
            return Err(TtsError::EmptyOutput);
        }

        Ok(audio)
    }

    fn output_path(&self) -> Result<TempPath> {
        tempfile::Builder::new()
            .prefix("voxgate-")
            .suffix(".wav")
            .tempfile_in(&self.temp_dir)
            .map(tempfile::NamedTempFile::into_temp_path)
            .map_err(|e| TtsError::io("failed to create temporary output file", e))
    }
}

#[async_trait]
impl SynthesisEngine for PiperEngine {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let output_path = self.output_path()?;

        tracing::debug!(
            output = %output_path.display(),
            text_len = text.len(),
            "synthesizing with piper"
        );

        let result = match tokio::time::timeout(self.timeout, self.run(text, &output_path)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(timeout = ?self.timeout, "piper timed out, process killed");
                Err(TtsError::EngineTimeout(self.timeout))
            }
        };

        release(output_path);

        if let Ok(ref audio) = result {
            tracing::debug!("piper synthesis complete, {} bytes", audio.len());
        }

        result
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Delete the output file, logging instead of failing
fn release(path: TempPath) {
    let shown = path.display().to_string();

    if let Err(e) = path.close()
        && e.kind() != ErrorKind::NotFound
    {
        tracing::warn!(path = %shown, "failed to remove temporary output file: {e}");
    }
}
