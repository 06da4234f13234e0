use std::sync::Arc;

use voxgate_config::Config;

use crate::{
    engine::{PiperEngine, SynthesisEngine},
    types::{SpeechRequest, SpeechResponse},
};

/// TTS server that hands validated requests to the synthesis engine
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct Server {
    engine: Arc<dyn SynthesisEngine>,
    body_limit: usize,
}

impl Server {
    /// Create a server around an arbitrary engine
    pub fn new(engine: Arc<dyn SynthesisEngine>, body_limit: usize) -> Self {
        Self { engine, body_limit }
    }

    /// Synthesize the request text into a WAV response
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let audio = self.engine.synthesize(&request.text).await?;
        Ok(SpeechResponse { audio })
    }

    /// Name of the configured voice model
    pub fn model_name(&self) -> &str {
        self.engine.model_name()
    }

    /// Maximum accepted request body size in bytes
    pub const fn body_limit(&self) -> usize {
        self.body_limit
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let engine = PiperEngine::new(&self.config.engine);

        tracing::debug!(
            binary = %self.config.engine.binary_path.display(),
            model = %self.config.engine.model_path.display(),
            timeout = ?self.config.engine.timeout,
            "TTS server initialized with piper engine"
        );

        Server::new(Arc::new(engine), self.config.server.body_limit)
    }
}
