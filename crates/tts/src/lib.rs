#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod engine;
mod error;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

pub use engine::{PiperEngine, SynthesisEngine};
pub use error::{ErrorBody, Result, TtsError};
pub use request::ExtractSpeech;
pub use server::{Server, TtsServerBuilder};
pub use types::{AUDIO_WAV, SpeechRequest, SpeechResponse};

/// Build the TTS server from configuration
pub fn build_server(config: &voxgate_config::Config) -> Arc<Server> {
    Arc::new(TtsServerBuilder::new(config).build())
}

/// Create the endpoint router for TTS
///
/// `/api/tts/stream` is answered exactly like `/api/tts`, with a complete
/// WAV body rather than a chunked stream.
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/api/tts", post(synthesize))
        .route("/api/tts/stream", post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractSpeech(request): ExtractSpeech,
) -> Result<axum::response::Response> {
    tracing::debug!(text_len = request.text.len(), "TTS speech handler called");

    let response = server.synthesize(request).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}
