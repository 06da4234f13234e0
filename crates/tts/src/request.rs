use std::sync::Arc;

use axum::body::Body;

use crate::{error::TtsError, server::Server, types::SpeechRequest};

/// Extractor that reads the body and validates it into a [`SpeechRequest`]
///
/// The body is read up to the server's configured limit. No `Content-Type`
/// is required, clients of the Piper wrapper commonly omit it.
pub struct ExtractSpeech(pub SpeechRequest);

impl axum::extract::FromRequest<Arc<Server>> for ExtractSpeech {
    type Rejection = TtsError;

    async fn from_request(request: http::Request<Body>, server: &Arc<Server>) -> Result<Self, Self::Rejection> {
        let limit = server.body_limit();

        let bytes = axum::body::to_bytes(request.into_body(), limit).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                TtsError::PayloadTooLarge
            } else {
                TtsError::BodyRead(err.to_string())
            }
        })?;

        SpeechRequest::from_body(&bytes).map(Self)
    }
}
