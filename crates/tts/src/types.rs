use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{HeaderValue, header};
use serde_json::Value;

use crate::error::{Result, TtsError};

/// Content type of every synthesized response
pub const AUDIO_WAV: &str = "audio/wav";

/// Validated synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to synthesize, trimmed and never empty
    pub text: String,
}

impl SpeechRequest {
    /// Parse and validate a raw request body of the form `{"text": "..."}`
    ///
    /// A JSON document that is not an object, or whose `text` is not a
    /// string, is treated the same as a missing `text` field.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(TtsError::EmptyBody);
        }

        let value: Value = serde_json::from_slice(body).map_err(|_| TtsError::InvalidJson)?;

        let text = value
            .get("text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(TtsError::MissingText)?;

        Ok(Self { text: text.to_owned() })
    }
}

/// Raw audio produced by the engine
pub struct SpeechResponse {
    /// WAV bytes
    pub audio: Vec<u8>,
}

impl SpeechResponse {
    /// Convert the speech response into an axum HTTP response
    pub fn into_response(self) -> Response {
        let content_length = HeaderValue::from(self.audio.len());

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_WAV)),
                (header::CONTENT_LENGTH, content_length),
            ],
            Body::from(self.audio),
        )
            .into_response()
    }
}
