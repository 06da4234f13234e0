use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Synthesis gateway errors with their HTTP status codes
///
/// The `Display` text of each variant is the message sent to the client.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request carried no body
    #[error("empty request body")]
    EmptyBody,

    /// Body is not parseable as JSON
    #[error("invalid JSON")]
    InvalidJson,

    /// `text` is absent, not a string, or blank
    #[error("missing 'text' field")]
    MissingText,

    /// Body exceeds the configured limit
    #[error("request body too large")]
    PayloadTooLarge,

    /// Body could not be read from the connection
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// Unknown route or method
    #[error("not found")]
    NotFound,

    /// Piper exited with a non-zero status
    #[error("piper failed: {stderr}")]
    EngineFailure { stderr: String },

    /// Piper did not finish within the configured timeout
    #[error("piper timed out after {0:?}")]
    EngineTimeout(Duration),

    /// Piper could not be started
    #[error("piper not available: {0}")]
    EngineUnavailable(String),

    /// Piper exited successfully but wrote no audio
    ///
    /// Answered with 500 rather than an empty 200 so clients never receive a
    /// body that is not a WAV file.
    #[error("piper produced empty output")]
    EmptyOutput,

    /// Filesystem or pipe error around the engine process
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl TtsError {
    pub(crate) const fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyBody | Self::InvalidJson | Self::MissingText | Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::EngineFailure { .. }
            | Self::EngineTimeout(_)
            | Self::EngineUnavailable(_)
            | Self::EmptyOutput
            | Self::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body, `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{self}");
        } else {
            tracing::debug!(status = status.as_u16(), "{self}");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
