use std::any::Any;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use tts::{ErrorBody, TtsError};

/// Answer for unknown paths and for known paths hit with the wrong method
pub async fn not_found() -> TtsError {
    TtsError::NotFound
}

/// Turn a handler panic into the regular JSON error shape
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "internal server error".to_string());

    tracing::error!("request handler panicked: {message}");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: message })).into_response()
}
