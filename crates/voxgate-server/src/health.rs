use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    model: &'a str,
}

/// Health check handler, reports the loaded voice model
pub async fn health_handler(State(server): State<Arc<tts::Server>>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok",
        model: server.model_name(),
    };

    (StatusCode::OK, Json(body)).into_response()
}
