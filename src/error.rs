// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("generation backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("generation backend returned no candidates")]
    EmptyGeneration,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::EmptyGeneration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chat request failed");
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
