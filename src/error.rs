use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Sentiment classification failure. Never caught inside the pipeline — it
/// fails the whole request.
#[derive(Debug, Error)]
#[error("sentiment classification failed: {0}")]
pub struct ClassifyError(pub String);

/// Key-point extraction failure. Recovered per request: the pipeline
/// substitutes a diagnostic placeholder and keeps going.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Provider(String),
}

/// Request-fatal failures of the analyze pipeline.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = Json(json!({ "detail": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
