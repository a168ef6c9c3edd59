use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::error::AnalyzeError;
use crate::models::{AnalyzeRequest, Review};
use crate::AppState;

async fn root() -> Json<Value> {
    Json(json!({ "message": "Backend Product Review Analyzer is Running!" }))
}

async fn analyze_review(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<Review>, AnalyzeError> {
    let review = state
        .analyzer
        .analyze(&payload.product_name, &payload.review_text)
        .await?;
    Ok(Json(review))
}

async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AnalyzeError> {
    Ok(Json(state.analyzer.list_reviews().await?))
}

pub fn create_router(state: AppState) -> Router {
    // Any-origin CORS is a development default, not fit for production.
    Router::new()
        .route("/", get(root))
        .route("/api/analyze-review", post(analyze_review))
        .route("/api/reviews", get(list_reviews))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
