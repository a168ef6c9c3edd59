use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use review_analyzer::api::create_router;
use review_analyzer::error::{ClassifyError, ExtractError};
use review_analyzer::gemini::KeyPointExtractor;
use review_analyzer::sentiment::{Prediction, SentimentClassifier};
use review_analyzer::store::ReviewStore;
use review_analyzer::{AppState, ReviewAnalyzer};

struct FixedClassifier(&'static str);

impl SentimentClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Result<Prediction, ClassifyError> {
        Ok(Prediction {
            label: self.0.to_string(),
            score: 0.99,
        })
    }
}

struct FailingClassifier;

impl SentimentClassifier for FailingClassifier {
    fn classify(&self, _text: &str) -> Result<Prediction, ClassifyError> {
        Err(ClassifyError("model unavailable".to_string()))
    }
}

struct FixedExtractor(&'static str);

#[async_trait]
impl KeyPointExtractor for FixedExtractor {
    async fn extract(&self, _review_text: &str) -> Result<String, ExtractError> {
        Ok(self.0.to_string())
    }
}

async fn app_with(
    classifier: Arc<dyn SentimentClassifier>,
    extractor: Option<Arc<dyn KeyPointExtractor>>,
) -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = ReviewStore::new(pool);
    store.init().await.unwrap();
    create_router(AppState {
        analyzer: Arc::new(ReviewAnalyzer::new(classifier, extractor, store)),
    })
}

fn analyze_request(product_name: &str, review_text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze-review")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "productName": product_name, "reviewText": review_text }).to_string(),
        ))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn liveness_endpoint_reports_running() {
    let app = app_with(Arc::new(FixedClassifier("POSITIVE")), None).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Backend Product Review Analyzer is Running!"
    );
}

#[tokio::test]
async fn analyze_review_returns_the_full_record() {
    let app = app_with(
        Arc::new(FixedClassifier("POSITIVE")),
        Some(Arc::new(FixedExtractor("- Great product\n- Fast shipping"))),
    )
    .await;

    let response = app
        .oneshot(analyze_request("Widget", "Great product, fast shipping!"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["productName"], "Widget");
    assert_eq!(body["reviewText"], "Great product, fast shipping!");
    assert_eq!(body["sentiment"], "POSITIVE");
    assert_eq!(body["keyPoints"], "- Great product\n- Fast shipping");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn classifier_failure_surfaces_as_500_with_detail() {
    let app = app_with(Arc::new(FailingClassifier), None).await;

    let response = app
        .oneshot(analyze_request("Widget", "Great product"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("model unavailable"));
}

#[tokio::test]
async fn list_reviews_is_empty_then_newest_first() {
    let app = app_with(Arc::new(FixedClassifier("POSITIVE")), None).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/reviews")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    for product in ["First", "Second"] {
        let response = app
            .clone()
            .oneshot(analyze_request(product, "Great product"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/reviews")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["productName"], "Second");
    assert_eq!(listed[1]["productName"], "First");
}
