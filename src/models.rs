use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted review with its derived analysis. Rows are written once and
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub product_name: String,
    pub review_text: String,
    pub sentiment: String,
    pub key_points: String,
    pub created_at: DateTime<Utc>,
}

/// Fully-populated row ready for insertion, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub product_name: String,
    pub review_text: String,
    pub sentiment: String,
    pub key_points: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub product_name: String,
    pub review_text: String,
}
