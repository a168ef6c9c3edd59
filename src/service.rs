use std::sync::Arc;

use chrono::Utc;

use crate::error::AnalyzeError;
use crate::gemini::KeyPointExtractor;
use crate::models::{NewReview, Review};
use crate::sentiment::SentimentClassifier;
use crate::store::ReviewStore;

/// Shown in place of key points when no provider key is configured.
pub const MISSING_KEY_PLACEHOLDER: &str = "Key points not available (API Key missing).";

/// The analyze pipeline: classify, extract key points, persist. Dependencies
/// are injected so each can be swapped for a fake.
pub struct ReviewAnalyzer {
    classifier: Arc<dyn SentimentClassifier>,
    extractor: Option<Arc<dyn KeyPointExtractor>>,
    store: ReviewStore,
}

impl ReviewAnalyzer {
    pub fn new(
        classifier: Arc<dyn SentimentClassifier>,
        extractor: Option<Arc<dyn KeyPointExtractor>>,
        store: ReviewStore,
    ) -> Self {
        Self {
            classifier,
            extractor,
            store,
        }
    }

    /// Classification and persistence failures abort the request. Key-point
    /// extraction never does: an analysis without key points is still useful,
    /// so its failure is folded into the stored text.
    pub async fn analyze(
        &self,
        product_name: &str,
        review_text: &str,
    ) -> Result<Review, AnalyzeError> {
        let prediction = self.classifier.classify(review_text)?;

        let key_points = match &self.extractor {
            Some(extractor) => match extractor.extract(review_text).await {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(error = %err, "key-point extraction failed");
                    format!("Gemini Error: {}", err)
                }
            },
            None => MISSING_KEY_PLACEHOLDER.to_string(),
        };

        let review = self
            .store
            .insert(NewReview {
                product_name: product_name.to_string(),
                review_text: review_text.to_string(),
                sentiment: prediction.label,
                key_points,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(id = review.id, sentiment = %review.sentiment, "review analyzed");
        Ok(review)
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, AnalyzeError> {
        Ok(self.store.list().await?)
    }
}
