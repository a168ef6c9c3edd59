use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::error::ExtractError;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Key-point extraction behind a trait so the pipeline can run without a
/// provider (and tests can fake one).
#[async_trait]
pub trait KeyPointExtractor: Send + Sync {
    async fn extract(&self, review_text: &str) -> Result<String, ExtractError>;
}

/// Gemini `generateContent` client.
pub struct GeminiExtractor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiExtractor {
    /// `timeout` bounds the provider call when set; `None` preserves the
    /// original unbounded behavior.
    pub fn new(
        api_key: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, ExtractError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_key,
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

#[async_trait]
impl KeyPointExtractor for GeminiExtractor {
    async fn extract(&self, review_text: &str) -> Result<String, ExtractError> {
        let prompt = format!(
            "Extract 3 main key points from this review as bullet points: '{}'",
            review_text
        );
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = body["error"]["message"]
                .as_str()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("provider returned HTTP {}", status));
            return Err(ExtractError::Provider(message));
        }

        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| ExtractError::Provider("no text candidate in response".to_string()))
    }
}
