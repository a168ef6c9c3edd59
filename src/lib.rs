// ─────────────────────────────────────────────
// Analysis pipeline
// ─────────────────────────────────────────────
pub mod sentiment;
pub mod service;

// External integrations
pub mod gemini;

// Persistence
pub mod models;
pub mod store;

// HTTP surface & wiring
pub mod api;
pub mod config;
pub mod error;

// ─────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────
pub use error::*;
pub use models::*;
pub use service::*;
pub use store::*;

use std::sync::Arc;

// ─────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ReviewAnalyzer>,
}
