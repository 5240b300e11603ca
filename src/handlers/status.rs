// src/handlers/status.rs
use crate::catalog::all_schemes;
use crate::AppState;
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}

async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let dashboard = state.dashboard.read().await;

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "api_base": state.config.api_base,
        "catalog_size": all_schemes().len(),
        "session": {
            "active_tab": dashboard.tab.slug(),
            "bookmarks": dashboard.bookmarks.len(),
            "transcript_length": dashboard.chat.transcript().len(),
            "chat_pending": dashboard.chat.is_loading(),
            "recommendations_pending": dashboard.recommendations.is_loading()
        }
    }))
}
