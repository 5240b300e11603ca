// lib.rs - SchemesConnect dashboard: state, API client and HTTP surface
pub mod bookmarks;
pub mod catalog;
pub mod chat_session;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod profile_store;
pub mod recommendation;
pub mod schemes_client;
pub mod storage;

use axum::{Extension, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use config::AppConfig;
pub use dashboard::{Dashboard, Tab};
pub use error::{ApiError, ConfigError, StorageError};
pub use schemes_client::{SchemesApi, SchemesClient};
pub use storage::{JsonFileStorage, MemoryStorage, ProfileStorage};

/// Shared state handed to every handler through an `Extension`.
///
/// The dashboard lock is never held while waiting on the schemes API.
pub struct AppState {
    pub config: AppConfig,
    pub dashboard: RwLock<Dashboard>,
    pub api: Arc<dyn SchemesApi>,
}

impl AppState {
    pub async fn new(
        config: AppConfig,
        api: Arc<dyn SchemesApi>,
        storage: Arc<dyn ProfileStorage>,
    ) -> Self {
        Self {
            config,
            dashboard: RwLock::new(Dashboard::load(storage).await),
            api,
        }
    }
}

/// Builds the full router with logging and CORS layers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::schemes::scheme_routes())
        .merge(handlers::chat::chat_routes())
        .merge(handlers::profile::profile_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
