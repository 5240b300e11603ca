// src/handlers/schemes.rs
use crate::dashboard::Tab;
use crate::AppState;
use axum::{
    extract::{Extension, Form, Path},
    response::Redirect,
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn scheme_routes() -> Router {
    Router::new()
        .route("/schemes/filter", post(apply_filter))
        .route("/schemes/:id/details", post(toggle_details))
        .route("/schemes/:id/bookmark", post(toggle_bookmark))
}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub search: String,
}

async fn apply_filter(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<FilterForm>,
) -> Redirect {
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_tab(Tab::Schemes);
    dashboard.catalog.set_filter_str(&form.category);
    dashboard.catalog.set_search(form.search);
    tracing::debug!(
        category = %dashboard.catalog.category(),
        search = %dashboard.catalog.search(),
        "catalog filter updated"
    );
    Redirect::to(&Tab::Schemes.location())
}

async fn toggle_details(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Redirect {
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_tab(Tab::Schemes);
    dashboard.catalog.toggle_details(id);
    Redirect::to(&format!("{}#scheme-{}", Tab::Schemes.location(), id))
}

async fn toggle_bookmark(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Redirect {
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_tab(Tab::Schemes);
    let bookmarked = dashboard.bookmarks.toggle(id);
    tracing::info!(scheme_id = id, bookmarked, "🔖 Bookmark toggled");
    Redirect::to(&format!("{}#scheme-{}", Tab::Schemes.location(), id))
}
