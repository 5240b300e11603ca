// src/handlers/profile.rs
use crate::dashboard::{NoticeKind, Tab};
use crate::models::Profile;
use crate::profile_store::SAVED_NOTICE;
use crate::AppState;
use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn profile_routes() -> Router {
    Router::new().route("/profile", post(submit_profile))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileAction {
    #[default]
    Save,
    Recommend,
}

/// The profile form: every profile field plus which button was pressed.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub action: ProfileAction,
}

async fn submit_profile(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<ProfileForm>,
) -> Response {
    match form.action {
        ProfileAction::Save => save_profile(&state, form.profile).await,
        ProfileAction::Recommend => recommend_schemes(&state, form.profile).await,
    }
}

async fn save_profile(state: &Arc<AppState>, profile: Profile) -> Response {
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_tab(Tab::Profile);
    dashboard.profile.replace(profile);

    match dashboard.profile.submit().await {
        Ok(()) => dashboard.notify(NoticeKind::Success, SAVED_NOTICE),
        Err(e) => {
            tracing::error!("Failed to save profile: {}", e);
            dashboard.notify(NoticeKind::Error, format!("Could not save profile: {}", e));
        }
    }
    Redirect::to(&Tab::Profile.location()).into_response()
}

/// Sends the profile as currently filled in, saved or not.
///
/// A refused post leaves the in-memory profile as it was. Like chat, the
/// backend call runs detached from the request so a dropped connection still
/// returns the session to idle.
async fn recommend_schemes(state: &Arc<AppState>, profile: Profile) -> Response {
    let snapshot = {
        let mut dashboard = state.dashboard.write().await;
        dashboard.select_tab(Tab::Profile);
        let Some(snapshot) = dashboard.recommendations.begin(&profile) else {
            tracing::warn!("recommendation refused while a request is pending");
            return (StatusCode::CONFLICT, "Recommendations are already being fetched")
                .into_response();
        };
        dashboard.profile.replace(profile);
        snapshot
    };

    let task_state = Arc::clone(state);
    let request = tokio::spawn(async move {
        let outcome = task_state.api.recommend(&snapshot).await;
        task_state.dashboard.write().await.recommendations.complete(outcome);
    });
    if let Err(e) = request.await {
        tracing::error!("Recommendation task failed: {}", e);
    }

    Redirect::to(&Tab::Profile.location()).into_response()
}
