// src/handlers/chat.rs
use crate::chat_session::SendRejected;
use crate::dashboard::Tab;
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

pub fn chat_routes() -> Router {
    Router::new()
        .route("/chat/send", post(send_message))
        .route("/chat/quick", post(send_quick_question))
}

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QuickQuestionForm {
    pub question: String,
}

async fn send_message(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<MessageForm>,
) -> Response {
    {
        let mut dashboard = state.dashboard.write().await;
        dashboard.select_tab(Tab::Chatbot);
        dashboard.chat.set_input(form.message);
    }
    ask(&state, None).await
}

async fn send_quick_question(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<QuickQuestionForm>,
) -> Response {
    state.dashboard.write().await.select_tab(Tab::Chatbot);
    ask(&state, Some(&form.question)).await
}

/// Runs one exchange. The dashboard lock is released while the backend answers,
/// so a concurrent post sees the pending state and is turned away.
///
/// The backend call and the write-back run on their own task: a client that
/// disconnects mid-exchange must not leave the chat stuck awaiting a response.
async fn ask(state: &Arc<AppState>, quick: Option<&str>) -> Response {
    let question = {
        let mut dashboard = state.dashboard.write().await;
        match dashboard.chat.begin_send(quick) {
            Ok(question) => question,
            Err(SendRejected::Empty) => return Redirect::to(&Tab::Chatbot.location()).into_response(),
            Err(rejected @ SendRejected::Busy) => {
                tracing::warn!("chat send refused while a response is pending");
                return (StatusCode::CONFLICT, rejected.to_string()).into_response();
            }
        }
    };

    let task_state = Arc::clone(state);
    let exchange = tokio::spawn(async move {
        let outcome = task_state.api.ask(&question).await;
        task_state.dashboard.write().await.chat.receive(outcome);
    });
    if let Err(e) = exchange.await {
        tracing::error!("Chat exchange task failed: {}", e);
    }

    Redirect::to(&Tab::Chatbot.location()).into_response()
}
