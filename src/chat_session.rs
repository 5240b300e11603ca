// src/chat_session.rs
//! Chatbot tab: transcript plus an Idle / AwaitingResponse state machine.
//!
//! Sending is split into `begin_send` and `receive` so a caller holding the
//! session behind a lock can release it while the request is in flight.

use crate::error::ApiError;
use crate::models::{AskResponse, ChatMessage};
use crate::schemes_client::SchemesApi;
use thiserror::Error;
use tracing::{debug, warn};

pub const COMMON_QUESTIONS: [&str; 4] = [
    "What schemes are available for students?",
    "How to apply for a pension?",
    "Eligibility for health insurance?",
    "Subsidy schemes for farmers?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingResponse,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    #[error("Nothing to send")]
    Empty,
    #[error("Still waiting for the previous answer")]
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    input: String,
    state: ChatState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ChatState::AwaitingResponse
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_loading()
    }

    /// Starts an exchange and returns the question to put on the wire.
    ///
    /// `quick` replaces the input box text (quick-question buttons). On success
    /// the user turn is already in the transcript and the input box is empty.
    pub fn begin_send(&mut self, quick: Option<&str>) -> Result<String, SendRejected> {
        if self.is_loading() {
            debug!("chat send refused: response pending");
            return Err(SendRejected::Busy);
        }

        let question = quick.unwrap_or(&self.input).trim().to_string();
        if question.is_empty() {
            return Err(SendRejected::Empty);
        }

        self.input.clear();
        self.transcript.push(ChatMessage::user(question.clone()));
        self.state = ChatState::AwaitingResponse;
        Ok(question)
    }

    /// Applies the outcome of the request started by `begin_send`.
    /// Always returns the session to Idle.
    pub fn receive(&mut self, outcome: Result<AskResponse, ApiError>) {
        if !self.is_loading() {
            warn!("dropping chat response with no pending question");
            return;
        }

        let reply = match outcome {
            Ok(answer) => ChatMessage::assistant(answer.answer, answer.sources),
            Err(e) => ChatMessage::assistant(format!("⚠️ Error: {}", e), None),
        };
        self.transcript.push(reply);
        self.state = ChatState::Idle;
    }

    /// Full round trip for a caller that owns the session outright.
    pub async fn send<A>(&mut self, api: &A, quick: Option<&str>) -> Result<(), SendRejected>
    where
        A: SchemesApi + ?Sized,
    {
        let question = self.begin_send(quick)?;
        let outcome = api.ask(&question).await;
        self.receive(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn answer(text: &str, sources: &[&str]) -> AskResponse {
        AskResponse {
            answer: text.to_string(),
            sources: Some(sources.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn whitespace_input_is_a_no_op() {
        let mut chat = ChatSession::new();
        chat.set_input("   \n\t ");
        assert!(!chat.can_send());
        assert_eq!(chat.begin_send(None), Err(SendRejected::Empty));
        assert!(chat.transcript().is_empty());
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn begin_send_is_optimistic_and_clears_input() {
        let mut chat = ChatSession::new();
        chat.set_input("  pension for my father?  ");
        let question = chat.begin_send(None).unwrap();

        assert_eq!(question, "pension for my father?");
        assert_eq!(chat.input(), "");
        assert!(chat.is_loading());
        assert_eq!(chat.transcript(), &[ChatMessage::user("pension for my father?")]);
    }

    #[test]
    fn second_send_while_pending_is_refused() {
        let mut chat = ChatSession::new();
        chat.set_input("first");
        chat.begin_send(None).unwrap();

        chat.set_input("second");
        assert_eq!(chat.begin_send(None), Err(SendRejected::Busy));
        assert_eq!(chat.begin_send(Some(COMMON_QUESTIONS[0])), Err(SendRejected::Busy));
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.input(), "second");

        chat.receive(Ok(answer("done", &[])));
        assert!(!chat.is_loading());
        assert_eq!(chat.begin_send(None).unwrap(), "second");
        assert_eq!(chat.transcript().len(), 3);
    }

    #[test]
    fn quick_question_ignores_input_box() {
        let mut chat = ChatSession::new();
        chat.set_input("draft");
        let question = chat.begin_send(Some(COMMON_QUESTIONS[3])).unwrap();
        assert_eq!(question, "Subsidy schemes for farmers?");
        assert_eq!(chat.input(), "");
    }

    #[test]
    fn answer_with_sources_is_appended() {
        let mut chat = ChatSession::new();
        chat.set_input("q");
        chat.begin_send(None).unwrap();
        chat.receive(Ok(answer("X", &["A", "B"])));

        let last = chat.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "X");
        assert_eq!(last.sources, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn status_error_becomes_assistant_message() {
        let mut chat = ChatSession::new();
        chat.set_input("q");
        chat.begin_send(None).unwrap();
        chat.receive(Err(ApiError::Status(500)));

        let last = chat.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "⚠️ Error: Request failed: 500");
        assert!(last.sources.is_none());
        assert!(!chat.is_loading());
    }

    #[test]
    fn stray_response_is_ignored() {
        let mut chat = ChatSession::new();
        chat.receive(Ok(answer("late", &[])));
        assert!(chat.transcript().is_empty());
    }
}
