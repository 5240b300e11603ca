// src/recommendation.rs
use crate::error::ApiError;
use crate::models::{Profile, RecommendedScheme};
use crate::schemes_client::SchemesApi;
use tracing::{debug, error};

pub const EMPTY_HINT: &str =
    "No schemes found yet. Fill your profile and click “Recommend Schemes”.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationState {
    #[default]
    Idle,
    Pending,
}

/// Recommendation panel on the Profile tab.
///
/// Only one request may be in flight; a trigger while `Pending` is refused.
/// Failures land in `error` and are rendered, the list stays empty.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSession {
    state: RecommendationState,
    schemes: Vec<RecommendedScheme>,
    error: Option<String>,
}

impl RecommendationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecommendationState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RecommendationState::Pending
    }

    pub fn schemes(&self) -> &[RecommendedScheme] {
        &self.schemes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the previous results and enters `Pending`.
    /// Returns the profile snapshot to send, or `None` if a request is already out.
    pub fn begin(&mut self, profile: &Profile) -> Option<Profile> {
        if self.is_loading() {
            debug!("recommendation refused: request pending");
            return None;
        }
        self.schemes.clear();
        self.error = None;
        self.state = RecommendationState::Pending;
        Some(profile.clone())
    }

    pub fn complete(&mut self, outcome: Result<Vec<RecommendedScheme>, ApiError>) {
        match outcome {
            Ok(schemes) => self.schemes = schemes,
            Err(e) => {
                error!("Recommendation request failed: {}", e);
                self.schemes.clear();
                self.error = Some(format!("Could not fetch recommendations: {}", e));
            }
        }
        self.state = RecommendationState::Idle;
    }

    /// Full round trip for a caller that owns the session outright.
    /// Returns `false` when refused because a request is already pending.
    pub async fn request<A>(&mut self, api: &A, profile: &Profile) -> bool
    where
        A: SchemesApi + ?Sized,
    {
        let Some(snapshot) = self.begin(profile) else {
            return false;
        };
        let outcome = api.recommend(&snapshot).await;
        self.complete(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32) -> RecommendedScheme {
        RecommendedScheme {
            id,
            title: format!("Scheme {}", id),
            category: "Health".to_string(),
            description: String::new(),
            eligibility: String::new(),
            documents: vec![],
            apply_link: "https://example.gov.in/".to_string(),
            publish_date: None,
            source: "doc.pdf".to_string(),
            why_recommended: "matches income".to_string(),
            confidence: 0.5,
        }
    }

    #[test]
    fn begin_clears_previous_results_and_guards_reentry() {
        let mut session = RecommendationSession::new();
        session.begin(&Profile::default()).unwrap();
        session.complete(Ok(vec![sample(1), sample(2)]));
        assert_eq!(session.schemes().len(), 2);

        assert!(session.begin(&Profile::default()).is_some());
        assert!(session.schemes().is_empty());
        assert!(session.begin(&Profile::default()).is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn failure_records_error_and_leaves_list_empty() {
        let mut session = RecommendationSession::new();
        session.begin(&Profile::default()).unwrap();
        session.complete(Err(ApiError::Status(502)));

        assert!(session.schemes().is_empty());
        assert!(session.error().unwrap().contains("502"));
        assert_eq!(session.state(), RecommendationState::Idle);

        session.begin(&Profile::default()).unwrap();
        assert!(session.error().is_none());
    }
}
