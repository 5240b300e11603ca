// src/schemes_client.rs
use crate::error::ApiError;
use crate::models::{AskRequest, AskResponse, Profile, RecommendedScheme};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

/// The two calls the dashboard makes against the schemes backend.
#[async_trait]
pub trait SchemesApi: Send + Sync {
    async fn ask(&self, question: &str) -> Result<AskResponse, ApiError>;
    async fn recommend(&self, profile: &Profile) -> Result<Vec<RecommendedScheme>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct SchemesClient {
    client: Client,
    base_url: String,
}

impl SchemesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POSTs `body` as JSON. Any non-2xx status is an error regardless of body.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, "Schemes API unreachable: {}", e);
                ApiError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Schemes API returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(url = %url, "Schemes API returned an unreadable body: {}", e);
            ApiError::Decode(e)
        })
    }
}

#[async_trait]
impl SchemesApi for SchemesClient {
    async fn ask(&self, question: &str) -> Result<AskResponse, ApiError> {
        info!("💬 Asking assistant: '{}'", question);
        let request = AskRequest {
            question: question.to_string(),
        };
        let answer: AskResponse = self.post_json("/api/ask", &request).await?;
        info!(
            "✅ Assistant answered with {} source(s)",
            answer.sources.as_ref().map_or(0, |s| s.len())
        );
        Ok(answer)
    }

    async fn recommend(&self, profile: &Profile) -> Result<Vec<RecommendedScheme>, ApiError> {
        info!(
            occupation = %profile.occupation,
            income = %profile.income,
            "🎯 Requesting scheme recommendations"
        );
        let schemes: Vec<RecommendedScheme> = self.post_json("/api/recommend", profile).await?;
        info!("✅ Received {} recommendation(s)", schemes.len());
        Ok(schemes)
    }
}
