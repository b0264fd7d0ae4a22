use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::{Result, SubmissionError};
use crate::models::{MealPlan, ProfileRequest};

/// Path of the profile endpoint, relative to the service base URL.
pub const PROFILE_PATH: &str = "/profile";

/// External service that turns a profile into a meal plan.
#[async_trait]
pub trait RecommendationService {
    async fn request_plan(
        &self,
        profile: &ProfileRequest,
    ) -> std::result::Result<MealPlan, SubmissionError>;
}

/// Recommendation service reached over HTTP with a JSON body.
pub struct HttpRecommendationService {
    http_client: Client,
    base_url: String,
}

impl HttpRecommendationService {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.service_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROFILE_PATH)
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn request_plan(
        &self,
        profile: &ProfileRequest,
    ) -> std::result::Result<MealPlan, SubmissionError> {
        let url = self.endpoint();
        debug!(%url, "posting profile");

        let response = self
            .http_client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = rejection_message(&body);
            warn!(status = status.as_u16(), ?message, "profile rejected");
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map(MealPlan::new)
            .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))
    }
}

/// Pull a user-facing message out of an error body.
///
/// Prefers `message`, then `error`; anything else (including non-JSON bodies)
/// yields `None`.
pub fn rejection_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| json.get(key)?.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_prefers_message_field() {
        let body = r#"{"message": "Invalid age", "error": "other"}"#;
        assert_eq!(rejection_message(body).as_deref(), Some("Invalid age"));
    }

    #[test]
    fn test_rejection_message_falls_back_to_error_field() {
        let body = r#"{"error": "Recommendation system is not available"}"#;
        assert_eq!(
            rejection_message(body).as_deref(),
            Some("Recommendation system is not available")
        );
    }

    #[test]
    fn test_rejection_message_absent() {
        assert_eq!(rejection_message("<html>502</html>"), None);
        assert_eq!(rejection_message(r#"{"message": 42}"#), None);
        assert_eq!(rejection_message(r#"{"message": "  "}"#), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = ServiceConfig {
            service_url: "http://localhost:5000/".to_string(),
            ..ServiceConfig::default()
        };
        let service = HttpRecommendationService::new(&config).unwrap();
        assert_eq!(service.endpoint(), "http://localhost:5000/profile");
    }
}
