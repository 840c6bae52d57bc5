//! HTTP Assessment Repository - the remote persistence API.
//!
//! Every call is a single attempt. Transport failures become
//! `PersistenceError::Unavailable`, non-success statuses become
//! `PersistenceError::Rejected` carrying the status and response body.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpPersistenceConfig::new("https://records.example.com/api", token)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let repo = HttpAssessmentRepository::new(config, Arc::new(Classifier::default()))?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

use super::stored_record::{decode_stored, decode_stored_list};
use crate::domain::assessment::{Assessment, Classifier, NewAssessment, PersistenceError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Configuration for the persistence API client.
#[derive(Debug, Clone)]
pub struct HttpPersistenceConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Bearer credential issued by the auth collaborator.
    api_token: Secret<String>,
    pub timeout: Duration,
}

impl HttpPersistenceConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: Secret::new(api_token.into()),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

/// Assessment repository backed by the persistence API.
pub struct HttpAssessmentRepository {
    config: HttpPersistenceConfig,
    client: Client,
    classifier: Arc<Classifier>,
}

impl HttpAssessmentRepository {
    /// Creates the client.
    ///
    /// `classifier` fills in pattern and recommendations for stored records
    /// that predate them.
    pub fn new(
        config: HttpPersistenceConfig,
        classifier: Arc<Classifier>,
    ) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PersistenceError::Unavailable(format!("failed to build client: {}", e)))?;

        Ok(Self {
            config,
            client,
            classifier,
        })
    }

    fn assessments_url(&self) -> String {
        format!("{}/assessments", self.config.base_url)
    }

    fn assessment_url(&self, id: &AssessmentId) -> String {
        format!("{}/assessments/{}", self.config.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, PersistenceError> {
        request
            .bearer_auth(self.config.api_token())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PersistenceError::Unavailable(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    PersistenceError::Unavailable(format!("connection failed: {}", e))
                } else {
                    PersistenceError::Unavailable(e.to_string())
                }
            })
    }

    async fn check_status(response: Response) -> Result<Response, PersistenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Persistence API rejected request");
        Err(PersistenceError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json(response: Response) -> Result<JsonValue, PersistenceError> {
        response
            .json()
            .await
            .map_err(|e| PersistenceError::MalformedResponse(format!("invalid JSON body: {}", e)))
    }
}

#[async_trait]
impl AssessmentRepository for HttpAssessmentRepository {
    async fn create(&self, record: NewAssessment) -> Result<Assessment, PersistenceError> {
        let response = self
            .send(self.client.post(self.assessments_url()).json(&record))
            .await?;
        let body = Self::read_json(Self::check_status(response).await?).await?;
        let saved = decode_stored(&body, &self.classifier)?;

        tracing::info!(assessment_id = %saved.id(), "Assessment stored via persistence API");
        Ok(saved)
    }

    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, PersistenceError> {
        let response = self.send(self.client.get(self.assessment_url(id))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = Self::read_json(Self::check_status(response).await?).await?;
        decode_stored(&body, &self.classifier).map(Some)
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, PersistenceError> {
        let request = self
            .client
            .get(self.assessments_url())
            .query(&[("userId", user_id.as_str())]);
        let response = self.send(request).await?;
        let body = Self::read_json(Self::check_status(response).await?).await?;

        let mut assessments = decode_stored_list(&body, &self.classifier)?;
        assessments.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(assessments)
    }

    async fn delete(&self, user_id: &UserId, id: &AssessmentId) -> Result<(), PersistenceError> {
        let request = self
            .client
            .delete(self.assessment_url(id))
            .query(&[("userId", user_id.as_str())]);
        let response = self.send(request).await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
