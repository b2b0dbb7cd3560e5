//! Server endpoints the client talks to.

use async_trait::async_trait;
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use mindgrow_core::goals::{Goal, GoalProgressPatch, GoalSummary, NewGoalInput};
use mindgrow_core::journal::{JournalEntry, NewJournalEntryInput};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

#[async_trait]
pub trait GoalApi: Send + Sync {
    async fn list_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, input: &NewGoalInput) -> Result<Goal>;
    /// `Ok(None)` when the server has no goal with `goal_id`.
    async fn patch_goal(&self, goal_id: &str, patch: GoalProgressPatch) -> Result<Option<Goal>>;
    async fn goal_summary(&self) -> Result<GoalSummary>;
}

#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<JournalEntry>>;
    async fn create_entry(&self, input: &NewJournalEntryInput) -> Result<JournalEntry>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// reqwest-backed client for the MindGrow HTTP API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("Request failed: {}", body));
            return Err(ClientError::api(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            ClientError::from(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }
}

#[async_trait]
impl GoalApi for HttpApiClient {
    async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.get("/goals").await
    }

    async fn create_goal(&self, input: &NewGoalInput) -> Result<Goal> {
        self.post("/goals", input).await
    }

    async fn patch_goal(&self, goal_id: &str, patch: GoalProgressPatch) -> Result<Option<Goal>> {
        let response = self
            .client
            .patch(self.url(&format!("/goals/{}", goal_id)))
            .json(&patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn goal_summary(&self) -> Result<GoalSummary> {
        self.get("/goals/summary").await
    }
}

#[async_trait]
impl JournalApi for HttpApiClient {
    async fn list_entries(&self) -> Result<Vec<JournalEntry>> {
        self.get("/journals").await
    }

    async fn create_entry(&self, input: &NewJournalEntryInput) -> Result<JournalEntry> {
        self.post("/journals", input).await
    }
}
