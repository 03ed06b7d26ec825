use crate::core::config::BackendConfig;
use crate::gateway::GatewayError;
use crate::models::response::SurveyResponse;
use crate::models::user::User;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;

/// Adapter for a PostgREST-style tabular store (Supabase-compatible).
///
/// Rows live in two tables: a users table keyed by username (with a unique
/// constraint) and an append-only responses table with an integer primary
/// key. Every call authenticates with the service key via the `apikey` and
/// `Authorization` headers.
pub struct TabularStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    users_table: String,
    responses_table: String,
}

impl TabularStore {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            users_table: config.users_table.clone(),
            responses_table: config.responses_table.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    pub async fn create_user(&self, user: &User) -> Result<(), GatewayError> {
        let response = self
            .authed(self.client.post(self.table_url(&self.users_table)))
            .header("Prefer", "return=minimal")
            .json(user)
            .send()
            .await?;

        // PostgREST reports a unique-constraint violation as 409
        if response.status() == StatusCode::CONFLICT {
            return Err(GatewayError::Conflict);
        }

        check_status(response).await.map(|_| ())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<User>, GatewayError> {
        let filter = format!("eq.{username}");
        let response = self
            .authed(self.client.get(self.table_url(&self.users_table)))
            .query(&[
                ("username", filter.as_str()),
                ("select", "username,password"),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let mut rows: Vec<User> = response.json().await?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    pub async fn create_response(&self, survey_response: &SurveyResponse) -> Result<(), GatewayError> {
        let response = self
            .authed(self.client.post(self.table_url(&self.responses_table)))
            .header("Prefer", "return=minimal")
            .json(survey_response)
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }

    pub async fn list_responses(&self) -> Result<Vec<SurveyResponse>, GatewayError> {
        let response = self
            .authed(self.client.get(self.table_url(&self.responses_table)))
            .query(&[("select", "username,timestamp,answers")])
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_all_responses(&self) -> Result<(), GatewayError> {
        // PostgREST refuses an unfiltered DELETE; id > 0 matches every row
        // under the integer primary key.
        let response = self
            .authed(self.client.delete(self.table_url(&self.responses_table)))
            .query(&[("id", "gt.0")])
            .header("Prefer", "return=minimal")
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }
}

/// Map a non-2xx backend response to `GatewayError::Backend`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Backend {
        status: status.as_u16(),
        body,
    })
}
