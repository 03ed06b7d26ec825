use crate::core::config::BackendConfig;
use crate::gateway::GatewayError;
use crate::models::response::SurveyResponse;
use crate::models::user::User;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Adapter for a hosted document store exposed over an action-style HTTP API
/// (Atlas Data API compatible).
///
/// Users and responses are documents in two collections; the users collection
/// carries a unique secondary index on `username`. Each operation is a POST
/// to `{base}/action/<op>` authenticated with an `api-key` header.
pub struct DocumentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    database: String,
    users_collection: String,
    responses_collection: String,
}

#[derive(Deserialize)]
struct FindOneResult<T> {
    document: Option<T>,
}

#[derive(Deserialize)]
struct FindResult<T> {
    documents: Vec<T>,
}

impl DocumentStore {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            database: config.database.clone(),
            users_collection: config.users_table.clone(),
            responses_collection: config.responses_table.clone(),
        })
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}/action/{}", self.base_url, action)
    }

    async fn action(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .client
            .post(self.action_url(action))
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        // The unique index on username rejects duplicate inserts with a
        // duplicate-key error in the body.
        if is_duplicate_key(status.as_u16(), &body) {
            return Err(GatewayError::Conflict);
        }

        Err(GatewayError::Backend {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn create_user(&self, user: &User) -> Result<(), GatewayError> {
        self.action(
            "insertOne",
            json!({
                "database": self.database,
                "collection": self.users_collection,
                "document": user,
            }),
        )
        .await
        .map(|_| ())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<User>, GatewayError> {
        let response = self
            .action(
                "findOne",
                json!({
                    "database": self.database,
                    "collection": self.users_collection,
                    "filter": { "username": username },
                    "projection": { "_id": 0, "username": 1, "password": 1 },
                }),
            )
            .await?;

        let result: FindOneResult<User> = response.json().await?;
        Ok(result.document)
    }

    pub async fn create_response(&self, survey_response: &SurveyResponse) -> Result<(), GatewayError> {
        self.action(
            "insertOne",
            json!({
                "database": self.database,
                "collection": self.responses_collection,
                "document": survey_response,
            }),
        )
        .await
        .map(|_| ())
    }

    pub async fn list_responses(&self) -> Result<Vec<SurveyResponse>, GatewayError> {
        let response = self
            .action(
                "find",
                json!({
                    "database": self.database,
                    "collection": self.responses_collection,
                    "filter": {},
                    "projection": { "_id": 0, "username": 1, "timestamp": 1, "answers": 1 },
                }),
            )
            .await?;

        let result: FindResult<SurveyResponse> = response.json().await?;
        Ok(result.documents)
    }

    pub async fn delete_all_responses(&self) -> Result<(), GatewayError> {
        self.action(
            "deleteMany",
            json!({
                "database": self.database,
                "collection": self.responses_collection,
                "filter": {},
            }),
        )
        .await
        .map(|_| ())
    }
}

/// Duplicate-key rejections arrive as a client error whose body names the
/// violated index rather than as a dedicated status code.
fn is_duplicate_key(status: u16, body: &str) -> bool {
    (status == 400 || status == 409) && (body.contains("duplicate key") || body.contains("E11000"))
}
