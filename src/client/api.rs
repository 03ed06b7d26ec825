use crate::models::api::{ResultsResponse, SuccessResponse};
use crate::models::response::{AnswerSheet, SurveyResponse};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::time::Duration;

/// Shown when a response cannot be parsed or the request itself fails,
/// distinct from server-reported errors.
pub const GENERIC_FAILURE: &str = "请求失败，请稍后再试";

/// API client for the survey endpoints.
///
/// Errors are user-visible message strings: the server's `error` field when
/// one arrives, an operation-specific fallback when the server gives none,
/// and [`GENERIC_FAILURE`] when the request or response itself fails.
pub struct SurveyApi {
    client: reqwest::Client,
    base_url: String,
}

impl SurveyApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), String> {
        self.post_expecting_success(
            "/register",
            json!({ "username": username, "password": password }),
            "注册失败",
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        self.post_expecting_success(
            "/login",
            json!({ "username": username, "password": password }),
            "登录失败",
        )
        .await
    }

    pub async fn submit_survey(
        &self,
        username: &str,
        answers: &AnswerSheet,
    ) -> Result<(), String> {
        self.post_expecting_success(
            "/submit-survey",
            json!({ "username": username, "answers": answers }),
            "提交失败",
        )
        .await
    }

    pub async fn fetch_results(&self) -> Result<Vec<SurveyResponse>, String> {
        let response = self
            .client
            .get(self.url("/get-results"))
            .send()
            .await
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        if !response.status().is_success() {
            return Err(error_message(response, GENERIC_FAILURE).await);
        }

        let results: ResultsResponse = response
            .json()
            .await
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        Ok(results.results)
    }

    pub async fn clear_results(&self) -> Result<(), String> {
        let response = self
            .client
            .post(self.url("/clear-results"))
            .send()
            .await
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        if !response.status().is_success() {
            return Err(error_message(response, GENERIC_FAILURE).await);
        }

        Ok(())
    }

    async fn post_expecting_success(
        &self,
        path: &str,
        body: Value,
        fallback: &str,
    ) -> Result<(), String> {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        if !response.status().is_success() {
            return Err(error_message(response, fallback).await);
        }

        // The body is `{"success":true}`; an unparsable body still counts as
        // a failure the user should retry
        response
            .json::<SuccessResponse>()
            .await
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        Ok(())
    }
}

/// Pull the server's `error` field out of a failed response, falling back to
/// the operation message when the body has none.
async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string(),
        Err(_) => GENERIC_FAILURE.to_string(),
    }
}
