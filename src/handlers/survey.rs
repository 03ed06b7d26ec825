use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::handlers::{non_empty_str, parse_json};
use crate::models::api::SuccessResponse;
use crate::models::response::{AnswerSheet, SurveyResponse};
use crate::survey::render::render_survey_form;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

/// Persist a survey response
///
/// POST /submit-survey with `{"username": "...", "answers": {...}}`
///
/// The server assigns the timestamp. Answer invariants (one choice per
/// single-choice question, three distinct ranks, ...) are enforced by the
/// client before submission and are not re-checked here.
pub async fn submit_survey_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Response, ApiError> {
    let payload = parse_json(&body)?;

    let username = non_empty_str(&payload, "username");
    let answers_value = payload.get("answers").filter(|value| !value.is_null());

    let (username, answers_value) = match (username, answers_value) {
        (Some(username), Some(answers_value)) => (username, answers_value),
        _ => return Err(ApiError::MissingFields("username or answers")),
    };

    let answers: AnswerSheet =
        serde_json::from_value(answers_value.clone()).map_err(|_| ApiError::InvalidJson)?;

    let response = SurveyResponse::new(username, answers);

    state.gateway.create_response(&response).await.map_err(|e| {
        error!(username = %username, error = %e, "Failed to store survey response");
        ApiError::Internal(e.to_string())
    })?;

    info!(username = %username, "Survey response stored");

    Ok((StatusCode::OK, Json(SuccessResponse::ok())).into_response())
}

/// Serve the rendered survey form fragment
///
/// GET /survey
pub async fn survey_form_handler() -> Html<String> {
    Html(render_survey_form())
}
