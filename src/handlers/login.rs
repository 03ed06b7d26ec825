use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::handlers::{non_empty_str, parse_json};
use crate::models::api::SuccessResponse;
use crate::utils::auth::check_password;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Authenticate a user
///
/// POST /login with `{"username": "...", "password": "..."}`
///
/// Unknown users and wrong passwords both return 401, with distinct messages
/// ("User not found" vs "Incorrect password") for behavior compatibility with
/// the deployed API.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Response, ApiError> {
    let payload = parse_json(&body)?;

    let (username, password) = match (
        non_empty_str(&payload, "username"),
        non_empty_str(&payload, "password"),
    ) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(ApiError::MissingFields("username or password")),
    };

    let user = state
        .gateway
        .find_user(username)
        .await
        .map_err(|e| {
            error!(username = %username, error = %e, "Login backend call failed");
            ApiError::Internal(e.to_string())
        })?;

    let Some(user) = user else {
        warn!(username = %username, "Login attempt for unknown user");
        return Err(ApiError::UserNotFound);
    };

    let matches = check_password(state.config.auth.mode, password, &user.password)
        .map_err(|e| {
            error!(username = %username, error = %e, "Password check failed");
            ApiError::Internal(e.to_string())
        })?;

    if !matches {
        warn!(username = %username, "Login attempt with wrong password");
        return Err(ApiError::IncorrectPassword);
    }

    info!(username = %username, "User logged in");

    Ok((StatusCode::OK, Json(SuccessResponse::ok())).into_response())
}
