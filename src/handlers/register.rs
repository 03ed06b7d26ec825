use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::gateway::GatewayError;
use crate::handlers::{non_empty_str, parse_json};
use crate::models::api::SuccessResponse;
use crate::models::user::User;
use crate::utils::auth::seal_password;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Register a new user
///
/// POST /register with `{"username": "...", "password": "..."}`
///
/// The insert relies on the backend unique constraint; a duplicate username
/// surfaces as 400 "User already exists" regardless of the supplied password.
pub async fn register_handler(
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

    let stored = seal_password(state.config.auth.mode, password).map_err(|e| {
        error!(error = %e, "Failed to seal password");
        ApiError::Internal(e.to_string())
    })?;

    let user = User::new(username, stored);

    match state.gateway.create_user_if_absent(&user).await {
        Ok(()) => {
            info!(username = %username, "User registered");

            Ok((StatusCode::OK, Json(SuccessResponse::ok())).into_response())
        }
        Err(GatewayError::Conflict) => {
            warn!(username = %username, "Registration rejected, username taken");
            Err(ApiError::UserExists)
        }
        Err(e) => {
            error!(username = %username, error = %e, "Registration backend call failed");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthMode;
    use crate::handlers::testing::{memory_state, read_error, read_json};
    use crate::models::api::SuccessResponse;

    #[tokio::test]
    async fn test_register_success() {
        let state = memory_state(AuthMode::Hashed);

        let response = register_handler(
            State(state.clone()),
            r#"{"username":"alice-1234","password":"hunter2"}"#.to_string(),
        )
        .await
        .unwrap();

        let (status, body) = read_json::<SuccessResponse>(response).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);

        // Stored form is a hash, not the plaintext secret
        let stored = state.gateway.find_user("alice-1234").await.unwrap().unwrap();
        assert_ne!(stored.password, "hunter2");
        assert!(stored.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_legacy_mode_stores_plaintext() {
        let state = memory_state(AuthMode::PlaintextLegacy);

        register_handler(
            State(state.clone()),
            r#"{"username":"alice-1234","password":"hunter2"}"#.to_string(),
        )
        .await
        .unwrap();

        let stored = state.gateway.find_user("alice-1234").await.unwrap().unwrap();
        assert_eq!(stored.password, "hunter2");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let state = memory_state(AuthMode::Hashed);

        register_handler(
            State(state.clone()),
            r#"{"username":"alice-1234","password":"hunter2"}"#.to_string(),
        )
        .await
        .unwrap();

        // Same username, different password: still rejected
        let err = register_handler(
            State(state),
            r#"{"username":"alice-1234","password":"other"}"#.to_string(),
        )
        .await
        .unwrap_err();

        let (status, error) = read_error(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "User already exists");
    }

    #[tokio::test]
    async fn test_register_invalid_json() {
        let state = memory_state(AuthMode::Hashed);

        let err = register_handler(State(state), "not json".to_string())
            .await
            .unwrap_err();

        let (status, error) = read_error(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Invalid JSON");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let state = memory_state(AuthMode::Hashed);

        for body in [
            r#"{"username":"alice-1234"}"#,
            r#"{"password":"hunter2"}"#,
            r#"{"username":"","password":"hunter2"}"#,
            r#"{}"#,
        ] {
            let err = register_handler(State(state.clone()), body.to_string())
                .await
                .unwrap_err();

            let (status, error) = read_error(err.into_response()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(error, "Missing username or password");
        }
    }
}
