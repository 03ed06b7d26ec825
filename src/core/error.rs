// Centralized error handling for the survey API

use crate::gateway::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors surfaced by the request handlers.
///
/// Every variant maps to a status code and a JSON body of the shape
/// `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Missing {0}")]
    MissingFields(&'static str),

    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::UserExists => StatusCode::BAD_REQUEST,
            // Login distinguishes unknown user from a wrong password. That
            // mirrors the deployed behavior and is a known information leak.
            ApiError::UserNotFound => StatusCode::UNAUTHORIZED,
            ApiError::IncorrectPassword => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Conflict => ApiError::UserExists,
            other => ApiError::Internal(other.to_string()),
        }
    }
}
