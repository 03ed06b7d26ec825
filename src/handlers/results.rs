use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{ResultsResponse, SuccessResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

/// List every stored survey response
///
/// GET /get-results
///
/// Returns the full result set; there is no pagination.
pub async fn get_results_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let results = state.gateway.list_responses().await.map_err(|e| {
        error!(error = %e, "Failed to list survey responses");
        ApiError::Internal(e.to_string())
    })?;

    info!(count = results.len(), "Survey responses listed");

    Ok((StatusCode::OK, Json(ResultsResponse { results })).into_response())
}

/// Delete all stored survey responses
///
/// POST or DELETE /clear-results
///
/// Irreversible bulk delete; there is no confirmation step.
pub async fn clear_results_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    state.gateway.delete_all_responses().await.map_err(|e| {
        error!(error = %e, "Failed to clear survey responses");
        ApiError::Internal(e.to_string())
    })?;

    info!("All survey responses cleared");

    Ok((StatusCode::OK, Json(SuccessResponse::ok())).into_response())
}
