// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::method_not_allowed;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Survey API; every route answers unsupported methods with 405
        .route(
            "/register",
            post(crate::handlers::register::register_handler).fallback(method_not_allowed),
        )
        .route(
            "/login",
            post(crate::handlers::login::login_handler).fallback(method_not_allowed),
        )
        .route(
            "/submit-survey",
            post(crate::handlers::survey::submit_survey_handler).fallback(method_not_allowed),
        )
        .route(
            "/get-results",
            get(crate::handlers::results::get_results_handler).fallback(method_not_allowed),
        )
        .route(
            "/clear-results",
            post(crate::handlers::results::clear_results_handler)
                .delete(crate::handlers::results::clear_results_handler)
                .fallback(method_not_allowed),
        )
        // Rendered survey form and health probe
        .route("/survey", get(crate::handlers::survey::survey_form_handler))
        .route("/health", get(crate::handlers::health::health_handler))
        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)
        .with_state(state)
}
