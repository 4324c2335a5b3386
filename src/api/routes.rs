//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `POST /` - Linear webhook intake
/// - `GET /health` - Health check
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added
/// runs first): request ID first, then logging so every log line
/// carries the ID.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::webhook::receive_webhook))
        .route("/health", get(handlers::health::health_check))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
