//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY  /login`   - Employee login (`OPTIONS` answered by the CORS middleware)
//! - `GET  /health`  - Liveness check
//!
//! # Middleware
//!
//! - **CORS** - Pre-flight acknowledgement and headers on every response
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, login_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::routing::{any, get};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
///
/// Used directly by integration tests; [`app_router`] wraps it for serving.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/login", any(login_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(state.clone(), cors::layer))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
