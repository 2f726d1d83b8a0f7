//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - register/login/logout/me
//! - [`members`] - member browsing and profiles
//! - [`groups`] - group browsing
//! - [`dashboard`] - member statistics overview
//! - [`analytics`] - reports (status, age, monthly engagement)
//! - [`onboarding`] - profile onboarding flow
//! - [`sync`] - remote synchronization trigger

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod groups;
pub mod health;
pub mod members;
pub mod onboarding;
pub mod sync;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(members::router())
        .merge(groups::router())
        .merge(dashboard::router())
        .merge(analytics::router())
        .merge(onboarding::router())
        .merge(sync::router())
        .merge(health::router())
}

/// Build the fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the front end runs on a different origin in development
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging
        .layer(TraceLayer::new_for_http())
        // ========== Application Middleware ==========
        // Request ID - unique id per request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Session check - runs before routes, injects CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_session,
        ))
}
