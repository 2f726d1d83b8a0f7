//! Authentication middleware
//!
//! Resolves the `Authorization: Bearer <token>` header against the session
//! store and injects [`CurrentUser`] into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppError;

/// Session middleware - requires a logged-in user
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (fall through to 404)
/// - `/api/auth/login`, `/api/auth/register` (login endpoints)
/// - `/api/health`
///
/// # Errors
///
/// | Failure | HTTP status |
/// |---------|-------------|
/// | Missing Authorization header | 401 NotAuthenticated |
/// | Malformed header | 401 SessionInvalid |
/// | Unknown or expired token | 401 SessionExpired |
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip authentication (they 404 normally)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Public API routes skip authentication
    let is_public_api_route = path == "/api/auth/login"
        || path == "/api/auth/register"
        || path == "/api/health";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => header
            .strip_prefix("Bearer ")
            .ok_or_else(AppError::invalid_session)?,
        None => {
            tracing::warn!(uri = %req.uri(), "Request without session token");
            return Err(AppError::unauthorized());
        }
    };

    match state.sessions.get(token) {
        Some(session) => {
            let user = CurrentUser::from(&session);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Unknown or expired session token");
            Err(AppError::session_expired())
        }
    }
}
