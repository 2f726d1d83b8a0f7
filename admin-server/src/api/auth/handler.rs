//! Authentication Handlers
//!
//! Register and login pass through to the remote API; a successful login
//! creates a server-side session whose opaque token is returned to the
//! client. Logout drops the session.

use axum::{Extension, Json, extract::State};
use http::HeaderMap;

use ampeli_client::{AuthOutcome, RemoteUser};
use shared::client::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::ApiResponse;

fn session_user(user: &RemoteUser) -> SessionUser {
    SessionUser {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
    }
}

fn failure_response(outcome: &AuthOutcome) -> AuthResponse {
    AuthResponse {
        success: false,
        error: outcome.error.map(|kind| kind.as_code().to_string()),
        message: outcome.message.clone(),
        user: None,
        token: None,
    }
}

/// POST /api/auth/register
///
/// Passes through to the remote service; local validation (required fields,
/// email shape, password length) short-circuits inside the client.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Json<AuthResponse> {
    let outcome = state
        .api
        .register_user(&req.name, &req.email, &req.password, req.phone.as_deref())
        .await;

    if !outcome.success {
        return Json(failure_response(&outcome));
    }

    tracing::info!(email = %req.email, "User registered");

    Json(AuthResponse {
        success: true,
        error: None,
        message: outcome.message,
        user: outcome.user.as_ref().map(session_user),
        token: None,
    })
}

/// POST /api/auth/login
///
/// On success the user id/email/name and the remote token are stored in a
/// server-side session; the response carries the opaque session token.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Json<AuthResponse> {
    let outcome = state.api.login_user(&req.email, &req.password).await;

    if !outcome.success {
        return Json(failure_response(&outcome));
    }

    let user = match &outcome.user {
        Some(user) => session_user(user),
        None => {
            tracing::error!("Login succeeded but the remote response carried no user");
            return Json(AuthResponse {
                success: false,
                error: Some("UNKNOWN".to_string()),
                message: "Erro desconhecido".to_string(),
                user: None,
                token: None,
            });
        }
    };

    let session = state.sessions.create(
        user.id.clone(),
        user.email.clone(),
        user.name.clone(),
        outcome.token.clone(),
    );

    tracing::info!(user_id = %user.id, email = %user.email, "User logged in");

    Json(AuthResponse {
        success: true,
        error: None,
        message: outcome.message,
        user: Some(user),
        token: Some(session.token),
    })
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> Json<ApiResponse<()>> {
    let token = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        state.sessions.remove(token);
    }

    tracing::info!(user_id = %user.id, "User logged out");

    Json(ApiResponse::ok())
}

/// GET /api/auth/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<SessionUser> {
    Json(user.session_user())
}
