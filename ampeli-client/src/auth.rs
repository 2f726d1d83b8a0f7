//! Authentication operations
//!
//! `register_user` and `login_user` run their precondition checks locally and
//! only contact the remote service when the input is plausible. Every outcome
//! is normalized into an [`AuthOutcome`] envelope carrying one of a fixed set
//! of codes, so callers never branch on error message text.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ClientError;
use crate::http::AmpeliClient;
use crate::types::{AuthApiResponse, EmailAvailability, RemoteUser};

/// Fixed outcome codes for the auth operations
///
/// Serialized in SCREAMING_SNAKE_CASE, the contract shared with the web
/// front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorKind {
    ValidationError,
    InvalidEmail,
    WeakPassword,
    UserExists,
    InvalidCredentials,
    UserNotFound,
    RateLimited,
    ServiceUnavailable,
    ServerError,
    ConnectionError,
    Unknown,
}

impl AuthErrorKind {
    /// The wire code for this outcome
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::UserExists => "USER_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RateLimited => "RATE_LIMITED",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServerError => "SERVER_ERROR",
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Classify a transport error for the registration flow
    fn for_register(err: &ClientError) -> (Self, &'static str) {
        match err {
            ClientError::Conflict(_) => (Self::UserExists, "Este email já está cadastrado"),
            ClientError::BadRequest(_) => (Self::ValidationError, "Dados inválidos fornecidos"),
            ClientError::ServiceUnavailable => (
                Self::ServiceUnavailable,
                "Serviço temporariamente indisponível. Tente novamente em alguns minutos.",
            ),
            ClientError::Server { .. } => (
                Self::ServerError,
                "Erro interno do servidor. Tente novamente mais tarde.",
            ),
            _ => (
                Self::ConnectionError,
                "Erro de conexão. Verifique sua internet e tente novamente.",
            ),
        }
    }

    /// Classify a transport error for the login flow
    fn for_login(err: &ClientError) -> (Self, &'static str) {
        match err {
            ClientError::Unauthorized => (Self::InvalidCredentials, "Email ou senha incorretos"),
            ClientError::NotFound(_) => (Self::UserNotFound, "Usuário não encontrado"),
            ClientError::RateLimited => (
                Self::RateLimited,
                "Muitas tentativas de login. Tente novamente em alguns minutos.",
            ),
            ClientError::ServiceUnavailable => (
                Self::ServiceUnavailable,
                "Serviço temporariamente indisponível. Tente novamente em alguns minutos.",
            ),
            ClientError::Server { .. } => (
                Self::ServerError,
                "Erro interno do servidor. Tente novamente mais tarde.",
            ),
            _ => (
                Self::ConnectionError,
                "Erro de conexão. Verifique sua internet e tente novamente.",
            ),
        }
    }
}

/// Normalized result of a register/login attempt
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RemoteUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AuthErrorKind>,
    pub message: String,
}

impl AuthOutcome {
    fn ok(user: Option<RemoteUser>, token: Option<String>, message: &str) -> Self {
        Self {
            success: true,
            user,
            token,
            error: None,
            message: message.to_string(),
        }
    }

    fn err(kind: AuthErrorKind, message: &str) -> Self {
        Self {
            success: false,
            user: None,
            token: None,
            error: Some(kind),
            message: message.to_string(),
        }
    }
}

/// Minimal email-shape check used by the remote service itself
fn email_looks_valid(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

impl AmpeliClient {
    /// Register a new user
    ///
    /// Local checks (required fields, email shape, password length) run
    /// before any network call.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AuthOutcome {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return AuthOutcome::err(
                AuthErrorKind::ValidationError,
                "Nome, email e senha são obrigatórios",
            );
        }

        if !email_looks_valid(email) {
            return AuthOutcome::err(AuthErrorKind::InvalidEmail, "Formato de email inválido");
        }

        if password.len() < 6 {
            return AuthOutcome::err(
                AuthErrorKind::WeakPassword,
                "Senha deve ter pelo menos 6 caracteres",
            );
        }

        let mut body = json!({
            "name": name,
            "email": email,
            "password": password,
        });
        if let Some(phone) = phone {
            body["phone"] = json!(phone);
        }

        match self.post::<AuthApiResponse, _>("/auth/register", &body).await {
            Ok(resp) => AuthOutcome::ok(resp.user, resp.token, "Usuário registrado com sucesso"),
            Err(e) => {
                let (kind, message) = AuthErrorKind::for_register(&e);
                tracing::warn!(error = %e, code = kind.as_code(), "Registration failed");
                AuthOutcome::err(kind, message)
            }
        }
    }

    /// Log a user in
    pub async fn login_user(&self, email: &str, password: &str) -> AuthOutcome {
        if email.is_empty() || password.is_empty() {
            return AuthOutcome::err(
                AuthErrorKind::ValidationError,
                "Email e senha são obrigatórios",
            );
        }

        if !email_looks_valid(email) {
            return AuthOutcome::err(AuthErrorKind::InvalidEmail, "Formato de email inválido");
        }

        let body = json!({
            "email": email,
            "password": password,
        });

        match self.post::<AuthApiResponse, _>("/auth/login", &body).await {
            Ok(resp) => AuthOutcome::ok(resp.user, resp.token, "Login realizado com sucesso"),
            Err(e) => {
                let (kind, message) = AuthErrorKind::for_login(&e);
                tracing::warn!(error = %e, code = kind.as_code(), "Login failed");
                AuthOutcome::err(kind, message)
            }
        }
    }

    /// Check a user's status on the remote service
    pub async fn check_user_status(&self, user_id: i64) -> crate::ClientResult<Value> {
        self.get(&format!("/auth/status/{}", user_id)).await
    }

    /// Check whether an email is still available
    ///
    /// Assumes available when the API cannot be reached.
    pub async fn check_email_availability(&self, email: &str) -> bool {
        match self
            .get::<EmailAvailability>(&format!("/auth/check-email/{}", email))
            .await
        {
            Ok(resp) => resp.available,
            Err(e) => {
                tracing::debug!(error = %e, "Email availability check failed, assuming available");
                true
            }
        }
    }

    /// Change a user's password
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> crate::ClientResult<Value> {
        let body = json!({
            "userId": user_id,
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        self.post("/auth/change-password", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    fn client() -> AmpeliClient {
        // Base URL is never contacted in these tests; the precondition
        // checks return before any request is built.
        AmpeliClient::new(&ClientConfig::new("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_register_empty_fields_is_validation_error() {
        let outcome = client().register_user("", "", "", None).await;
        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(AuthErrorKind::ValidationError));
        assert_eq!(outcome.message, "Nome, email e senha são obrigatórios");
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let outcome = client()
            .register_user("João", "email-invalido", "123456", None)
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(AuthErrorKind::InvalidEmail));
    }

    #[tokio::test]
    async fn test_register_weak_password() {
        let outcome = client()
            .register_user("João", "joao@teste.com", "123", None)
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(AuthErrorKind::WeakPassword));
    }

    #[tokio::test]
    async fn test_login_empty_fields_is_validation_error() {
        let outcome = client().login_user("", "").await;
        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(AuthErrorKind::ValidationError));
    }

    #[tokio::test]
    async fn test_login_invalid_email() {
        let outcome = client().login_user("email-invalido", "senha123").await;
        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(AuthErrorKind::InvalidEmail));
    }

    #[test]
    fn test_email_shape_check() {
        assert!(email_looks_valid("joao@teste.com"));
        assert!(!email_looks_valid("joao@teste"));
        assert!(!email_looks_valid("joao.teste.com"));
        assert!(!email_looks_valid(""));
    }

    #[test]
    fn test_register_error_classification() {
        let (kind, _) = AuthErrorKind::for_register(&ClientError::Conflict("dup".into()));
        assert_eq!(kind, AuthErrorKind::UserExists);

        let (kind, _) = AuthErrorKind::for_register(&ClientError::BadRequest("bad".into()));
        assert_eq!(kind, AuthErrorKind::ValidationError);

        let (kind, _) = AuthErrorKind::for_register(&ClientError::ServiceUnavailable);
        assert_eq!(kind, AuthErrorKind::ServiceUnavailable);

        let (kind, _) = AuthErrorKind::for_register(&ClientError::Server {
            status: 500,
            body: String::new(),
        });
        assert_eq!(kind, AuthErrorKind::ServerError);
    }

    #[test]
    fn test_login_error_classification() {
        let (kind, _) = AuthErrorKind::for_login(&ClientError::Unauthorized);
        assert_eq!(kind, AuthErrorKind::InvalidCredentials);

        let (kind, _) = AuthErrorKind::for_login(&ClientError::NotFound("no user".into()));
        assert_eq!(kind, AuthErrorKind::UserNotFound);

        let (kind, _) = AuthErrorKind::for_login(&ClientError::RateLimited);
        assert_eq!(kind, AuthErrorKind::RateLimited);
    }

    #[test]
    fn test_outcome_serializes_error_as_code() {
        let outcome = AuthOutcome::err(AuthErrorKind::ValidationError, "msg");
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"error\":\"VALIDATION_ERROR\""));
        assert!(json.contains("\"success\":false"));
    }
}
