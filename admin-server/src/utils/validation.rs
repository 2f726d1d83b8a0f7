//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: member full name, group name, interest area, event name
pub const MAX_NAME_LEN: usize = 200;

/// Free-text answers: prayer requests, testimonies, preferences, notes
pub const MAX_TEXT_LEN: usize = 2000;

/// Short identifiers: phone, gender, marital status, faith stage
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Minimal email-shape check, the same rule the remote service applies
pub fn validate_email_shape(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::validation("email must not be empty"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation("email is too long"));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::with_message(
            shared::ErrorCode::InvalidEmail,
            "Formato de email inválido",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Maria", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "notes", MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "notes", MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(2001)), "notes", MAX_TEXT_LEN).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email_shape("maria@teste.com").is_ok());
        assert!(validate_email_shape("maria@teste").is_err());
        assert!(validate_email_shape("").is_err());
    }
}
