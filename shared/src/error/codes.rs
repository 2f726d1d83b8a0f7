//! Unified error codes for the Ampeli workspace
//!
//! This module defines all error codes used across the admin server and the
//! remote API client. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Remote API errors
//! - 8xxx: Member domain errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1003,
    /// Session token is invalid
    SessionInvalid = 1004,
    /// User not found on the remote service
    UserNotFound = 1005,
    /// Email is already registered
    UserExists = 1006,
    /// Email format is invalid
    InvalidEmail = 1007,
    /// Password does not meet the minimum length
    WeakPassword = 1008,
    /// Too many attempts, slow down
    RateLimited = 1009,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Remote API ====================
    /// Remote service is temporarily unavailable
    RemoteUnavailable = 3001,
    /// Remote service returned a server error
    RemoteServerError = 3002,
    /// Remote service rejected the request
    RemoteRejected = 3003,
    /// Could not reach the remote service
    ConnectionFailed = 3004,
    /// Remote service returned an unparsable response
    InvalidResponse = 3005,

    // ==================== 8xxx: Member domain ====================
    /// Member not found
    MemberNotFound = 8001,
    /// Member inchurch_id already exists
    MemberExternalIdExists = 8002,
    /// Group not found
    GroupNotFound = 8101,
    /// Participation not found
    ParticipationNotFound = 8201,
    /// Interest area not found
    InterestAreaNotFound = 8301,
    /// Attendance already recorded for this member/event/date
    AttendanceDuplicate = 8401,
    /// Onboarding has not been completed
    OnboardingIncomplete = 8501,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Synchronization failed
    SyncFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::SessionInvalid => "Session token is invalid",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserExists => "Email is already registered",
            ErrorCode::InvalidEmail => "Invalid email format",
            ErrorCode::WeakPassword => "Password must be at least 6 characters",
            ErrorCode::RateLimited => "Too many attempts",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Remote API
            ErrorCode::RemoteUnavailable => "Remote service temporarily unavailable",
            ErrorCode::RemoteServerError => "Remote service error",
            ErrorCode::RemoteRejected => "Remote service rejected the request",
            ErrorCode::ConnectionFailed => "Could not reach the remote service",
            ErrorCode::InvalidResponse => "Unparsable response from the remote service",

            // Member domain
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::MemberExternalIdExists => "Member inchurch_id already exists",
            ErrorCode::GroupNotFound => "Group not found",
            ErrorCode::ParticipationNotFound => "Participation not found",
            ErrorCode::InterestAreaNotFound => "Interest area not found",
            ErrorCode::AttendanceDuplicate => "Attendance already recorded",
            ErrorCode::OnboardingIncomplete => "Onboarding has not been completed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SyncFailed => "Synchronization failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::SessionExpired),
            1004 => Ok(ErrorCode::SessionInvalid),
            1005 => Ok(ErrorCode::UserNotFound),
            1006 => Ok(ErrorCode::UserExists),
            1007 => Ok(ErrorCode::InvalidEmail),
            1008 => Ok(ErrorCode::WeakPassword),
            1009 => Ok(ErrorCode::RateLimited),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Remote API
            3001 => Ok(ErrorCode::RemoteUnavailable),
            3002 => Ok(ErrorCode::RemoteServerError),
            3003 => Ok(ErrorCode::RemoteRejected),
            3004 => Ok(ErrorCode::ConnectionFailed),
            3005 => Ok(ErrorCode::InvalidResponse),

            // Member domain
            8001 => Ok(ErrorCode::MemberNotFound),
            8002 => Ok(ErrorCode::MemberExternalIdExists),
            8101 => Ok(ErrorCode::GroupNotFound),
            8201 => Ok(ErrorCode::ParticipationNotFound),
            8301 => Ok(ErrorCode::InterestAreaNotFound),
            8401 => Ok(ErrorCode::AttendanceDuplicate),
            8501 => Ok(ErrorCode::OnboardingIncomplete),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::SyncFailed),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
