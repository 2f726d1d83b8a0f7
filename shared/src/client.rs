//! DTOs for the admin server's own JSON API
//!
//! Shared here so CLI tooling and integration tests can talk to the server
//! with the same types the handlers use.

use serde::{Deserialize, Serialize};

use crate::models::SyncReport;

/// POST /api/auth/register body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// POST /api/auth/login body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticated user as stored in the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Register/login response envelope
///
/// `error` carries one of the fixed outcome codes (VALIDATION_ERROR,
/// INVALID_EMAIL, ...) when `success` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// GET /api/onboarding/status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub completed: bool,
}

/// POST /api/onboarding body (profile form answers)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub church_attendance_time: Option<String>,
    #[serde(default)]
    pub previous_churches: Option<String>,
    #[serde(default)]
    pub church_discovery: Option<String>,
    #[serde(default)]
    pub previous_participation: Option<String>,
    #[serde(default)]
    pub volunteer_areas: Option<String>,
    #[serde(default)]
    pub gifts_aptitudes: Option<String>,
    #[serde(default)]
    pub available_days: Option<String>,
    #[serde(default)]
    pub available_times: Option<String>,
    #[serde(default)]
    pub event_preference: Option<String>,
    #[serde(default)]
    pub community_interests: Option<String>,
    #[serde(default)]
    pub seeking_in_church: Option<String>,
    #[serde(default)]
    pub open_to_new_groups: Option<bool>,
    #[serde(default)]
    pub group_preferences: Option<String>,
    #[serde(default)]
    pub faith_stage: Option<String>,
    #[serde(default)]
    pub pastoral_care_interest: Option<bool>,
    #[serde(default)]
    pub faith_challenges: Option<String>,
}

/// POST /api/sync/inchurch response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncTriggerResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SyncReport>,
}
