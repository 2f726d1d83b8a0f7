//! Wire types for the remote API
//!
//! The remote service speaks camelCase JSON; unknown fields are ignored and
//! most fields are optional because the records it returns are sparse.

use serde::{Deserialize, Serialize};

/// Account record returned by the auth/user endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of a successful register/login response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthApiResponse {
    #[serde(default)]
    pub user: Option<RemoteUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `/auth/check-email/{email}` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailAvailability {
    #[serde(default)]
    pub available: bool,
}

/// `/users/exists/{email}` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserExists {
    #[serde(default)]
    pub exists: bool,
}

/// Interest entry attached to a remote member record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteInterest {
    pub name: String,
    #[serde(default = "default_interest_level")]
    pub level: i64,
}

fn default_interest_level() -> i64 {
    1
}

/// Group participation entry attached to a remote member record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteParticipation {
    pub group_name: String,
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_true")]
    pub is_current: bool,
}

fn default_true() -> bool {
    true
}

/// Member record as served by the remote listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMember {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub member_status: Option<String>,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub last_attendance: Option<String>,
    #[serde(default)]
    pub skills_gifts: Option<String>,
    #[serde(default)]
    pub prayer_requests: Option<String>,
    #[serde(default)]
    pub testimonies: Option<String>,
    #[serde(default)]
    pub volunteer_area: Option<String>,
    #[serde(default)]
    pub faith_stage: Option<String>,
    #[serde(default)]
    pub attendance_count: i64,
    #[serde(default)]
    pub interests: Vec<RemoteInterest>,
    #[serde(default)]
    pub participations: Vec<RemoteParticipation>,
}

/// One page of the paginated member listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMemberPage {
    #[serde(default)]
    pub members: Vec<RemoteMember>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub has_more: bool,
}
