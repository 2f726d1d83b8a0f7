//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member status enum
///
/// Stored as lowercase text, matching the values used by the remote service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum MemberStatus {
    Active,
    Inactive,
    Visitor,
    New,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Visitor
    }
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Visitor => "visitor",
            Self::New => "new",
        }
    }
}

/// Member entity
///
/// Local profile record keyed by the remote `inchurch_id`. Carries the full
/// onboarding field set; only the synchronizer and the onboarding flow write
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    /// Remote record identifier (unique)
    pub inchurch_id: String,

    // Demographics and contact
    pub full_name: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,

    // Participation history
    pub member_status: MemberStatus,
    pub entry_date: Option<NaiveDate>,
    pub last_attendance: Option<NaiveDate>,

    // Preferences
    pub contact_preference: Option<String>,
    pub church_discovery: Option<String>,
    pub event_preference: Option<String>,
    pub availability_notes: Option<String>,

    // Engagement indicators
    pub last_activity: Option<i64>,
    pub engagement_score: i64,

    // Free text collected during onboarding
    pub gifts_aptitudes: Option<String>,
    pub prayer_requests: Option<String>,
    pub testimonies: Option<String>,

    // Onboarding answers
    pub church_attendance_time: Option<String>,
    pub previous_churches: Option<String>,
    pub previous_participation: Option<String>,
    pub volunteer_interest: bool,
    pub volunteer_areas: Option<String>,
    pub available_days: Option<String>,
    pub available_times: Option<String>,
    pub community_interests: Option<String>,
    pub seeking_in_church: Option<String>,
    pub open_to_new_groups: bool,
    pub group_preferences: Option<String>,
    pub faith_stage: Option<String>,
    pub pastoral_care_interest: bool,
    pub faith_challenges: Option<String>,
    pub onboarding_completed: bool,

    pub created_at: i64,
    pub updated_at: i64,
}

/// Upsert payload used by the synchronizer and the onboarding flow
///
/// Everything the mapper produces from a remote record. Fields absent from
/// the remote payload stay None and are left untouched on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpsert {
    pub inchurch_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub member_status: Option<MemberStatus>,
    pub entry_date: Option<NaiveDate>,
    pub last_attendance: Option<NaiveDate>,
    pub engagement_score: Option<i64>,
    pub gifts_aptitudes: Option<String>,
    pub prayer_requests: Option<String>,
    pub testimonies: Option<String>,
    pub church_attendance_time: Option<String>,
    pub previous_churches: Option<String>,
    pub previous_participation: Option<String>,
    pub volunteer_interest: Option<bool>,
    pub volunteer_areas: Option<String>,
    pub available_days: Option<String>,
    pub available_times: Option<String>,
    pub community_interests: Option<String>,
    pub seeking_in_church: Option<String>,
    pub open_to_new_groups: Option<bool>,
    pub group_preferences: Option<String>,
    pub faith_stage: Option<String>,
    pub pastoral_care_interest: Option<bool>,
    pub faith_challenges: Option<String>,
}

/// Compact member row for list/search views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MemberSummary {
    pub id: i64,
    pub inchurch_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub member_status: MemberStatus,
    pub engagement_score: i64,
    pub entry_date: Option<NaiveDate>,
}
