//! Group & Participation Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Group type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum GroupType {
    Cell,
    Ministry,
    Course,
    Group,
}

impl Default for GroupType {
    fn default() -> Self {
        Self::Group
    }
}

impl GroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::Ministry => "ministry",
            Self::Course => "course",
            Self::Group => "group",
        }
    }
}

/// Role of a member inside a group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ParticipationRole {
    Member,
    Leader,
    Coordinator,
    Volunteer,
}

impl Default for ParticipationRole {
    fn default() -> Self {
        Self::Member
    }
}

/// Group entity (cell / ministry / course / generic group)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub group_type: GroupType,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Group with its current member count (for list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GroupWithMemberCount {
    pub id: i64,
    pub name: String,
    pub group_type: GroupType,
    pub description: Option<String>,
    pub is_active: bool,
    pub member_count: i64,
}

/// Participation join entity (member <-> group)
///
/// The schema does not enforce one row per (member, group); the synchronizer
/// resolves duplicates by get-or-create-then-update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MemberParticipation {
    pub id: i64,
    pub member_id: i64,
    pub group_id: i64,
    pub role: ParticipationRole,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

/// Participation with group fields (for member detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ParticipationDetail {
    pub id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub group_type: GroupType,
    pub role: ParticipationRole,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

/// Member row inside a group (for group detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GroupMemberRow {
    pub member_id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub role: ParticipationRole,
    pub start_date: NaiveDate,
}
