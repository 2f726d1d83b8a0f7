//! Dashboard API Handlers

use axum::{Json, extract::State};
use chrono::Duration;
use serde::Serialize;
use shared::models::{GroupWithMemberCount, MemberStatus};

use crate::core::ServerState;
use crate::db::repository::{group, member};
use crate::utils::AppResult;

/// Entry window counted as "recent" (days)
const RECENT_ENTRY_DAYS: i64 = 30;

/// Number of top groups shown
const TOP_GROUPS: i64 = 5;

/// Dashboard overview
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_members: i64,
    pub active_members: i64,
    pub inactive_members: i64,
    pub visitors: i64,
    pub new_members: i64,
    pub recent_members: i64,
    pub active_groups: Vec<GroupWithMemberCount>,
}

/// GET /api/dashboard - member statistics overview
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<DashboardResponse>> {
    let total_members = member::count_total(&state.pool).await?;

    let mut active_members = 0;
    let mut inactive_members = 0;
    let mut visitors = 0;
    let mut new_members = 0;
    for row in member::count_by_status(&state.pool).await? {
        match row.member_status {
            MemberStatus::Active => active_members = row.count,
            MemberStatus::Inactive => inactive_members = row.count,
            MemberStatus::Visitor => visitors = row.count,
            MemberStatus::New => new_members = row.count,
        }
    }

    let since = chrono::Utc::now().date_naive() - Duration::days(RECENT_ENTRY_DAYS);
    let recent_members = member::count_recent_entries(&state.pool, since).await?;

    let active_groups = group::top_by_member_count(&state.pool, TOP_GROUPS).await?;

    Ok(Json(DashboardResponse {
        total_members,
        active_members,
        inactive_members,
        visitors,
        new_members,
        recent_members,
        active_groups,
    }))
}
