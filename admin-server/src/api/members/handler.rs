//! Member API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use shared::models::{
    AttendanceRecord, InterestDetail, Member, MemberStatus, MemberSummary, ParticipationDetail,
};

use crate::core::ServerState;
use crate::db::repository::member::MemberListFilter;
use crate::db::repository::participation::GroupTypeCount;
use crate::db::repository::{attendance, interest, member, participation};
use crate::utils::{AppError, AppResult};

const PAGE_SIZE: u32 = 20;

/// Attendance history window for the detail view (days)
const RECENT_ATTENDANCE_DAYS: i64 = 90;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<MemberStatus>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

/// Paginated member listing
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberSummary>,
    pub page: u32,
    pub total: i64,
    pub total_pages: i64,
}

/// Member detail response (member + relations)
#[derive(Debug, Serialize)]
pub struct MemberDetail {
    #[serde(flatten)]
    pub member: Member,
    pub current_participations: Vec<ParticipationDetail>,
    pub past_participations: Vec<ParticipationDetail>,
    pub interests: Vec<InterestDetail>,
    pub recent_attendances: Vec<AttendanceRecord>,
}

/// Member profile response (engagement statistics)
#[derive(Debug, Serialize)]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub total_attendances: i64,
    pub total_events: i64,
    pub attendance_rate: f64,
    pub participations_by_type: Vec<GroupTypeCount>,
}

/// GET /api/members - list with status filter, search and pagination
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MemberListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let filter = MemberListFilter {
        status: query.status,
        search: query.search.clone().filter(|s| !s.trim().is_empty()),
        page,
        page_size: PAGE_SIZE,
    };

    let members = member::find_all(&state.pool, &filter).await?;
    let total = member::count(&state.pool, &filter).await?;
    let total_pages = if total > 0 {
        (total + PAGE_SIZE as i64 - 1) / PAGE_SIZE as i64
    } else {
        1
    };

    Ok(Json(MemberListResponse {
        members,
        page,
        total,
        total_pages,
    }))
}

/// GET /api/members/:id - detail with participations, interests and
/// recent attendance (last 90 days, newest 10)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MemberDetail>> {
    let member = member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;

    let current_participations = participation::find_by_member(&state.pool, id, true).await?;
    let past_participations = participation::find_by_member(&state.pool, id, false).await?;
    let interests = interest::find_by_member(&state.pool, id).await?;

    let since = chrono::Utc::now().date_naive() - Duration::days(RECENT_ATTENDANCE_DAYS);
    let recent_attendances = attendance::find_recent_by_member(&state.pool, id, since, 10).await?;

    Ok(Json(MemberDetail {
        member,
        current_participations,
        past_participations,
        interests,
        recent_attendances,
    }))
}

/// GET /api/members/:id/profile - engagement statistics
pub async fn profile(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MemberProfile>> {
    let member = member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;

    let (total_attendances, total_events) = attendance::counts_for_member(&state.pool, id).await?;
    let attendance_rate = if total_events > 0 {
        let rate = total_attendances as f64 / total_events as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    } else {
        0.0
    };

    let participations_by_type = participation::count_by_group_type(&state.pool, id).await?;

    Ok(Json(MemberProfile {
        member,
        total_attendances,
        total_events,
        attendance_rate,
        participations_by_type,
    }))
}
