//! Group API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{Group, GroupMemberRow, GroupType, GroupWithMemberCount, ParticipationRole};

use crate::core::ServerState;
use crate::db::repository::{group, participation};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub group_type: Option<GroupType>,
}

/// Group detail response (group + current members + leaders)
#[derive(Debug, Serialize)]
pub struct GroupDetail {
    #[serde(flatten)]
    pub group: Group,
    pub current_members: Vec<GroupMemberRow>,
    pub leaders: Vec<GroupMemberRow>,
}

/// GET /api/groups - active groups with member counts
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<GroupWithMemberCount>>> {
    let groups = group::find_all(&state.pool, query.group_type).await?;
    Ok(Json(groups))
}

/// GET /api/groups/:id - detail with current members and leaders
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GroupDetail>> {
    let group = group::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Group {}", id)))?;

    let current_members = participation::find_current_by_group(&state.pool, id).await?;
    let leaders = current_members
        .iter()
        .filter(|m| {
            matches!(
                m.role,
                ParticipationRole::Leader | ParticipationRole::Coordinator
            )
        })
        .cloned()
        .collect();

    Ok(Json(GroupDetail {
        group,
        current_members,
        leaders,
    }))
}
