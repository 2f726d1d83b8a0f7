//! Participation Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{GroupMemberRow, GroupType, MemberParticipation, ParticipationDetail, ParticipationRole};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

/// Role/date assignment carried by the synchronizer
#[derive(Debug, Clone)]
pub struct ParticipationAssignment {
    pub role: ParticipationRole,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

/// Participation count per group type (member profile)
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct GroupTypeCount {
    pub group_type: GroupType,
    pub count: i64,
}

pub async fn find_by_member_and_group(
    pool: &SqlitePool,
    member_id: i64,
    group_id: i64,
) -> RepoResult<Option<MemberParticipation>> {
    let row = sqlx::query_as::<_, MemberParticipation>(
        "SELECT * FROM member_participation WHERE member_id = ? AND group_id = ? LIMIT 1",
    )
    .bind(member_id)
    .bind(group_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Get-or-create a participation for (member, group)
///
/// When a row already exists its role, end date and is_current flag are
/// updated in place instead of creating a duplicate. Returns whether a new
/// row was created.
pub async fn upsert(
    pool: &SqlitePool,
    member_id: i64,
    group_id: i64,
    assignment: &ParticipationAssignment,
) -> RepoResult<bool> {
    if let Some(existing) = find_by_member_and_group(pool, member_id, group_id).await? {
        sqlx::query(
            "UPDATE member_participation SET role = ?, end_date = ?, is_current = ? WHERE id = ?",
        )
        .bind(assignment.role)
        .bind(assignment.end_date)
        .bind(assignment.is_current)
        .bind(existing.id)
        .execute(pool)
        .await?;
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO member_participation (id, member_id, group_id, role, start_date, end_date, is_current) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(member_id)
    .bind(group_id)
    .bind(assignment.role)
    .bind(assignment.start_date)
    .bind(assignment.end_date)
    .bind(assignment.is_current)
    .execute(pool)
    .await?;
    Ok(true)
}

/// Participations of a member, split by the is_current flag
pub async fn find_by_member(
    pool: &SqlitePool,
    member_id: i64,
    is_current: bool,
) -> RepoResult<Vec<ParticipationDetail>> {
    let rows = sqlx::query_as::<_, ParticipationDetail>(
        "SELECT p.id, p.group_id, g.name as group_name, g.group_type, p.role, \
                p.start_date, p.end_date, p.is_current \
         FROM member_participation p \
         JOIN church_group g ON g.id = p.group_id \
         WHERE p.member_id = ? AND p.is_current = ? \
         ORDER BY p.start_date DESC",
    )
    .bind(member_id)
    .bind(is_current)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Current members of a group
pub async fn find_current_by_group(
    pool: &SqlitePool,
    group_id: i64,
) -> RepoResult<Vec<GroupMemberRow>> {
    let rows = sqlx::query_as::<_, GroupMemberRow>(
        "SELECT p.member_id, m.full_name, m.email, p.role, p.start_date \
         FROM member_participation p \
         JOIN member m ON m.id = p.member_id \
         WHERE p.group_id = ? AND p.is_current = 1 \
         ORDER BY m.full_name",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Participation counts per group type for one member
pub async fn count_by_group_type(
    pool: &SqlitePool,
    member_id: i64,
) -> RepoResult<Vec<GroupTypeCount>> {
    let rows = sqlx::query_as::<_, GroupTypeCount>(
        "SELECT g.group_type, COUNT(*) as count \
         FROM member_participation p \
         JOIN church_group g ON g.id = p.group_id \
         WHERE p.member_id = ? \
         GROUP BY g.group_type",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Total participation rows for (member, group) - used by tests to verify
/// the upsert never duplicates
pub async fn count_for_pair(pool: &SqlitePool, member_id: i64, group_id: i64) -> RepoResult<i64> {
    Ok(sqlx::query_scalar(
        "SELECT COUNT(*) FROM member_participation WHERE member_id = ? AND group_id = ?",
    )
    .bind(member_id)
    .bind(group_id)
    .fetch_one(pool)
    .await?)
}
