//! Group Repository

use super::RepoResult;
use shared::models::{Group, GroupType, GroupWithMemberCount};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const GROUP_WITH_COUNT_SELECT: &str = "SELECT g.id, g.name, g.group_type, g.description, g.is_active, \
     (SELECT COUNT(*) FROM member_participation p WHERE p.group_id = g.id AND p.is_current = 1) as member_count \
     FROM church_group g";

/// Active groups with current member counts, optionally filtered by type
pub async fn find_all(
    pool: &SqlitePool,
    group_type: Option<GroupType>,
) -> RepoResult<Vec<GroupWithMemberCount>> {
    let mut sql = format!("{} WHERE g.is_active = 1", GROUP_WITH_COUNT_SELECT);
    if group_type.is_some() {
        sql.push_str(" AND g.group_type = ?");
    }
    sql.push_str(" ORDER BY g.name");

    let mut query = sqlx::query_as::<_, GroupWithMemberCount>(&sql);
    if let Some(t) = group_type {
        query = query.bind(t);
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Group>> {
    let row = sqlx::query_as::<_, Group>("SELECT * FROM church_group WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Group>> {
    let row = sqlx::query_as::<_, Group>("SELECT * FROM church_group WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Get a group by name, creating it when missing
pub async fn get_or_create(
    pool: &SqlitePool,
    name: &str,
    group_type: GroupType,
) -> RepoResult<Group> {
    if let Some(group) = find_by_name(pool, name).await? {
        return Ok(group);
    }

    let now = now_millis();
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO church_group (id, name, group_type, description, is_active, created_at, updated_at) \
         VALUES (?, ?, ?, NULL, 1, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(group_type)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Group {
        id,
        name: name.to_string(),
        group_type,
        description: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    })
}

/// Most active groups by current member count (dashboard)
pub async fn top_by_member_count(
    pool: &SqlitePool,
    limit: i64,
) -> RepoResult<Vec<GroupWithMemberCount>> {
    let sql = format!(
        "{} WHERE g.is_active = 1 ORDER BY member_count DESC, g.name LIMIT ?",
        GROUP_WITH_COUNT_SELECT
    );
    let rows = sqlx::query_as::<_, GroupWithMemberCount>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
