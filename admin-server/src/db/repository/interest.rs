//! Interest Repository

use super::RepoResult;
use shared::models::{InterestArea, InterestDetail};
use shared::util::snowflake_id;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_area_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<InterestArea>> {
    let row = sqlx::query_as::<_, InterestArea>("SELECT * FROM interest_area WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn get_or_create_area(conn: &mut SqliteConnection, name: &str) -> RepoResult<i64> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM interest_area WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = snowflake_id();
    sqlx::query("INSERT INTO interest_area (id, name, description) VALUES (?, ?, NULL)")
        .bind(id)
        .bind(name)
        .execute(&mut *conn)
        .await?;
    Ok(id)
}

/// Replace a member's interest links wholesale
///
/// Deletes every existing link, then recreates areas (get-or-create by name)
/// and fresh join rows from the incoming payload. Runs inside one
/// transaction; the synchronizer is the sole writer.
pub async fn replace_for_member(
    pool: &SqlitePool,
    member_id: i64,
    interests: &[(String, i64)],
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM member_interest WHERE member_id = ?")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    for (name, level) in interests {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let area_id = get_or_create_area(&mut tx, name).await?;
        // Clamp the interest level into the 1-5 range the model defines
        let level = (*level).clamp(1, 5);
        sqlx::query(
            "INSERT OR IGNORE INTO member_interest (id, member_id, interest_area_id, level) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(snowflake_id())
        .bind(member_id)
        .bind(area_id)
        .bind(level)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Interests of one member, with area names
pub async fn find_by_member(pool: &SqlitePool, member_id: i64) -> RepoResult<Vec<InterestDetail>> {
    let rows = sqlx::query_as::<_, InterestDetail>(
        "SELECT mi.interest_area_id, ia.name, mi.level \
         FROM member_interest mi \
         JOIN interest_area ia ON ia.id = mi.interest_area_id \
         WHERE mi.member_id = ? \
         ORDER BY ia.name",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
