//! Attendance Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{AttendanceRecord, EventType, MonthlyAttendance};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

/// Insert an attendance row
///
/// Uniqueness on (member, event name, event date) is enforced by the schema;
/// a second insert for the same event is a Duplicate error.
pub async fn record(
    pool: &SqlitePool,
    member_id: i64,
    event_name: &str,
    event_date: NaiveDate,
    event_type: EventType,
    attended: bool,
) -> RepoResult<AttendanceRecord> {
    let id = snowflake_id();
    let result = sqlx::query(
        "INSERT OR IGNORE INTO attendance_record (id, member_id, event_name, event_date, event_type, attended) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(member_id)
    .bind(event_name)
    .bind(event_date)
    .bind(event_type)
    .bind(attended)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::Duplicate(format!(
            "Attendance for {event_name} on {event_date}"
        )));
    }

    Ok(AttendanceRecord {
        id,
        member_id,
        event_name: event_name.to_string(),
        event_date,
        event_type,
        attended,
    })
}

/// Recent attendance of a member since a given date, newest first
pub async fn find_recent_by_member(
    pool: &SqlitePool,
    member_id: i64,
    since: NaiveDate,
    limit: i64,
) -> RepoResult<Vec<AttendanceRecord>> {
    let rows = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT * FROM attendance_record \
         WHERE member_id = ? AND event_date >= ? \
         ORDER BY event_date DESC LIMIT ?",
    )
    .bind(member_id)
    .bind(since)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// (attended, total) event counts for one member
pub async fn counts_for_member(pool: &SqlitePool, member_id: i64) -> RepoResult<(i64, i64)> {
    let attended: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM attendance_record WHERE member_id = ? AND attended = 1",
    )
    .bind(member_id)
    .fetch_one(pool)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance_record WHERE member_id = ?")
        .bind(member_id)
        .fetch_one(pool)
        .await?;

    Ok((attended, total))
}

/// Attended-event counts grouped by month since a given date
pub async fn monthly_attended(
    pool: &SqlitePool,
    since: NaiveDate,
) -> RepoResult<Vec<MonthlyAttendance>> {
    let rows = sqlx::query_as::<_, MonthlyAttendance>(
        "SELECT strftime('%Y-%m', event_date) as month, COUNT(*) as count \
         FROM attendance_record \
         WHERE attended = 1 AND event_date >= ? \
         GROUP BY month ORDER BY month",
    )
    .bind(since)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
