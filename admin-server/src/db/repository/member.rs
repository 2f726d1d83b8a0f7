//! Member Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{Member, MemberStatus, MemberSummary, MemberUpsert};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const MEMBER_SUMMARY_SELECT: &str = "SELECT id, inchurch_id, full_name, email, phone, member_status, engagement_score, entry_date FROM member";

/// List filter: status, free-text search, page (1-based)
#[derive(Debug, Clone, Default)]
pub struct MemberListFilter {
    pub status: Option<MemberStatus>,
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

/// Member count per status
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct StatusCount {
    pub member_status: MemberStatus,
    pub count: i64,
}

pub async fn find_all(
    pool: &SqlitePool,
    filter: &MemberListFilter,
) -> RepoResult<Vec<MemberSummary>> {
    let mut sql = format!("{} WHERE 1=1", MEMBER_SUMMARY_SELECT);
    if filter.status.is_some() {
        sql.push_str(" AND member_status = ?");
    }
    let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
    if pattern.is_some() {
        sql.push_str(" AND (full_name LIKE ? OR email LIKE ? OR phone LIKE ?)");
    }
    sql.push_str(" ORDER BY full_name LIMIT ? OFFSET ?");

    let page = filter.page.max(1);
    let page_size = if filter.page_size == 0 { 20 } else { filter.page_size };
    let offset = (page - 1) * page_size;

    let mut query = sqlx::query_as::<_, MemberSummary>(&sql);
    if let Some(status) = filter.status {
        query = query.bind(status);
    }
    if let Some(p) = &pattern {
        query = query.bind(p).bind(p).bind(p);
    }
    let rows = query
        .bind(page_size as i64)
        .bind(offset as i64)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Count rows matching the filter (for pagination)
pub async fn count(pool: &SqlitePool, filter: &MemberListFilter) -> RepoResult<i64> {
    let mut sql = "SELECT COUNT(*) FROM member WHERE 1=1".to_string();
    if filter.status.is_some() {
        sql.push_str(" AND member_status = ?");
    }
    let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
    if pattern.is_some() {
        sql.push_str(" AND (full_name LIKE ? OR email LIKE ? OR phone LIKE ?)");
    }

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    if let Some(status) = filter.status {
        query = query.bind(status);
    }
    if let Some(p) = &pattern {
        query = query.bind(p).bind(p).bind(p);
    }
    Ok(query.fetch_one(pool).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let row = sqlx::query_as::<_, Member>("SELECT * FROM member WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_inchurch_id(
    pool: &SqlitePool,
    inchurch_id: &str,
) -> RepoResult<Option<Member>> {
    let row = sqlx::query_as::<_, Member>("SELECT * FROM member WHERE inchurch_id = ?")
        .bind(inchurch_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Member>> {
    let row = sqlx::query_as::<_, Member>("SELECT * FROM member WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Upsert a member by `inchurch_id` (update-if-exists, else create)
///
/// On update, None fields leave the stored value untouched; the remote
/// payload only overwrites what it actually carries. Returns the member id
/// and whether a new row was created.
pub async fn upsert(pool: &SqlitePool, data: &MemberUpsert) -> RepoResult<(i64, bool)> {
    let now = now_millis();
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM member WHERE inchurch_id = ?")
        .bind(&data.inchurch_id)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        sqlx::query(
            "UPDATE member SET \
                full_name = ?, \
                gender = COALESCE(?, gender), \
                birth_date = COALESCE(?, birth_date), \
                marital_status = COALESCE(?, marital_status), \
                phone = COALESCE(?, phone), \
                email = COALESCE(?, email), \
                address = COALESCE(?, address), \
                neighborhood = COALESCE(?, neighborhood), \
                member_status = COALESCE(?, member_status), \
                entry_date = COALESCE(?, entry_date), \
                last_attendance = COALESCE(?, last_attendance), \
                engagement_score = COALESCE(?, engagement_score), \
                gifts_aptitudes = COALESCE(?, gifts_aptitudes), \
                prayer_requests = COALESCE(?, prayer_requests), \
                testimonies = COALESCE(?, testimonies), \
                church_attendance_time = COALESCE(?, church_attendance_time), \
                previous_churches = COALESCE(?, previous_churches), \
                previous_participation = COALESCE(?, previous_participation), \
                volunteer_interest = COALESCE(?, volunteer_interest), \
                volunteer_areas = COALESCE(?, volunteer_areas), \
                available_days = COALESCE(?, available_days), \
                available_times = COALESCE(?, available_times), \
                community_interests = COALESCE(?, community_interests), \
                seeking_in_church = COALESCE(?, seeking_in_church), \
                open_to_new_groups = COALESCE(?, open_to_new_groups), \
                group_preferences = COALESCE(?, group_preferences), \
                faith_stage = COALESCE(?, faith_stage), \
                pastoral_care_interest = COALESCE(?, pastoral_care_interest), \
                faith_challenges = COALESCE(?, faith_challenges), \
                updated_at = ? \
             WHERE id = ?",
        )
        .bind(&data.full_name)
        .bind(&data.gender)
        .bind(data.birth_date)
        .bind(&data.marital_status)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.neighborhood)
        .bind(data.member_status)
        .bind(data.entry_date)
        .bind(data.last_attendance)
        .bind(data.engagement_score)
        .bind(&data.gifts_aptitudes)
        .bind(&data.prayer_requests)
        .bind(&data.testimonies)
        .bind(&data.church_attendance_time)
        .bind(&data.previous_churches)
        .bind(&data.previous_participation)
        .bind(data.volunteer_interest)
        .bind(&data.volunteer_areas)
        .bind(&data.available_days)
        .bind(&data.available_times)
        .bind(&data.community_interests)
        .bind(&data.seeking_in_church)
        .bind(data.open_to_new_groups)
        .bind(&data.group_preferences)
        .bind(&data.faith_stage)
        .bind(data.pastoral_care_interest)
        .bind(&data.faith_challenges)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

        return Ok((id, false));
    }

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO member (\
            id, inchurch_id, full_name, gender, birth_date, marital_status, \
            phone, email, address, neighborhood, member_status, entry_date, \
            last_attendance, engagement_score, gifts_aptitudes, prayer_requests, \
            testimonies, church_attendance_time, previous_churches, \
            previous_participation, volunteer_interest, volunteer_areas, \
            available_days, available_times, community_interests, \
            seeking_in_church, open_to_new_groups, group_preferences, \
            faith_stage, pastoral_care_interest, faith_challenges, \
            created_at, updated_at\
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.inchurch_id)
    .bind(&data.full_name)
    .bind(&data.gender)
    .bind(data.birth_date)
    .bind(&data.marital_status)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(&data.address)
    .bind(&data.neighborhood)
    .bind(data.member_status.unwrap_or_default())
    .bind(data.entry_date)
    .bind(data.last_attendance)
    .bind(data.engagement_score.unwrap_or(0))
    .bind(&data.gifts_aptitudes)
    .bind(&data.prayer_requests)
    .bind(&data.testimonies)
    .bind(&data.church_attendance_time)
    .bind(&data.previous_churches)
    .bind(&data.previous_participation)
    .bind(data.volunteer_interest.unwrap_or(false))
    .bind(&data.volunteer_areas)
    .bind(&data.available_days)
    .bind(&data.available_times)
    .bind(&data.community_interests)
    .bind(&data.seeking_in_church)
    .bind(data.open_to_new_groups.unwrap_or(true))
    .bind(&data.group_preferences)
    .bind(&data.faith_stage)
    .bind(data.pastoral_care_interest.unwrap_or(false))
    .bind(&data.faith_challenges)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok((id, true))
}

pub async fn count_total(pool: &SqlitePool) -> RepoResult<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM member")
        .fetch_one(pool)
        .await?)
}

pub async fn count_by_status(pool: &SqlitePool) -> RepoResult<Vec<StatusCount>> {
    let rows = sqlx::query_as::<_, StatusCount>(
        "SELECT member_status, COUNT(*) as count FROM member GROUP BY member_status",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Members whose entry date is on or after `since`
pub async fn count_recent_entries(pool: &SqlitePool, since: NaiveDate) -> RepoResult<i64> {
    Ok(
        sqlx::query_scalar("SELECT COUNT(*) FROM member WHERE entry_date >= ?")
            .bind(since)
            .fetch_one(pool)
            .await?,
    )
}

/// All known birth dates (for the age-range analytics)
pub async fn birth_dates(pool: &SqlitePool) -> RepoResult<Vec<NaiveDate>> {
    let rows = sqlx::query_scalar::<_, NaiveDate>(
        "SELECT birth_date FROM member WHERE birth_date IS NOT NULL",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn set_onboarding_completed(
    pool: &SqlitePool,
    id: i64,
    completed: bool,
) -> RepoResult<()> {
    sqlx::query("UPDATE member SET onboarding_completed = ?, updated_at = ? WHERE id = ?")
        .bind(completed)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
