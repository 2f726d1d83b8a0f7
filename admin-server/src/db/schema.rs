//! Schema definition
//!
//! Applied idempotently at startup; every statement is CREATE IF NOT EXISTS.

use sqlx::SqlitePool;

use crate::utils::{AppError, AppResult};

const SCHEMA: &[&str] = &[
    // Local mirror of the remote member base, keyed by inchurch_id
    "CREATE TABLE IF NOT EXISTS member (
        id INTEGER PRIMARY KEY,
        inchurch_id TEXT NOT NULL UNIQUE,
        full_name TEXT NOT NULL,
        gender TEXT,
        birth_date TEXT,
        marital_status TEXT,
        phone TEXT,
        email TEXT,
        address TEXT,
        neighborhood TEXT,
        member_status TEXT NOT NULL DEFAULT 'visitor',
        entry_date TEXT,
        last_attendance TEXT,
        contact_preference TEXT,
        church_discovery TEXT,
        event_preference TEXT,
        availability_notes TEXT,
        last_activity INTEGER,
        engagement_score INTEGER NOT NULL DEFAULT 0,
        gifts_aptitudes TEXT,
        prayer_requests TEXT,
        testimonies TEXT,
        church_attendance_time TEXT,
        previous_churches TEXT,
        previous_participation TEXT,
        volunteer_interest INTEGER NOT NULL DEFAULT 0,
        volunteer_areas TEXT,
        available_days TEXT,
        available_times TEXT,
        community_interests TEXT,
        seeking_in_church TEXT,
        open_to_new_groups INTEGER NOT NULL DEFAULT 1,
        group_preferences TEXT,
        faith_stage TEXT,
        pastoral_care_interest INTEGER NOT NULL DEFAULT 0,
        faith_challenges TEXT,
        onboarding_completed INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_member_status ON member(member_status)",
    "CREATE INDEX IF NOT EXISTS idx_member_full_name ON member(full_name)",

    "CREATE TABLE IF NOT EXISTS interest_area (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT
    )",

    "CREATE TABLE IF NOT EXISTS member_interest (
        id INTEGER PRIMARY KEY,
        member_id INTEGER NOT NULL REFERENCES member(id) ON DELETE CASCADE,
        interest_area_id INTEGER NOT NULL REFERENCES interest_area(id) ON DELETE CASCADE,
        level INTEGER NOT NULL DEFAULT 1,
        UNIQUE(member_id, interest_area_id)
    )",

    "CREATE TABLE IF NOT EXISTS church_group (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        group_type TEXT NOT NULL DEFAULT 'group',
        description TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )",

    // No UNIQUE(member_id, group_id): duplicates are resolved by
    // get-or-create-then-update during sync
    "CREATE TABLE IF NOT EXISTS member_participation (
        id INTEGER PRIMARY KEY,
        member_id INTEGER NOT NULL REFERENCES member(id) ON DELETE CASCADE,
        group_id INTEGER NOT NULL REFERENCES church_group(id) ON DELETE CASCADE,
        role TEXT NOT NULL DEFAULT 'member',
        start_date TEXT NOT NULL,
        end_date TEXT,
        is_current INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE INDEX IF NOT EXISTS idx_participation_member ON member_participation(member_id)",
    "CREATE INDEX IF NOT EXISTS idx_participation_group ON member_participation(group_id)",

    "CREATE TABLE IF NOT EXISTS attendance_record (
        id INTEGER PRIMARY KEY,
        member_id INTEGER NOT NULL REFERENCES member(id) ON DELETE CASCADE,
        event_name TEXT NOT NULL,
        event_date TEXT NOT NULL,
        event_type TEXT NOT NULL,
        attended INTEGER NOT NULL DEFAULT 1,
        UNIQUE(member_id, event_name, event_date)
    )",
    "CREATE INDEX IF NOT EXISTS idx_attendance_member ON attendance_record(member_id)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance_record(event_date)",
];

/// Apply the schema
pub async fn apply(pool: &SqlitePool) -> AppResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::database(format!("Schema statement failed: {}", e)))?;
    }
    Ok(())
}
