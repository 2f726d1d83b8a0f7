//! Attendance Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum EventType {
    Service,
    Cell,
    Course,
    Event,
}

/// One attendance row per (member, event name, event date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceRecord {
    pub id: i64,
    pub member_id: i64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_type: EventType,
    pub attended: bool,
}

/// Attended-event count per month bucket ("YYYY-MM")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MonthlyAttendance {
    pub month: String,
    pub count: i64,
}
