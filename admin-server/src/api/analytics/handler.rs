//! Analytics API Handlers

use axum::{Json, extract::State};
use chrono::Duration;
use serde::Serialize;
use shared::models::MonthlyAttendance;
use shared::util::age_on;

use crate::core::ServerState;
use crate::db::repository::member::StatusCount;
use crate::db::repository::{attendance, member};
use crate::utils::AppResult;

/// Fixed age buckets, in display order
const AGE_RANGES: &[&str] = &["0-17", "18-25", "26-35", "36-50", "51-65", "65+"];

/// Engagement window (12 months)
const ENGAGEMENT_WINDOW_DAYS: i64 = 365;

#[derive(Debug, Serialize)]
pub struct AgeRangeCount {
    pub range: &'static str,
    pub count: i64,
}

/// Analytics report
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub status_distribution: Vec<StatusCount>,
    pub age_ranges: Vec<AgeRangeCount>,
    pub monthly_engagement: Vec<MonthlyAttendance>,
}

fn bucket_index(age: i32) -> usize {
    match age {
        ..=17 => 0,
        18..=25 => 1,
        26..=35 => 2,
        36..=50 => 3,
        51..=65 => 4,
        _ => 5,
    }
}

/// GET /api/analytics - status distribution, age ranges, monthly engagement
pub async fn report(State(state): State<ServerState>) -> AppResult<Json<AnalyticsResponse>> {
    let status_distribution = member::count_by_status(&state.pool).await?;

    let today = chrono::Utc::now().date_naive();
    let mut counts = [0i64; 6];
    for birth_date in member::birth_dates(&state.pool).await? {
        if let Some(age) = age_on(Some(birth_date), today) {
            counts[bucket_index(age)] += 1;
        }
    }
    let age_ranges = AGE_RANGES
        .iter()
        .copied()
        .zip(counts)
        .map(|(range, count)| AgeRangeCount { range, count })
        .collect();

    let since = today - Duration::days(ENGAGEMENT_WINDOW_DAYS);
    let monthly_engagement = attendance::monthly_attended(&state.pool, since).await?;

    Ok(Json(AnalyticsResponse {
        status_distribution,
        age_ranges,
        monthly_engagement,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index_boundaries() {
        assert_eq!(bucket_index(0), 0);
        assert_eq!(bucket_index(17), 0);
        assert_eq!(bucket_index(18), 1);
        assert_eq!(bucket_index(25), 1);
        assert_eq!(bucket_index(26), 2);
        assert_eq!(bucket_index(35), 2);
        assert_eq!(bucket_index(36), 3);
        assert_eq!(bucket_index(50), 3);
        assert_eq!(bucket_index(51), 4);
        assert_eq!(bucket_index(65), 4);
        assert_eq!(bucket_index(66), 5);
        assert_eq!(bucket_index(90), 5);
    }
}
