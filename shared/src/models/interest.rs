//! Interest Area Models

use serde::{Deserialize, Serialize};

/// A named topical interest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InterestArea {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Member <-> interest area link, with interest level 1-5
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MemberInterest {
    pub id: i64,
    pub member_id: i64,
    pub interest_area_id: i64,
    pub level: i64,
}

/// Interest link with the area name (for member detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InterestDetail {
    pub interest_area_id: i64,
    pub name: String,
    pub level: i64,
}
