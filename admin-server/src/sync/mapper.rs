//! Remote record mapping
//!
//! Pure functions turning a remote member record into the local upsert
//! payload: the status lookup table, defensive date parsing and the derived
//! engagement score.

use ampeli_client::RemoteMember;
use chrono::NaiveDate;
use shared::models::{GroupType, MemberStatus, MemberUpsert, ParticipationRole};

/// Date format used by the remote service
pub const REMOTE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Engagement score ceiling
pub const MAX_ENGAGEMENT_SCORE: i64 = 100;

/// Normalize a remote status value through the fixed lookup table
///
/// Unknown values fall back to visitor.
pub fn normalize_status(raw: Option<&str>) -> MemberStatus {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("ativo") | Some("active") => MemberStatus::Active,
        Some("inativo") | Some("inactive") => MemberStatus::Inactive,
        Some("novo") | Some("new") => MemberStatus::New,
        Some("visitante") | Some("visitor") => MemberStatus::Visitor,
        _ => MemberStatus::Visitor,
    }
}

/// Normalize a remote participation role
pub fn normalize_role(raw: Option<&str>) -> ParticipationRole {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("líder") | Some("lider") | Some("leader") => ParticipationRole::Leader,
        Some("coordenador") | Some("coordinator") => ParticipationRole::Coordinator,
        Some("voluntário") | Some("voluntario") | Some("volunteer") => {
            ParticipationRole::Volunteer
        }
        _ => ParticipationRole::Member,
    }
}

/// Normalize a remote group type
pub fn normalize_group_type(raw: Option<&str>) -> GroupType {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("célula") | Some("celula") | Some("cell") => GroupType::Cell,
        Some("ministério") | Some("ministerio") | Some("ministry") => GroupType::Ministry,
        Some("curso") | Some("course") => GroupType::Course,
        _ => GroupType::Group,
    }
}

/// Parse a remote date field, best-effort
///
/// Unparsable values leave the field unset; the record still syncs. The
/// failure is logged at debug level so it stays auditable.
pub fn parse_remote_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, REMOTE_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "Skipping unparsable remote date");
            None
        }
    }
}

/// Derive the 0-100 engagement score
///
/// Capped contributions: attendance x10 up to 50, current participations
/// x20 up to 40, a flat +10 when a volunteer area is present; the total is
/// clamped to [0, 100].
pub fn engagement_score(
    attendance_count: i64,
    active_participations: i64,
    has_volunteer_area: bool,
) -> i64 {
    let attendance = (attendance_count.max(0) * 10).min(50);
    let participation = (active_participations.max(0) * 20).min(40);
    let volunteer = if has_volunteer_area { 10 } else { 0 };
    (attendance + participation + volunteer).min(MAX_ENGAGEMENT_SCORE)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Map a remote member record into the local upsert payload
pub fn map_remote_member(record: &RemoteMember) -> MemberUpsert {
    let active_participations = record
        .participations
        .iter()
        .filter(|p| p.is_current)
        .count() as i64;
    let volunteer_area = non_empty(&record.volunteer_area);
    let score = engagement_score(
        record.attendance_count,
        active_participations,
        volunteer_area.is_some(),
    );

    MemberUpsert {
        inchurch_id: record.id.to_string(),
        full_name: record.full_name.trim().to_string(),
        gender: non_empty(&record.gender),
        birth_date: parse_remote_date(record.birth_date.as_deref()),
        marital_status: non_empty(&record.marital_status),
        phone: non_empty(&record.phone),
        email: non_empty(&record.email),
        address: non_empty(&record.address),
        neighborhood: non_empty(&record.neighborhood),
        member_status: Some(normalize_status(record.member_status.as_deref())),
        entry_date: parse_remote_date(record.entry_date.as_deref()),
        last_attendance: parse_remote_date(record.last_attendance.as_deref()),
        engagement_score: Some(score),
        gifts_aptitudes: non_empty(&record.skills_gifts),
        prayer_requests: non_empty(&record.prayer_requests),
        testimonies: non_empty(&record.testimonies),
        volunteer_interest: Some(volunteer_area.is_some()),
        volunteer_areas: volunteer_area,
        faith_stage: non_empty(&record.faith_stage),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampeli_client::{RemoteInterest, RemoteParticipation};

    fn remote_member() -> RemoteMember {
        serde_json::from_value(serde_json::json!({
            "id": 101,
            "fullName": "Maria Silva",
            "email": "maria@teste.com",
            "memberStatus": "ativo",
            "birthDate": "1985-03-20",
            "entryDate": "2023-01-10",
            "attendanceCount": 3,
            "volunteerArea": "louvor",
        }))
        .unwrap()
    }

    #[test]
    fn test_status_lookup_table() {
        assert_eq!(normalize_status(Some("ativo")), MemberStatus::Active);
        assert_eq!(normalize_status(Some("ACTIVE")), MemberStatus::Active);
        assert_eq!(normalize_status(Some("inativo")), MemberStatus::Inactive);
        assert_eq!(normalize_status(Some("novo")), MemberStatus::New);
        assert_eq!(normalize_status(Some("visitante")), MemberStatus::Visitor);
        // Unknown and missing values default to visitor
        assert_eq!(normalize_status(Some("qualquer")), MemberStatus::Visitor);
        assert_eq!(normalize_status(None), MemberStatus::Visitor);
    }

    #[test]
    fn test_role_and_group_type_normalization() {
        assert_eq!(normalize_role(Some("líder")), ParticipationRole::Leader);
        assert_eq!(
            normalize_role(Some("coordenador")),
            ParticipationRole::Coordinator
        );
        assert_eq!(
            normalize_role(Some("volunteer")),
            ParticipationRole::Volunteer
        );
        assert_eq!(normalize_role(None), ParticipationRole::Member);

        assert_eq!(normalize_group_type(Some("célula")), GroupType::Cell);
        assert_eq!(normalize_group_type(Some("ministry")), GroupType::Ministry);
        assert_eq!(normalize_group_type(Some("curso")), GroupType::Course);
        assert_eq!(normalize_group_type(None), GroupType::Group);
    }

    #[test]
    fn test_parse_remote_date() {
        assert_eq!(
            parse_remote_date(Some("1985-03-20")),
            NaiveDate::from_ymd_opt(1985, 3, 20)
        );
        // Parse failures leave the field unset rather than raising
        assert_eq!(parse_remote_date(Some("20/03/1985")), None);
        assert_eq!(parse_remote_date(Some("not-a-date")), None);
        assert_eq!(parse_remote_date(Some("")), None);
        assert_eq!(parse_remote_date(None), None);
    }

    #[test]
    fn test_engagement_score_examples() {
        // attendance=10, participations=0, no volunteer area -> min(100, 50) = 50
        assert_eq!(engagement_score(10, 0, false), 50);
        assert_eq!(engagement_score(0, 0, false), 0);
        assert_eq!(engagement_score(2, 1, false), 40);
        assert_eq!(engagement_score(1, 1, true), 40);
        // Each contribution caps independently, total clamps at 100
        assert_eq!(engagement_score(100, 100, true), 100);
        assert_eq!(engagement_score(5, 2, true), 100);
    }

    #[test]
    fn test_engagement_score_monotonic_and_clamped() {
        let mut previous = 0;
        for attendance in 0..15 {
            let score = engagement_score(attendance, 0, false);
            assert!(score >= previous);
            assert!((0..=100).contains(&score));
            previous = score;
        }

        let mut previous = 0;
        for participations in 0..5 {
            let score = engagement_score(0, participations, false);
            assert!(score >= previous);
            assert!((0..=100).contains(&score));
            previous = score;
        }

        // Negative inputs do not push the score below zero
        assert_eq!(engagement_score(-3, -1, false), 0);
    }

    #[test]
    fn test_map_remote_member() {
        let upsert = map_remote_member(&remote_member());

        assert_eq!(upsert.inchurch_id, "101");
        assert_eq!(upsert.full_name, "Maria Silva");
        assert_eq!(upsert.email.as_deref(), Some("maria@teste.com"));
        assert_eq!(upsert.member_status, Some(MemberStatus::Active));
        assert_eq!(
            upsert.birth_date,
            NaiveDate::from_ymd_opt(1985, 3, 20)
        );
        assert_eq!(upsert.volunteer_areas.as_deref(), Some("louvor"));
        assert_eq!(upsert.volunteer_interest, Some(true));
        // 3 attendances, 0 participations, volunteer area present
        assert_eq!(upsert.engagement_score, Some(40));
    }

    #[test]
    fn test_map_remote_member_bad_birth_date_left_unset() {
        let mut record = remote_member();
        record.birth_date = Some("20/03/1985".into());

        let upsert = map_remote_member(&record);
        assert_eq!(upsert.birth_date, None);
        // The record still maps; nothing else is lost
        assert_eq!(upsert.full_name, "Maria Silva");
    }

    #[test]
    fn test_map_counts_only_current_participations() {
        let mut record = remote_member();
        record.attendance_count = 0;
        record.volunteer_area = None;
        record.participations = vec![
            RemoteParticipation {
                group_name: "Célula Norte".into(),
                group_type: Some("célula".into()),
                role: None,
                start_date: None,
                end_date: None,
                is_current: true,
            },
            RemoteParticipation {
                group_name: "Curso Alpha".into(),
                group_type: Some("curso".into()),
                role: None,
                start_date: None,
                end_date: Some("2023-12-01".into()),
                is_current: false,
            },
        ];
        record.interests = vec![RemoteInterest {
            name: "música".into(),
            level: 4,
        }];

        let upsert = map_remote_member(&record);
        // One current participation -> 20 points
        assert_eq!(upsert.engagement_score, Some(20));
    }
}
