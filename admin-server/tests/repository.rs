//! Repository integration tests over an in-memory database

use admin_server::db::{init_database, init_memory_database};
use admin_server::db::repository::member::MemberListFilter;
use admin_server::db::repository::participation::ParticipationAssignment;
use admin_server::db::repository::{RepoError, attendance, group, interest, member, participation};
use chrono::NaiveDate;
use shared::models::{EventType, GroupType, MemberStatus, MemberUpsert, ParticipationRole};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn upsert_payload(inchurch_id: &str, name: &str) -> MemberUpsert {
    MemberUpsert {
        inchurch_id: inchurch_id.to_string(),
        full_name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_init_database_creates_file_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("database").join("ampeli.db");

    let pool = init_database(&db_path).await.unwrap();
    assert!(db_path.exists());

    // Schema is usable and idempotent
    member::upsert(&pool, &upsert_payload("m-1", "Maria"))
        .await
        .unwrap();
    pool.close().await;

    let pool = init_database(&db_path).await.unwrap();
    assert_eq!(member::count_total(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_member_upsert_create_then_update() {
    let pool = init_memory_database().await.unwrap();

    let mut payload = upsert_payload("m-1", "Maria Silva");
    payload.email = Some("maria@teste.com".into());
    payload.member_status = Some(MemberStatus::Active);
    payload.engagement_score = Some(50);

    let (id, created) = member::upsert(&pool, &payload).await.unwrap();
    assert!(created);

    // Second upsert with sparse fields: the update only overwrites what it
    // carries, the email stays
    let mut sparse = upsert_payload("m-1", "Maria S. Silva");
    sparse.member_status = Some(MemberStatus::Inactive);

    let (same_id, created) = member::upsert(&pool, &sparse).await.unwrap();
    assert_eq!(id, same_id);
    assert!(!created);

    let stored = member::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.full_name, "Maria S. Silva");
    assert_eq!(stored.email.as_deref(), Some("maria@teste.com"));
    assert_eq!(stored.member_status, MemberStatus::Inactive);
    assert_eq!(stored.engagement_score, 50);
    assert_eq!(member::count_total(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_member_list_filter_and_search() {
    let pool = init_memory_database().await.unwrap();

    let mut a = upsert_payload("m-1", "Maria Silva");
    a.member_status = Some(MemberStatus::Active);
    a.email = Some("maria@teste.com".into());
    member::upsert(&pool, &a).await.unwrap();

    let mut b = upsert_payload("m-2", "João Souza");
    b.member_status = Some(MemberStatus::Visitor);
    b.phone = Some("11988887777".into());
    member::upsert(&pool, &b).await.unwrap();

    // Status filter
    let active = member::find_all(
        &pool,
        &MemberListFilter {
            status: Some(MemberStatus::Active),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].full_name, "Maria Silva");

    // Search hits name, email and phone
    for term in ["maria", "teste.com", "8888"] {
        let found = member::find_all(
            &pool,
            &MemberListFilter {
                search: Some(term.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(found.len(), 1, "search term {term:?}");
    }

    // Pagination
    let filter = MemberListFilter {
        page: 1,
        page_size: 1,
        ..Default::default()
    };
    assert_eq!(member::find_all(&pool, &filter).await.unwrap().len(), 1);
    assert_eq!(member::count(&pool, &filter).await.unwrap(), 2);
}

#[tokio::test]
async fn test_group_get_or_create_is_idempotent() {
    let pool = init_memory_database().await.unwrap();

    let first = group::get_or_create(&pool, "Célula Norte", GroupType::Cell)
        .await
        .unwrap();
    let second = group::get_or_create(&pool, "Célula Norte", GroupType::Cell)
        .await
        .unwrap();
    assert_eq!(first.id, second.id);

    let all = group::find_all(&pool, None).await.unwrap();
    assert_eq!(all.len(), 1);

    let cells = group::find_all(&pool, Some(GroupType::Cell)).await.unwrap();
    assert_eq!(cells.len(), 1);
    let courses = group::find_all(&pool, Some(GroupType::Course)).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_participation_upsert_updates_in_place() {
    let pool = init_memory_database().await.unwrap();

    let (member_id, _) = member::upsert(&pool, &upsert_payload("m-1", "Maria"))
        .await
        .unwrap();
    let g = group::get_or_create(&pool, "Ministério de Louvor", GroupType::Ministry)
        .await
        .unwrap();

    let created = participation::upsert(
        &pool,
        member_id,
        g.id,
        &ParticipationAssignment {
            role: ParticipationRole::Member,
            start_date: date(2023, 2, 1),
            end_date: None,
            is_current: true,
        },
    )
    .await
    .unwrap();
    assert!(created);

    // Same pair again with a new role and an end date
    let created = participation::upsert(
        &pool,
        member_id,
        g.id,
        &ParticipationAssignment {
            role: ParticipationRole::Coordinator,
            start_date: date(2023, 2, 1),
            end_date: Some(date(2024, 6, 30)),
            is_current: false,
        },
    )
    .await
    .unwrap();
    assert!(!created);

    assert_eq!(
        participation::count_for_pair(&pool, member_id, g.id).await.unwrap(),
        1
    );

    let past = participation::find_by_member(&pool, member_id, false).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].role, ParticipationRole::Coordinator);
    assert_eq!(past[0].end_date, Some(date(2024, 6, 30)));
}

#[tokio::test]
async fn test_group_members_and_top_groups() {
    let pool = init_memory_database().await.unwrap();

    let (maria, _) = member::upsert(&pool, &upsert_payload("m-1", "Maria"))
        .await
        .unwrap();
    let (joao, _) = member::upsert(&pool, &upsert_payload("m-2", "João"))
        .await
        .unwrap();

    let big = group::get_or_create(&pool, "Célula Norte", GroupType::Cell)
        .await
        .unwrap();
    let small = group::get_or_create(&pool, "Curso Alpha", GroupType::Course)
        .await
        .unwrap();

    let join = |role, current| ParticipationAssignment {
        role,
        start_date: date(2024, 1, 1),
        end_date: None,
        is_current: current,
    };

    participation::upsert(&pool, maria, big.id, &join(ParticipationRole::Leader, true))
        .await
        .unwrap();
    participation::upsert(&pool, joao, big.id, &join(ParticipationRole::Member, true))
        .await
        .unwrap();
    participation::upsert(&pool, maria, small.id, &join(ParticipationRole::Member, false))
        .await
        .unwrap();

    let members = participation::find_current_by_group(&pool, big.id).await.unwrap();
    assert_eq!(members.len(), 2);

    // Past participations do not count toward the member count
    let top = group::top_by_member_count(&pool, 5).await.unwrap();
    assert_eq!(top[0].id, big.id);
    assert_eq!(top[0].member_count, 2);
    let alpha = top.iter().find(|g| g.id == small.id).unwrap();
    assert_eq!(alpha.member_count, 0);
}

#[tokio::test]
async fn test_interest_replace_is_wholesale() {
    let pool = init_memory_database().await.unwrap();

    let (member_id, _) = member::upsert(&pool, &upsert_payload("m-1", "Maria"))
        .await
        .unwrap();

    interest::replace_for_member(
        &pool,
        member_id,
        &[("música".to_string(), 4), ("ensino".to_string(), 2)],
    )
    .await
    .unwrap();
    assert_eq!(interest::find_by_member(&pool, member_id).await.unwrap().len(), 2);

    // The second replace drops the old links entirely
    interest::replace_for_member(&pool, member_id, &[("oração".to_string(), 9)])
        .await
        .unwrap();
    let interests = interest::find_by_member(&pool, member_id).await.unwrap();
    assert_eq!(interests.len(), 1);
    assert_eq!(interests[0].name, "oração");
    // Levels clamp into 1-5
    assert_eq!(interests[0].level, 5);

    // Areas are reused, not duplicated
    assert!(interest::find_area_by_name(&pool, "música").await.unwrap().is_some());
}

#[tokio::test]
async fn test_attendance_uniqueness_and_aggregates() {
    let pool = init_memory_database().await.unwrap();

    let (member_id, _) = member::upsert(&pool, &upsert_payload("m-1", "Maria"))
        .await
        .unwrap();

    attendance::record(&pool, member_id, "Culto", date(2024, 5, 5), EventType::Service, true)
        .await
        .unwrap();

    // Same (member, event, date) is rejected
    let duplicate =
        attendance::record(&pool, member_id, "Culto", date(2024, 5, 5), EventType::Service, true)
            .await;
    assert!(matches!(duplicate, Err(RepoError::Duplicate(_))));

    attendance::record(&pool, member_id, "Culto", date(2024, 6, 2), EventType::Service, true)
        .await
        .unwrap();
    attendance::record(&pool, member_id, "Curso Alpha", date(2024, 6, 9), EventType::Course, false)
        .await
        .unwrap();

    let (attended, total) = attendance::counts_for_member(&pool, member_id).await.unwrap();
    assert_eq!(attended, 2);
    assert_eq!(total, 3);

    let monthly = attendance::monthly_attended(&pool, date(2024, 1, 1)).await.unwrap();
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2024-05");
    assert_eq!(monthly[0].count, 1);
    assert_eq!(monthly[1].month, "2024-06");
    assert_eq!(monthly[1].count, 1);

    let recent = attendance::find_recent_by_member(&pool, member_id, date(2024, 6, 1), 10)
        .await
        .unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].event_date, date(2024, 6, 9));
}

#[tokio::test]
async fn test_member_counts_for_dashboard() {
    let pool = init_memory_database().await.unwrap();

    for (id, name, status, entry) in [
        ("m-1", "A", MemberStatus::Active, Some(date(2024, 7, 1))),
        ("m-2", "B", MemberStatus::Active, None),
        ("m-3", "C", MemberStatus::Visitor, Some(date(2020, 1, 1))),
    ] {
        let mut payload = upsert_payload(id, name);
        payload.member_status = Some(status);
        payload.entry_date = entry;
        member::upsert(&pool, &payload).await.unwrap();
    }

    assert_eq!(member::count_total(&pool).await.unwrap(), 3);

    let by_status = member::count_by_status(&pool).await.unwrap();
    let active = by_status
        .iter()
        .find(|c| c.member_status == MemberStatus::Active)
        .unwrap();
    assert_eq!(active.count, 2);

    assert_eq!(
        member::count_recent_entries(&pool, date(2024, 1, 1)).await.unwrap(),
        1
    );
}
