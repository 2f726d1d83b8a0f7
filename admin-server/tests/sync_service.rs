//! Synchronizer integration tests
//!
//! Drive the page loop with a stub source over an in-memory database and
//! check the upsert semantics the front end depends on.

use std::sync::Arc;

use admin_server::db::init_memory_database;
use admin_server::db::repository::{group, interest, member, participation};
use admin_server::sync::{MemberSource, SyncService};
use ampeli_client::{ClientError, ClientResult, RemoteMember, RemoteMemberPage};
use async_trait::async_trait;
use shared::models::{MemberStatus, ParticipationRole};

/// Serves a fixed list of pages; page numbers are 1-based
struct StubSource {
    pages: Vec<RemoteMemberPage>,
}

#[async_trait]
impl MemberSource for StubSource {
    async fn fetch_page(&self, page: u32) -> ClientResult<RemoteMemberPage> {
        self.pages
            .get((page as usize).saturating_sub(1))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("page {page}")))
    }
}

/// A source whose first fetch already fails
struct DownSource;

#[async_trait]
impl MemberSource for DownSource {
    async fn fetch_page(&self, _page: u32) -> ClientResult<RemoteMemberPage> {
        Err(ClientError::ServiceUnavailable)
    }
}

fn remote_member(value: serde_json::Value) -> RemoteMember {
    serde_json::from_value(value).expect("valid remote member json")
}

fn single_page(members: Vec<RemoteMember>) -> Vec<RemoteMemberPage> {
    vec![RemoteMemberPage {
        members,
        page: 1,
        has_more: false,
    }]
}

fn maria() -> RemoteMember {
    remote_member(serde_json::json!({
        "id": 101,
        "fullName": "Maria Silva",
        "email": "maria@teste.com",
        "phone": "11999990000",
        "memberStatus": "ativo",
        "birthDate": "1985-03-20",
        "entryDate": "2023-01-10",
        "attendanceCount": 4,
        "volunteerArea": "louvor",
        "interests": [
            {"name": "música", "level": 4},
            {"name": "ensino", "level": 2},
        ],
        "participations": [
            {"groupName": "Célula Norte", "groupType": "célula", "role": "membro", "startDate": "2023-02-01"},
        ],
    }))
}

#[tokio::test]
async fn test_sync_creates_member_with_relations() {
    let pool = init_memory_database().await.unwrap();
    let service = SyncService::new(pool.clone(), Arc::new(StubSource { pages: single_page(vec![maria()]) }));

    let report = service.run().await;
    assert_eq!(report.created, 1);
    assert_eq!(report.updated, 0);
    assert!(report.errors.is_empty());

    let stored = member::find_by_inchurch_id(&pool, "101")
        .await
        .unwrap()
        .expect("member should exist");
    assert_eq!(stored.full_name, "Maria Silva");
    assert_eq!(stored.member_status, MemberStatus::Active);
    // 4 attendances (40) + 1 current participation (20) + volunteer (10)
    assert_eq!(stored.engagement_score, 70);

    let interests = interest::find_by_member(&pool, stored.id).await.unwrap();
    assert_eq!(interests.len(), 2);

    let current = participation::find_by_member(&pool, stored.id, true).await.unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].group_name, "Célula Norte");
    assert_eq!(current[0].role, ParticipationRole::Member);
}

#[tokio::test]
async fn test_sync_twice_upserts_without_duplicates() {
    let pool = init_memory_database().await.unwrap();

    let first = SyncService::new(
        pool.clone(),
        Arc::new(StubSource { pages: single_page(vec![maria()]) }),
    );
    assert_eq!(first.run().await.created, 1);

    // Same record again, now promoted to leader and with one more interest
    let mut promoted = maria();
    promoted.participations[0].role = Some("líder".into());
    promoted.interests.push(ampeli_client::RemoteInterest {
        name: "oração".into(),
        level: 5,
    });

    let second = SyncService::new(
        pool.clone(),
        Arc::new(StubSource { pages: single_page(vec![promoted]) }),
    );
    let report = second.run().await;
    assert_eq!(report.created, 0);
    assert_eq!(report.updated, 1);

    // Exactly one member row for the external id
    let stored = member::find_by_inchurch_id(&pool, "101")
        .await
        .unwrap()
        .expect("member should exist");

    // Exactly one participation per (member, group), role updated in place
    let cell = group::find_by_name(&pool, "Célula Norte")
        .await
        .unwrap()
        .expect("group should exist");
    assert_eq!(
        participation::count_for_pair(&pool, stored.id, cell.id).await.unwrap(),
        1
    );
    let current = participation::find_by_member(&pool, stored.id, true).await.unwrap();
    assert_eq!(current[0].role, ParticipationRole::Leader);

    // Interests were replaced wholesale with the new set
    let interests = interest::find_by_member(&pool, stored.id).await.unwrap();
    assert_eq!(interests.len(), 3);
}

#[tokio::test]
async fn test_sync_unparsable_birth_date_leaves_field_unset() {
    let pool = init_memory_database().await.unwrap();

    let mut record = maria();
    record.birth_date = Some("20/03/1985".into());

    let service = SyncService::new(
        pool.clone(),
        Arc::new(StubSource { pages: single_page(vec![record]) }),
    );
    let report = service.run().await;

    // The record still syncs; only the date is dropped
    assert_eq!(report.created, 1);
    assert!(report.errors.is_empty());

    let stored = member::find_by_inchurch_id(&pool, "101")
        .await
        .unwrap()
        .expect("member should exist");
    assert!(stored.birth_date.is_none());
}

#[tokio::test]
async fn test_sync_collects_record_errors_without_aborting() {
    let pool = init_memory_database().await.unwrap();

    let nameless = remote_member(serde_json::json!({
        "id": 202,
        "fullName": "   ",
    }));

    let service = SyncService::new(
        pool.clone(),
        Arc::new(StubSource { pages: single_page(vec![nameless, maria()]) }),
    );
    let report = service.run().await;

    // The bad record lands in errors; the good one still syncs
    assert_eq!(report.created, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("202"));
    assert!(member::find_by_inchurch_id(&pool, "101").await.unwrap().is_some());
    assert!(member::find_by_inchurch_id(&pool, "202").await.unwrap().is_none());
}

#[tokio::test]
async fn test_sync_pages_until_has_more_is_false() {
    let pool = init_memory_database().await.unwrap();

    let second = remote_member(serde_json::json!({
        "id": 301,
        "fullName": "João Souza",
        "memberStatus": "novo",
    }));

    let pages = vec![
        RemoteMemberPage {
            members: vec![maria()],
            page: 1,
            has_more: true,
        },
        RemoteMemberPage {
            members: vec![second],
            page: 2,
            has_more: false,
        },
    ];

    let service = SyncService::new(pool.clone(), Arc::new(StubSource { pages }));
    let report = service.run().await;

    assert_eq!(report.created, 2);
    assert!(report.errors.is_empty());

    let joao = member::find_by_inchurch_id(&pool, "301")
        .await
        .unwrap()
        .expect("second page member should exist");
    assert_eq!(joao.member_status, MemberStatus::New);
}

#[tokio::test]
async fn test_sync_unreachable_source_reports_failure() {
    let pool = init_memory_database().await.unwrap();

    let service = SyncService::new(pool.clone(), Arc::new(DownSource));
    let report = service.run().await;

    assert_eq!(report.processed(), 0);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(member::count_total(&pool).await.unwrap(), 0);
}
