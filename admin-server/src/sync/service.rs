//! Synchronization service
//!
//! Pages through the remote member listing and reconciles each record into
//! the local mirror. One bad record does not abort the run; its error is
//! collected into the report and the loop continues.

use std::sync::Arc;

use ampeli_client::{AmpeliClient, ClientResult, RemoteMember, RemoteMemberPage};
use async_trait::async_trait;
use shared::models::SyncReport;
use sqlx::SqlitePool;

use crate::db::repository::participation::ParticipationAssignment;
use crate::db::repository::{group, interest, member, participation};
use crate::sync::mapper;
use crate::utils::{AppError, AppResult};

/// Source of paginated remote member records
///
/// Implemented by the HTTP client; tests drive the sync loop with a stub.
#[async_trait]
pub trait MemberSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> ClientResult<RemoteMemberPage>;
}

#[async_trait]
impl MemberSource for AmpeliClient {
    async fn fetch_page(&self, page: u32) -> ClientResult<RemoteMemberPage> {
        self.list_members(page).await
    }
}

/// Reconciles local member data against the remote listing
pub struct SyncService {
    pool: SqlitePool,
    source: Arc<dyn MemberSource>,
}

impl SyncService {
    pub fn new(pool: SqlitePool, source: Arc<dyn MemberSource>) -> Self {
        Self { pool, source }
    }

    /// Run one synchronization pass
    ///
    /// Pages from 1 until the remote reports no more pages or returns an
    /// empty page. Returns created/updated counts plus per-record errors.
    pub async fn run(&self) -> SyncReport {
        let mut report = SyncReport::default();
        let mut page = 1u32;

        loop {
            let listing = match self.source.fetch_page(page).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::error!(page, error = %e, "Failed to fetch member page");
                    report
                        .errors
                        .push(format!("Falha ao buscar página {}: {}", page, e));
                    break;
                }
            };

            if listing.members.is_empty() {
                break;
            }

            for record in &listing.members {
                match self.process_record(record).await {
                    Ok(true) => report.created += 1,
                    Ok(false) => report.updated += 1,
                    Err(e) => {
                        tracing::warn!(remote_id = record.id, error = %e, "Skipping member record");
                        report.errors.push(format!("Membro {}: {}", record.id, e));
                    }
                }
            }

            if !listing.has_more {
                break;
            }
            page += 1;
        }

        tracing::info!(
            created = report.created,
            updated = report.updated,
            errors = report.errors.len(),
            "Member sync finished"
        );

        report
    }

    /// Upsert one remote record: member row, interests, participations
    async fn process_record(&self, record: &RemoteMember) -> AppResult<bool> {
        if record.full_name.trim().is_empty() {
            return Err(AppError::validation("registro sem nome"));
        }

        let data = mapper::map_remote_member(record);
        let (member_id, created) = member::upsert(&self.pool, &data).await?;

        // Interests are replaced wholesale from the incoming payload
        let interests: Vec<(String, i64)> = record
            .interests
            .iter()
            .map(|i| (i.name.clone(), i.level))
            .collect();
        interest::replace_for_member(&self.pool, member_id, &interests).await?;

        // Participations reconcile via get-or-create-then-update
        for remote in &record.participations {
            let group_name = remote.group_name.trim();
            if group_name.is_empty() {
                continue;
            }

            let group = group::get_or_create(
                &self.pool,
                group_name,
                mapper::normalize_group_type(remote.group_type.as_deref()),
            )
            .await?;

            let assignment = ParticipationAssignment {
                role: mapper::normalize_role(remote.role.as_deref()),
                start_date: mapper::parse_remote_date(remote.start_date.as_deref())
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
                end_date: mapper::parse_remote_date(remote.end_date.as_deref()),
                is_current: remote.is_current,
            };
            participation::upsert(&self.pool, member_id, group.id, &assignment).await?;
        }

        Ok(created)
    }
}
