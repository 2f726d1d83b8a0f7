//! Sync API Handlers

use axum::{Extension, Json, extract::State};
use shared::client::SyncTriggerResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::sync::SyncService;

/// POST /api/sync/inchurch - run one synchronization pass
///
/// Always answers 200; record-level failures ride along in `data.errors`.
/// `success` only flips to false when nothing could be processed at all.
pub async fn trigger(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Json<SyncTriggerResponse> {
    tracing::info!(user_id = %user.id, "Sync triggered");

    let service = SyncService::new(state.pool.clone(), state.api.clone());
    let report = service.run().await;

    let total_failure = report.processed() == 0 && !report.errors.is_empty();
    let message = if total_failure {
        format!("Erro na sincronização: {}", report.errors[0])
    } else {
        format!(
            "Sincronização concluída. {} membros atualizados.",
            report.processed()
        )
    };

    Json(SyncTriggerResponse {
        success: !total_failure,
        message,
        data: Some(report),
    })
}
