//! Server state

use std::sync::Arc;
use std::time::Duration;

use ampeli_client::{AmpeliClient, ClientConfig};
use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::core::Config;
use crate::utils::AppResult;

/// Interval between expired-session sweeps
const SESSION_SWEEP_SECS: u64 = 300;

/// Server state - shared handles to all services
///
/// Cloning is cheap: the pool and the stores are reference-counted.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | pool | SqlitePool | Local member mirror |
/// | sessions | Arc<SessionStore> | Server-side login sessions |
/// | api | Arc<AmpeliClient> | Remote inChurch/Ampeli API client |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Local SQLite database
    pub pool: SqlitePool,
    /// Session store (opaque bearer tokens)
    pub sessions: Arc<SessionStore>,
    /// Remote API client
    pub api: Arc<AmpeliClient>,
}

impl ServerState {
    /// Create server state from already-built parts
    ///
    /// Usually [`ServerState::initialize`] is used instead.
    pub fn new(
        config: Config,
        pool: SqlitePool,
        sessions: Arc<SessionStore>,
        api: Arc<AmpeliClient>,
    ) -> Self {
        Self {
            config,
            pool,
            sessions,
            api,
        }
    }

    /// Initialize the server state
    ///
    /// 1. Ensure the work directory exists
    /// 2. Open the database (work_dir/database/ampeli.db) and apply schema
    /// 3. Build the session store and the remote API client
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_path = config.database_path();
        let pool = crate::db::init_database(&db_path).await?;

        let sessions = Arc::new(SessionStore::new(config.session_ttl_minutes));

        let client_config = ClientConfig {
            base_url: config.api_base_url.clone(),
            timeout_secs: config.api_timeout_secs,
            token: None,
        };
        let api = Arc::new(AmpeliClient::new(&client_config));

        Ok(Self::new(config.clone(), pool, sessions, api))
    }

    /// Spawn background tasks
    ///
    /// Must be called before `Server::run()`. Currently only the periodic
    /// expired-session sweep.
    pub fn start_background_tasks(&self) {
        let sessions = self.sessions.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(SESSION_SWEEP_SECS));
            loop {
                interval.tick().await;
                let removed = sessions.purge_expired();
                if removed > 0 {
                    tracing::debug!(removed, "Purged expired sessions");
                }
            }
        });
    }
}
