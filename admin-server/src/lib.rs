//! Ampeli Admin Server - church membership administration backend
//!
//! # Architecture overview
//!
//! The server fronts the remote inChurch/Ampeli API with a local SQLite
//! mirror of the member base:
//!
//! - **Auth** (`auth`): pass-through register/login against the remote API,
//!   server-side session store
//! - **Database** (`db`): SQLite mirror of members, groups, participations,
//!   interests and attendance
//! - **Sync** (`sync`): paginated reconciliation of the local mirror against
//!   the remote member listing
//! - **HTTP API** (`api`): JSON endpoints for the administration front end
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # Session store, auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer (pool + repositories)
//! ├── sync/          # Remote record mapper and synchronizer
//! └── utils/         # Logger, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod sync;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, SessionStore};
pub use crate::core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
