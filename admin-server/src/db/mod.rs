//! Database layer
//!
//! SQLite pool initialization plus one repository module per entity.

pub mod repository;
mod schema;

use std::path::Path;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::utils::{AppError, AppResult};

/// Initialize the database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> AppResult<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::internal(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

    if newly_created {
        tracing::info!("Initialized new database: {}", db_path.display());
    } else {
        tracing::info!("Opened existing database: {}", db_path.display());
    }

    configure(&pool).await?;
    schema::apply(&pool).await?;

    Ok(pool)
}

/// Open an in-memory database with the schema applied
///
/// A single connection keeps the in-memory database alive and shared.
/// Used by tests and tooling.
pub async fn init_memory_database() -> AppResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {}", e)))?;

    configure(&pool).await?;
    schema::apply(&pool).await?;

    Ok(pool)
}

async fn configure(pool: &SqlitePool) -> AppResult<()> {
    // Foreign keys are off by default in SQLite
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(())
}
