//! Database migration runner.
//!
//! The schema ships as idempotent DDL executed at startup. The embedded
//! engine makes directory-based migrations more ceremony than they are
//! worth at this table count.

use sqlx::SqlitePool;
use tracing::info;

use filegate_core::error::{AppError, ErrorKind};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS files (
        id TEXT PRIMARY KEY,
        owner_username TEXT NOT NULL,
        original_filename TEXT NOT NULL,
        storage_key TEXT NOT NULL UNIQUE,
        content_type TEXT NOT NULL,
        size_bytes INTEGER NOT NULL,
        uploaded_at TEXT NOT NULL,
        link_id TEXT NOT NULL UNIQUE,
        permission TEXT NOT NULL DEFAULT 'private',
        protection_secret TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_files_owner_username ON files (owner_username)",
];

/// Apply the schema to a freshly opened pool.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migration: {e}"),
                e,
            )
        })?;
    }

    info!("Database migrations completed");
    Ok(())
}
