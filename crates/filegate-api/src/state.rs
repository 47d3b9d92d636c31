//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use filegate_auth::jwt::JwtDecoder;
use filegate_core::config::AppConfig;
use filegate_database::DatabasePool;
use filegate_service::{DownloadService, FileService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped (or internally pooled) for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool, used directly only by the health check.
    pub db: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login.
    pub user_service: Arc<UserService>,
    /// Owner-facing file operations.
    pub file_service: Arc<FileService>,
    /// Link-based downloads.
    pub download_service: Arc<DownloadService>,
}
