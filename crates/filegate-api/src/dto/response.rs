//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filegate_entity::file::{FileRecord, Permission};

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// Upload response carrying the shareable link id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Link id for the download URL.
    pub link_id: String,
}

/// Compact file entry for the listing endpoint.
///
/// Size, content type, and timestamp are intentionally left out of the
/// list view; they are available from the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummaryResponse {
    /// Internal record id.
    pub id: String,
    /// Filename as uploaded.
    pub original_filename: String,
    /// Shareable link id.
    pub link_id: String,
    /// Current permission state.
    pub permission: Permission,
}

impl From<FileRecord> for FileSummaryResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            original_filename: record.original_filename,
            link_id: record.link_id,
            permission: record.permission,
        }
    }
}

/// Full file metadata for the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadataResponse {
    /// Internal record id.
    pub id: String,
    /// Byte size of the stored content.
    pub size: i64,
    /// Owning username.
    pub owner: String,
    /// Filename as uploaded.
    pub filename: String,
    /// When the file was uploaded.
    pub upload_time: DateTime<Utc>,
    /// Shareable link id.
    pub link_id: String,
    /// Current permission state.
    pub permission: Permission,
    /// MIME type served on download.
    pub content_type: String,
}

impl From<FileRecord> for FileMetadataResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            size: record.size_bytes,
            owner: record.owner_username,
            filename: record.original_filename,
            upload_time: record.uploaded_at,
            link_id: record.link_id,
            permission: record.permission,
            content_type: record.content_type,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Server version.
    pub version: String,
}
