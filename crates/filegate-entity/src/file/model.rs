//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::permission::Permission;

/// A file registered in Filegate.
///
/// The record is looked up two ways: by `id` for owner-facing operations
/// and by `link_id` for downloads. Both identifiers, the owner, and the
/// storage key are immutable after creation; only the permission state and
/// its protection secret ever change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Unique record identifier (UUIDv4, stored as text).
    pub id: String,
    /// Username of the owner.
    pub owner_username: String,
    /// Filename as supplied at upload.
    pub original_filename: String,
    /// Opaque name under which the bytes are kept in the blob store.
    pub storage_key: String,
    /// MIME type reported at upload.
    pub content_type: String,
    /// Content size in bytes.
    pub size_bytes: i64,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Public link identifier used for download URLs.
    pub link_id: String,
    /// Current exposure state.
    pub permission: Permission,
    /// Argon2 hash of the download password. Set if and only if the
    /// permission state is `Protected`.
    #[serde(skip_serializing)]
    pub protection_secret: Option<String>,
}

impl FileRecord {
    /// Check whether the given username owns this record.
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner_username == username
    }
}

/// Data required to register a newly uploaded file.
///
/// New records always start private with no protection secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRecord {
    /// Username of the uploader.
    pub owner_username: String,
    /// Filename as supplied by the client.
    pub original_filename: String,
    /// Storage key returned by the blob store.
    pub storage_key: String,
    /// MIME type reported by the client.
    pub content_type: String,
    /// Content size in bytes.
    pub size_bytes: i64,
    /// Freshly generated link identifier.
    pub link_id: String,
}
