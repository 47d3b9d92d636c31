//! Link-based download resolution and streaming.

use std::sync::Arc;

use tracing::{debug, error, info};

use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_core::traits::blob::{BlobStore, ByteStream};
use filegate_database::repositories::file::FileRepository;
use filegate_entity::file::FileRecord;

use crate::share::AccessEngine;

/// Serves shared files to callers that pass the exposure rules.
#[derive(Clone)]
pub struct DownloadService {
    /// File registry.
    file_repo: Arc<FileRepository>,
    /// Blob store for raw content.
    blobs: Arc<dyn BlobStore>,
    /// Exposure rule evaluation.
    access: Arc<AccessEngine>,
}

impl std::fmt::Debug for DownloadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadService").finish()
    }
}

/// A resolved download: the registry record plus the opened byte stream.
pub struct FileDownload {
    /// The file's registry record.
    pub record: FileRecord,
    /// Streamed blob content.
    pub stream: ByteStream,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        blobs: Arc<dyn BlobStore>,
        access: Arc<AccessEngine>,
    ) -> Self {
        Self {
            file_repo,
            blobs,
            access,
        }
    }

    /// Resolves a link id, applies the exposure rules, and opens the
    /// blob for streaming.
    pub async fn download(
        &self,
        link_id: &str,
        identity: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<FileDownload> {
        let record = self
            .file_repo
            .find_by_link_id(link_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if let Err(denied) = self.access.authorize_download(&record, identity, password) {
            debug!(
                link_id = %record.link_id,
                reason = %denied.message,
                "Download denied"
            );
            return Err(denied);
        }

        let stream = match self.blobs.get(&record.storage_key).await {
            Ok(stream) => stream,
            Err(e) if e.kind == ErrorKind::NotFound => {
                error!(
                    file_id = %record.id,
                    key = %record.storage_key,
                    "Registry row exists but its blob is missing"
                );
                return Err(AppError::not_found("File content is no longer available"));
            }
            Err(e) => return Err(e),
        };

        info!(file_id = %record.id, link_id = %record.link_id, "Serving download");
        Ok(FileDownload { record, stream })
    }
}
