//! Owner-facing file management: upload, listing, metadata, deletion,
//! and permission changes.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};

use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_core::traits::blob::BlobStore;
use filegate_database::repositories::file::FileRepository;
use filegate_entity::file::{CreateFileRecord, FileRecord, Permission};
use filegate_storage::mime_from_name;

use crate::context::RequestContext;
use crate::share::{AccessEngine, LinkGenerator};

/// Orchestrates the blob store and the file registry for everything an
/// owner does to their own files.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File registry.
    file_repo: Arc<FileRepository>,
    /// Blob store for raw content.
    blobs: Arc<dyn BlobStore>,
    /// Link id generator.
    links: LinkGenerator,
    /// Ownership and transition rules.
    access: Arc<AccessEngine>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        blobs: Arc<dyn BlobStore>,
        links: LinkGenerator,
        access: Arc<AccessEngine>,
    ) -> Self {
        Self {
            file_repo,
            blobs,
            links,
            access,
        }
    }

    /// Stores the uploaded bytes and registers the file under a fresh
    /// link id. New files start out private.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        original_filename: &str,
        content_type: Option<String>,
        data: Bytes,
    ) -> AppResult<FileRecord> {
        let filename = original_filename.trim();
        if filename.is_empty() {
            return Err(AppError::validation("Filename cannot be empty"));
        }

        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .or_else(|| mime_from_name(filename))
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let size_bytes = data.len() as i64;

        let storage_key = self.blobs.put(filename, data).await?;

        let create = CreateFileRecord {
            owner_username: ctx.username.clone(),
            original_filename: filename.to_string(),
            storage_key: storage_key.clone(),
            content_type,
            size_bytes,
            link_id: self.links.generate(),
        };

        // If registering fails, remove the blob so nothing orphaned is
        // left behind.
        let record = match self.file_repo.create(&create).await {
            Ok(record) => record,
            Err(e) => {
                if let Err(cleanup) = self.blobs.delete(&storage_key).await {
                    error!(
                        key = %storage_key,
                        error = %cleanup,
                        "Failed to remove blob after registry insert failed"
                    );
                }
                return Err(e);
            }
        };

        info!(
            owner = %ctx.username,
            file_id = %record.id,
            link_id = %record.link_id,
            size_bytes,
            "File uploaded"
        );
        Ok(record)
    }

    /// Lists every file owned by the caller, newest first.
    pub async fn list_owned(&self, ctx: &RequestContext) -> AppResult<Vec<FileRecord>> {
        self.file_repo.find_all_by_owner(&ctx.username).await
    }

    /// Returns the full metadata of a file the caller owns.
    pub async fn get_metadata(&self, ctx: &RequestContext, id: &str) -> AppResult<FileRecord> {
        self.find_owned(ctx, id).await
    }

    /// Deletes a file the caller owns. The blob is removed first; if
    /// that fails, the registry row is left untouched.
    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> AppResult<()> {
        let record = self.find_owned(ctx, id).await?;

        self.blobs.delete(&record.storage_key).await?;
        self.file_repo.delete(&record.id).await?;

        info!(owner = %ctx.username, file_id = %record.id, "File deleted");
        Ok(())
    }

    /// Changes the permission state of a file the caller owns.
    pub async fn change_permission(
        &self,
        ctx: &RequestContext,
        id: &str,
        target: Permission,
        password: Option<&str>,
    ) -> AppResult<()> {
        let record = self.find_owned(ctx, id).await?;
        let secret_hash = self.access.prepare_transition(target, password)?;

        self.file_repo
            .update_permission(&record.id, target, secret_hash.as_deref())
            .await?;

        info!(
            owner = %ctx.username,
            file_id = %record.id,
            permission = %target,
            "Permission changed"
        );
        Ok(())
    }

    /// Looks up a record by id and enforces strict ownership.
    async fn find_owned(&self, ctx: &RequestContext, id: &str) -> AppResult<FileRecord> {
        let record = self
            .file_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        self.access.require_owner(&record, &ctx.username)?;
        Ok(record)
    }
}
