//! File record repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_entity::file::model::{CreateFileRecord, FileRecord};
use filegate_entity::file::permission::Permission;

/// Repository for file record CRUD and link resolution.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: SqlitePool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a record by primary key.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file by id", e))
    }

    /// Find a record by its public link identifier.
    ///
    /// This is the only lookup the download path uses.
    pub async fn find_by_link_id(&self, link_id: &str) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE link_id = ?")
            .bind(link_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find file by link id", e)
            })
    }

    /// List all records owned by a user, newest first.
    pub async fn find_all_by_owner(&self, username: &str) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM files WHERE owner_username = ? ORDER BY uploaded_at DESC",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Register a newly uploaded file. Records always start private with
    /// no protection secret.
    pub async fn create(&self, data: &CreateFileRecord) -> AppResult<FileRecord> {
        let id = Uuid::new_v4().to_string();
        let uploaded_at = Utc::now();

        sqlx::query(
            "INSERT INTO files (id, owner_username, original_filename, storage_key, \
             content_type, size_bytes, uploaded_at, link_id, permission, protection_secret) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, NULL)",
        )
        .bind(&id)
        .bind(&data.owner_username)
        .bind(&data.original_filename)
        .bind(&data.storage_key)
        .bind(&data.content_type)
        .bind(data.size_bytes)
        .bind(uploaded_at)
        .bind(&data.link_id)
        .bind(Permission::Private)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))?;

        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load created file record", e)
            })
    }

    /// Set the permission state and the protection secret in one statement,
    /// so readers never observe a protected row without its secret.
    pub async fn update_permission(
        &self,
        id: &str,
        permission: Permission,
        protection_secret: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query("UPDATE files SET permission = ?, protection_secret = ? WHERE id = ?")
            .bind(permission)
            .bind(protection_secret)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update permission", e)
            })?;
        Ok(())
    }

    /// Remove a record. The caller is responsible for having removed the
    /// blob first.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete file record", e)
            })?;
        Ok(())
    }
}
