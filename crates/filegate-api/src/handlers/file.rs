//! Owner-facing file handlers: upload, listing, metadata, deletion, and
//! permission changes.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;

use filegate_core::error::AppError;
use filegate_entity::file::Permission;

use crate::dto::request::ChangePermissionRequest;
use crate::dto::response::{
    FileMetadataResponse, FileSummaryResponse, MessageResponse, UploadResponse,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /upload (multipart, field name `file`)
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(String::from);
            content_type = field.content_type().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name = file_name.ok_or_else(|| AppError::validation("A file field is required"))?;
    let data = data.ok_or_else(|| AppError::validation("A file field is required"))?;

    let record = state
        .file_service
        .upload(&auth, &file_name, content_type, data)
        .await?;

    Ok(Json(UploadResponse {
        link_id: record.link_id,
    }))
}

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FileSummaryResponse>>, AppError> {
    let records = state.file_service.list_owned(&auth).await?;

    Ok(Json(
        records.into_iter().map(FileSummaryResponse::from).collect(),
    ))
}

/// GET /files/{id}
pub async fn get_metadata(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileMetadataResponse>, AppError> {
    let record = state.file_service.get_metadata(&auth, &id).await?;

    Ok(Json(FileMetadataResponse::from(record)))
}

/// DELETE /files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.file_service.delete(&auth, &id).await?;

    Ok(Json(MessageResponse::new("File deleted")))
}

/// PUT /files/{id}/permission
pub async fn change_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<ChangePermissionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let target = Permission::from_str(&req.permission)?;

    state
        .file_service
        .change_permission(&auth, &id, target, req.password.as_deref())
        .await?;

    Ok(Json(MessageResponse::new("Permission updated")))
}
