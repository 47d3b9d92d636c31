//! Link-based download handler.

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde::Deserialize;

use filegate_core::error::AppError;

use crate::extractors::OptionalAuthUser;
use crate::state::AppState;

/// Query parameters for downloads.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQuery {
    /// Protection password for protected files.
    pub password: Option<String>,
}

/// GET /download/{link_id}?password=...
///
/// The bearer token is optional here; anonymous callers are served
/// according to the file's permission state.
pub async fn download(
    State(state): State<AppState>,
    OptionalAuthUser(identity): OptionalAuthUser,
    Path(link_id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let username = identity.as_ref().map(|ctx| ctx.username.as_str());

    let download = state
        .download_service
        .download(&link_id, username, query.password.as_deref())
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, &download.record.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            inline_disposition(&download.record.original_filename),
        )
        .header(header::CONTENT_LENGTH, download.record.size_bytes)
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Builds an inline Content-Disposition header value. Characters that are
/// not printable ASCII, plus the quote and backslash, are replaced so the
/// value always parses as a header.
fn inline_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("inline; filename=\"{safe}\"")
}
