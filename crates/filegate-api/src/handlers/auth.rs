//! Registration and login handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use filegate_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .register(&req.username, &req.password)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /login
///
/// Credential problems of any shape come back as 401, never 400, so the
/// response does not hint at which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state.user_service.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}
