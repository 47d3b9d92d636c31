//! Identity extractors that pull the JWT from the Authorization header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filegate_core::error::AppError;
use filegate_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context, required.
///
/// Rejects the request with 401 when the header is missing or the token
/// does not verify.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts, state)?;
        Ok(AuthUser(ctx))
    }
}

/// Extracted user context for endpoints that also serve anonymous
/// callers. A missing or invalid token yields `None` instead of 401; the
/// exposure rules downstream decide what anonymous callers may see.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(context_from_parts(parts, state).ok()))
    }
}

/// Shared bearer token handling for both extractors.
fn context_from_parts(parts: &Parts, state: &AppState) -> Result<RequestContext, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.verify(token)?;
    Ok(RequestContext::new(claims.sub))
}
