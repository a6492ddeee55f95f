//! Authentication extractor.
//!
//! Taking [`AuthUser`] as a handler argument requires a valid Bearer
//! token; the role gates in [`rbac`](super::rbac) build on it. There is
//! no session store -- the token claims are the whole identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hostelhub_core::error::CoreError;
use hostelhub_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated actor, decoded from the `Authorization` header.
///
/// Carries only what authorization decisions need: the subject id and
/// the role claim. Handlers that scope queries to the caller (booking
/// lists, notifications) use `user_id` directly.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// Role claim; matched against the `roles` constants.
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
