//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement, so role gating happens before the handler
//! body runs. Ownership checks (a specific booking's owner, an order's
//! suppliers) remain in the handlers, since they need the entity loaded.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hostelhub_core::error::CoreError;
use hostelhub_core::roles::{ROLE_HOSTEL_OWNER, ROLE_STUDENT, ROLE_SUPPLIER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `student` role. Rejects with 403 Forbidden otherwise.
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_STUDENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Student role required".into(),
            )));
        }
        Ok(RequireStudent(user))
    }
}

/// Requires the `hostel_owner` role. Rejects with 403 Forbidden otherwise.
pub struct RequireHostelOwner(pub AuthUser);

impl FromRequestParts<AppState> for RequireHostelOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_HOSTEL_OWNER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Hostel owner role required".into(),
            )));
        }
        Ok(RequireHostelOwner(user))
    }
}

/// Requires the `supplier` role. Rejects with 403 Forbidden otherwise.
pub struct RequireSupplier(pub AuthUser);

impl FromRequestParts<AppState> for RequireSupplier {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_SUPPLIER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Supplier role required".into(),
            )));
        }
        Ok(RequireSupplier(user))
    }
}
