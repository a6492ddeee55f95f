//! Notification entity model.

use hostelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Created by system logic only; the owning recipient may mark it read or
/// delete it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub severity: String,
    pub message: String,
    pub related_kind: Option<String>,
    pub related_id: Option<DbId>,
    pub is_read: bool,
    pub created_at: Timestamp,
}
