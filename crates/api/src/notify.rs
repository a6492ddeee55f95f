//! Notification dispatcher.
//!
//! Persists notifications planned by `hostelhub_core::notify` as a
//! best-effort side channel. Dispatch runs only after the primary write
//! has committed, and a dispatch failure must never fail the request:
//! the error is logged and swallowed.

use hostelhub_core::notify::{RelatedEntity, Severity};
use hostelhub_core::types::DbId;
use hostelhub_db::models::notification::Notification;
use hostelhub_db::repositories::NotificationRepo;
use hostelhub_db::DbPool;

/// Persist a notification for a single recipient.
///
/// Returns the created row, or `None` if persistence failed. The failure
/// is logged at error level; callers treat the primary operation as
/// successful either way.
pub async fn dispatch(
    pool: &DbPool,
    recipient_id: DbId,
    severity: Severity,
    message: &str,
    related: Option<RelatedEntity>,
) -> Option<Notification> {
    let result = NotificationRepo::create(
        pool,
        recipient_id,
        severity.as_str(),
        message,
        related.map(RelatedEntity::kind),
        related.map(RelatedEntity::id),
    )
    .await;

    match result {
        Ok(notification) => {
            tracing::debug!(
                recipient_id,
                severity = severity.as_str(),
                notification_id = notification.id,
                "Notification dispatched"
            );
            Some(notification)
        }
        Err(err) => {
            tracing::error!(
                recipient_id,
                severity = severity.as_str(),
                error = %err,
                "Failed to dispatch notification"
            );
            None
        }
    }
}
