//! Notification message planning.
//!
//! Pure mapping from status-transition events to (severity, message)
//! pairs. Persistence and fan-out live in the API layer; this module only
//! decides the wording and severity of each message.

use crate::status::{BookingStatus, OrderStatus};
use crate::types::DbId;

/// Severity tag carried by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// The string stored in the `notifications.severity` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// Typed reference to the entity that triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedEntity {
    Order(DbId),
    Booking(DbId),
    Hostel(DbId),
}

impl RelatedEntity {
    /// The string stored in the `notifications.related_kind` column.
    pub fn kind(self) -> &'static str {
        match self {
            RelatedEntity::Order(_) => "Order",
            RelatedEntity::Booking(_) => "Booking",
            RelatedEntity::Hostel(_) => "Hostel",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            RelatedEntity::Order(id) | RelatedEntity::Booking(id) | RelatedEntity::Hostel(id) => {
                id
            }
        }
    }
}

/// Message for the student when the hostel owner changes a booking's status.
///
/// Returns `None` for `Pending`: re-setting a booking back to its initial
/// state has no student-facing wording and dispatches nothing.
pub fn booking_status_change(
    status: BookingStatus,
    hostel_name: &str,
) -> Option<(Severity, String)> {
    match status {
        BookingStatus::Approved => Some((
            Severity::Success,
            format!("Your booking request for \"{hostel_name}\" has been approved!"),
        )),
        BookingStatus::Rejected => Some((
            Severity::Error,
            format!("Your booking request for \"{hostel_name}\" has been rejected."),
        )),
        BookingStatus::Cancelled => Some((
            Severity::Error,
            format!("Your booking for \"{hostel_name}\" has been cancelled."),
        )),
        BookingStatus::Pending => None,
    }
}

/// Message for the hostel owner when a student submits a booking request.
pub fn booking_requested(hostel_name: &str, student_name: &str) -> (Severity, String) {
    (
        Severity::Info,
        format!("New booking request for {hostel_name} from {student_name}"),
    )
}

/// Message for the customer when a supplier changes an order's status.
///
/// Unlike bookings, every target state produces a message; states without
/// specific wording fall back to a generic update line.
pub fn order_status_change(status: OrderStatus, product_names: &str) -> (Severity, String) {
    match status {
        OrderStatus::Processing => (
            Severity::Info,
            format!("Your order for \"{product_names}\" is now being processed."),
        ),
        OrderStatus::Shipped => (
            Severity::Success,
            format!("Your order for \"{product_names}\" has been shipped!"),
        ),
        OrderStatus::Delivered => (
            Severity::Success,
            format!("Your order for \"{product_names}\" has been delivered!"),
        ),
        OrderStatus::Cancelled => (
            Severity::Error,
            format!("Your order for \"{product_names}\" has been cancelled."),
        ),
        OrderStatus::Pending => (
            Severity::Info,
            format!("Your order for \"{product_names}\" status has been updated to {status}."),
        ),
    }
}

/// Message for a supplier when an order containing their products is placed.
pub fn order_received(product_names: &str) -> (Severity, String) {
    (
        Severity::Info,
        format!("New order received for: {product_names}"),
    )
}
