//! Route definitions for the `/bookings` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /               -> create_booking (student)
/// GET    /student        -> list_student_bookings (student)
/// GET    /owner          -> list_owner_bookings (hostel owner)
/// PUT    /{id}/status    -> update_booking_status (hostel owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(booking::create_booking))
        .route("/student", get(booking::list_student_bookings))
        .route("/owner", get(booking::list_owner_bookings))
        .route("/{id}/status", put(booking::update_booking_status))
}
