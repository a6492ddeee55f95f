//! Handlers for the `/bookings` resource.
//!
//! Students create booking requests against approved hostels; the hostel
//! owner approves, rejects, or cancels them. Status changes notify the
//! student; new requests notify the owner. Notification dispatch is
//! best-effort and never fails the request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use hostelhub_core::error::CoreError;
use hostelhub_core::listing::HOSTEL_STATUS_APPROVED;
use hostelhub_core::notify::{booking_requested, booking_status_change, RelatedEntity};
use hostelhub_core::status::BookingStatus;
use hostelhub_core::types::DbId;
use hostelhub_db::models::booking::CreateBooking;
use hostelhub_db::repositories::{BookingRepo, HostelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireHostelOwner, RequireStudent};
use crate::notify;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub hostel_id: DbId,
    #[validate(length(min = 1, message = "student_name is required"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(range(min = 1, message = "seats must be at least 1"))]
    pub seats: i32,
    pub check_in_date: NaiveDate,
}

/// Request body for `PUT /bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

/// POST /api/v1/bookings
///
/// Create a booking request against an approved hostel. The hostel's
/// owner is captured onto the booking and receives an info notification.
pub async fn create_booking(
    RequireStudent(auth): RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let hostel = HostelRepo::find_by_id(&state.pool, input.hostel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hostel",
            id: input.hostel_id,
        }))?;

    if hostel.status != HOSTEL_STATUS_APPROVED {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot book unapproved hostels".into(),
        )));
    }

    let create = CreateBooking {
        student_id: auth.user_id,
        // Captured from the hostel at creation time, not re-derived later.
        owner_id: hostel.owner_id,
        hostel_id: hostel.id,
        student_name: input.student_name,
        phone: input.phone,
        email: input.email,
        seats: input.seats,
        check_in_date: input.check_in_date,
    };

    let booking = BookingRepo::create(&state.pool, &create).await?;

    let detail = BookingRepo::find_detail(&state.pool, booking.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Booking {} vanished after insert", booking.id))
        })?;

    tracing::info!(
        student_id = auth.user_id,
        hostel_id = hostel.id,
        booking_id = booking.id,
        "Booking request created"
    );

    // Best-effort side channel: the booking is already persisted.
    let (severity, message) = booking_requested(&detail.hostel_name, &detail.student_name);
    notify::dispatch(
        &state.pool,
        detail.owner_id,
        severity,
        &message,
        Some(RelatedEntity::Booking(booking.id)),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/bookings/student
///
/// List the authenticated student's own booking requests, newest first.
pub async fn list_student_bookings(
    RequireStudent(auth): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list_for_student(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/owner
///
/// List booking requests against the authenticated owner's hostels,
/// newest first.
pub async fn list_owner_bookings(
    RequireHostelOwner(auth): RequireHostelOwner,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// PUT /api/v1/bookings/{id}/status
///
/// Set a booking's status. Only the captured hostel owner may transition
/// it; any valid status value is accepted regardless of the current one.
/// If the value actually changed, the student receives one notification
/// with severity mapped from the target state. Re-setting the current
/// value persists but dispatches nothing.
pub async fn update_booking_status(
    RequireHostelOwner(auth): RequireHostelOwner,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    Json(input): Json<UpdateBookingStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let new_status: BookingStatus = input
        .status
        .parse()
        .map_err(|msg: String| AppError::Core(CoreError::Validation(msg)))?;

    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    if booking.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only update bookings for your own hostels".into(),
        )));
    }

    let previous_status = booking.status;
    BookingRepo::update_status(&state.pool, booking_id, new_status.as_str()).await?;

    let detail = BookingRepo::find_detail(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    tracing::info!(
        owner_id = auth.user_id,
        booking_id,
        previous_status = %previous_status,
        status = %new_status,
        "Booking status updated"
    );

    if previous_status != new_status.as_str() {
        if let Some((severity, message)) =
            booking_status_change(new_status, &detail.hostel_name)
        {
            notify::dispatch(
                &state.pool,
                detail.student_id,
                severity,
                &message,
                Some(RelatedEntity::Booking(booking_id)),
            )
            .await;
        }
    }

    Ok(Json(DataResponse { data: detail }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            hostel_id: 1,
            student_name: "Ayesha Khan".into(),
            phone: "0300-1234567".into(),
            email: "ayesha@example.com".into(),
            seats: 2,
            check_in_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    #[test]
    fn test_valid_booking_request_passes() {
        assert_matches!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut request = valid_request();
        request.student_name.clear();
        assert_matches!(request.validate(), Err(_));

        let mut request = valid_request();
        request.phone.clear();
        assert_matches!(request.validate(), Err(_));
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut request = valid_request();
        request.seats = 0;
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("seats must be at least 1"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".into();
        assert_matches!(request.validate(), Err(_));
    }
}
