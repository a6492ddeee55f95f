//! Booking entity models and DTOs.

use chrono::NaiveDate;
use hostelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub student_id: DbId,
    /// The hostel's owner, captured at creation time.
    pub owner_id: DbId,
    pub hostel_id: DbId,
    pub student_name: String,
    pub phone: String,
    pub email: String,
    pub seats: i32,
    pub check_in_date: NaiveDate,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A booking with its student, owner, and hostel references resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingDetail {
    pub id: DbId,
    pub student_id: DbId,
    pub owner_id: DbId,
    pub hostel_id: DbId,
    pub student_name: String,
    pub phone: String,
    pub email: String,
    pub seats: i32,
    pub check_in_date: NaiveDate,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub student_username: String,
    pub student_full_name: String,
    pub owner_username: String,
    pub owner_full_name: String,
    pub hostel_name: String,
    pub hostel_price: i64,
}

/// Fields required to insert a new booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub student_id: DbId,
    pub owner_id: DbId,
    pub hostel_id: DbId,
    pub student_name: String,
    pub phone: String,
    pub email: String,
    pub seats: i32,
    pub check_in_date: NaiveDate,
}
