//! Repository for the `bookings` table.

use hostelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingDetail, CreateBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "id, student_id, owner_id, hostel_id, student_name, phone, email, \
    seats, check_in_date, status, created_at, updated_at";

/// Column list for detail queries joining the student, owner, and hostel.
const DETAIL_COLUMNS: &str = "b.id, b.student_id, b.owner_id, b.hostel_id, b.student_name, \
    b.phone, b.email, b.seats, b.check_in_date, b.status, b.created_at, b.updated_at, \
    s.username AS student_username, s.full_name AS student_full_name, \
    o.username AS owner_username, o.full_name AS owner_full_name, \
    h.name AS hostel_name, h.price AS hostel_price";

/// FROM/JOIN clause shared by all detail queries.
const DETAIL_FROM: &str = "FROM bookings b \
    JOIN users s ON s.id = b.student_id \
    JOIN users o ON o.id = b.owner_id \
    JOIN hostels h ON h.id = b.hostel_id";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking with status `Pending`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (student_id, owner_id, hostel_id, student_name, phone, email, seats, check_in_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.student_id)
            .bind(input.owner_id)
            .bind(input.hostel_id)
            .bind(&input.student_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.seats)
            .bind(input.check_in_date)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by id.
    pub async fn find_by_id(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a booking by id with student, owner, and hostel resolved.
    pub async fn find_detail(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<BookingDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE b.id = $1");
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a new status value for a booking.
    pub async fn update_status(
        pool: &PgPool,
        booking_id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(booking_id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List a student's bookings, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM} \
             WHERE b.student_id = $1 \
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List bookings against a hostel owner's listings, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM} \
             WHERE b.owner_id = $1 \
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
