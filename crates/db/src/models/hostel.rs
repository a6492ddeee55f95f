//! Hostel (listing) entity model.
//!
//! A hostel doubles as a marketplace product when its `listing_type` is
//! `marketplace`; bookings and order items both reference this table.

use hostelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hostels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hostel {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub location: String,
    /// Whole currency units.
    pub price: i64,
    pub description: String,
    pub phone: String,
    pub listing_type: String,
    pub status: String,
    pub created_at: Timestamp,
}
