//! Repository for the `hostels` table.

use hostelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::hostel::Hostel;

/// Column list for `hostels` queries.
const COLUMNS: &str =
    "id, owner_id, name, location, price, description, phone, listing_type, status, created_at";

/// Provides lookups for hostel listings.
pub struct HostelRepo;

impl HostelRepo {
    /// Find a hostel by id.
    pub async fn find_by_id(pool: &PgPool, hostel_id: DbId) -> Result<Option<Hostel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hostels WHERE id = $1");
        sqlx::query_as::<_, Hostel>(&query)
            .bind(hostel_id)
            .fetch_optional(pool)
            .await
    }
}
