//! Well-known hostel listing constants.
//!
//! These must match the values stored in the `hostels.listing_type` and
//! `hostels.status` columns. A listing is either a bookable hostel or,
//! when flagged `marketplace`, an orderable product.

/// Bookable hostel listing.
pub const LISTING_TYPE_HOSTEL: &str = "hostel";

/// Orderable marketplace product listing.
pub const LISTING_TYPE_MARKETPLACE: &str = "marketplace";

/// Listing awaiting admin moderation.
pub const HOSTEL_STATUS_PENDING: &str = "Pending";

/// Listing approved for booking/ordering.
pub const HOSTEL_STATUS_APPROVED: &str = "Approved";

/// Listing rejected by moderation.
pub const HOSTEL_STATUS_REJECTED: &str = "Rejected";
