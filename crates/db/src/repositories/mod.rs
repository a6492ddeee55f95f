//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod hostel_repo;
pub mod notification_repo;
pub mod order_repo;

pub use booking_repo::BookingRepo;
pub use hostel_repo::HostelRepo;
pub use notification_repo::NotificationRepo;
pub use order_repo::OrderRepo;
