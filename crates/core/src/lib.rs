//! Domain logic for the hostel marketplace backend.
//!
//! This crate is pure: no I/O, no database types. It defines the shared
//! id/timestamp aliases, the error taxonomy, role names, the booking and
//! order status sets, notification message planning, and the ownership
//! resolver used to fan notifications out across an order's suppliers.

pub mod error;
pub mod listing;
pub mod notify;
pub mod ownership;
pub mod roles;
pub mod status;
pub mod types;
