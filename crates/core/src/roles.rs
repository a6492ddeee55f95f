//! Well-known role name constants.
//!
//! These must match the values stored in the `users.role` column and the
//! role claim embedded in access tokens.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_HOSTEL_OWNER: &str = "hostel_owner";
pub const ROLE_SUPPLIER: &str = "supplier";
pub const ROLE_ADMIN: &str = "admin";
