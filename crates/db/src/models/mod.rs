pub mod booking;
pub mod hostel;
pub mod notification;
pub mod order;
pub mod user;
