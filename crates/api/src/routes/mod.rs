pub mod booking;
pub mod health;
pub mod notification;
pub mod order;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /bookings                      create (student)
/// /bookings/student              student's bookings
/// /bookings/owner                bookings against the owner's hostels
/// /bookings/{id}/status          set status (hostel owner)
///
/// /orders                        create (any authenticated customer)
/// /orders/customer               customer's orders
/// /orders/supplier               orders containing the supplier's products
/// /orders/{id}/status            set status (supplier)
///
/// /notifications                 list (auth required)
/// /notifications/read-all        mark all read
/// /notifications/unread-count    unread count
/// /notifications/{id}/read       mark read
/// /notifications/{id}            delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bookings", booking::router())
        .nest("/orders", order::router())
        .nest("/notifications", notification::router())
}
