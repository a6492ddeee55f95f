//! Route definitions for the `/orders` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// POST   /               -> create_order (any authenticated user)
/// GET    /customer       -> list_customer_orders
/// GET    /supplier       -> list_supplier_orders (supplier)
/// PUT    /{id}/status    -> update_order_status (supplier)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(order::create_order))
        .route("/customer", get(order::list_customer_orders))
        .route("/supplier", get(order::list_supplier_orders))
        .route("/{id}/status", put(order::update_order_status))
}
