//! Handlers for the `/orders` resource.
//!
//! Customers place orders for marketplace products; the products'
//! suppliers move them through the fulfilment states. Creation fans one
//! notification out per distinct supplier (each listing only that
//! supplier's products); a status change notifies the single customer in
//! aggregate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use hostelhub_core::error::CoreError;
use hostelhub_core::listing::{HOSTEL_STATUS_APPROVED, LISTING_TYPE_MARKETPLACE};
use hostelhub_core::notify::{order_received, order_status_change, RelatedEntity};
use hostelhub_core::ownership::{
    all_product_names, distinct_owners, owns_any, product_names_owned_by,
};
use hostelhub_core::status::OrderStatus;
use hostelhub_core::types::DbId;
use hostelhub_db::models::order::{NewOrderItem, OrderWithItems, ShippingInfo};
use hostelhub_db::repositories::{HostelRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSupplier;
use crate::notify;
use crate::response::DataResponse;
use crate::state::AppState;

/// One line item in a `POST /orders` request. The unit price is not
/// client-supplied; it is snapshotted from the product at creation.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderItemRequest {
    pub product_id: DbId,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

/// Shipping fields in a `POST /orders` request.
#[derive(Debug, Deserialize, Validate)]
pub struct ShippingInfoRequest {
    #[validate(length(min = 1, message = "shipping full_name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "shipping address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "shipping city is required"))]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[validate(length(min = 1, message = "shipping phone is required"))]
    pub phone: String,
}

/// Request body for `POST /orders`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,
    #[validate(nested)]
    pub shipping_info: ShippingInfoRequest,
}

/// Request body for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// POST /api/v1/orders
///
/// Create an order. Every referenced product must exist, be a marketplace
/// listing, and be approved; each unit price is snapshotted from the
/// product row so later price changes never affect the order. After the
/// order commits, each distinct supplier receives one notification
/// listing only their own products.
pub async fn create_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOrderRequest>,
) -> AppResult<impl IntoResponse> {
    if input.items.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Order must contain at least one item".into(),
        )));
    }
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let mut total_amount: i64 = 0;
    let mut order_items = Vec::with_capacity(input.items.len());

    for item in &input.items {
        let product = HostelRepo::find_by_id(&state.pool, item.product_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Hostel",
                id: item.product_id,
            }))?;

        if product.listing_type != LISTING_TYPE_MARKETPLACE {
            return Err(AppError::Core(CoreError::Validation(
                "Orders can only be placed for marketplace products".into(),
            )));
        }
        if product.status != HOSTEL_STATUS_APPROVED {
            return Err(AppError::Core(CoreError::Validation(
                "Cannot order unapproved products".into(),
            )));
        }

        total_amount = product
            .price
            .checked_mul(i64::from(item.quantity))
            .and_then(|line_total| total_amount.checked_add(line_total))
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "Order total exceeds the supported range".into(),
                ))
            })?;
        order_items.push(NewOrderItem {
            product_id: product.id,
            quantity: item.quantity,
            price: product.price,
        });
    }

    let shipping = ShippingInfo {
        full_name: input.shipping_info.full_name,
        address: input.shipping_info.address,
        city: input.shipping_info.city,
        postal_code: input.shipping_info.postal_code,
        phone: input.shipping_info.phone,
    };

    let order =
        OrderRepo::create(&state.pool, auth.user_id, &shipping, &order_items, total_amount)
            .await?;
    let items = OrderRepo::list_items(&state.pool, order.id).await?;

    tracing::info!(
        customer_id = auth.user_id,
        order_id = order.id,
        total_amount,
        item_count = items.len(),
        "Order created"
    );

    // Creation-time fan-out: one notification per distinct supplier,
    // each listing only that supplier's products.
    for supplier_id in distinct_owners(&items) {
        let product_names = product_names_owned_by(&items, supplier_id);
        let (severity, message) = order_received(&product_names);
        notify::dispatch(
            &state.pool,
            supplier_id,
            severity,
            &message,
            Some(RelatedEntity::Order(order.id)),
        )
        .await;
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: OrderWithItems { order, items },
        }),
    ))
}

/// GET /api/v1/orders/customer
///
/// List the authenticated customer's orders with all items, newest first.
pub async fn list_customer_orders(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_for_customer(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/supplier
///
/// List orders containing at least one of the authenticated supplier's
/// products. Each order's items are filtered down to the supplier's own.
pub async fn list_supplier_orders(
    RequireSupplier(auth): RequireSupplier,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_for_supplier(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// PUT /api/v1/orders/{id}/status
///
/// Set an order's status. The actor must own at least one line item's
/// product; owning one item grants status control over the whole order,
/// all suppliers' items included. If the value actually changed, the
/// customer receives one notification listing all product names.
pub async fn update_order_status(
    RequireSupplier(auth): RequireSupplier,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
    Json(input): Json<UpdateOrderStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let new_status: OrderStatus = input
        .status
        .parse()
        .map_err(|msg: String| AppError::Core(CoreError::Validation(msg)))?;

    let order = OrderRepo::find_by_id(&state.pool, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    let items = OrderRepo::list_items(&state.pool, order_id).await?;

    if !owns_any(&items, auth.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only update orders for your own products".into(),
        )));
    }

    let previous_status = order.status;
    OrderRepo::update_status(&state.pool, order_id, new_status.as_str()).await?;

    let updated = OrderRepo::find_by_id(&state.pool, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    tracing::info!(
        supplier_id = auth.user_id,
        order_id,
        previous_status = %previous_status,
        status = %new_status,
        "Order status updated"
    );

    if previous_status != new_status.as_str() {
        let product_names = all_product_names(&items);
        let (severity, message) = order_status_change(new_status, &product_names);
        notify::dispatch(
            &state.pool,
            updated.customer_id,
            severity,
            &message,
            Some(RelatedEntity::Order(order_id)),
        )
        .await;
    }

    Ok(Json(DataResponse {
        data: OrderWithItems {
            order: updated,
            items,
        },
    }))
}
