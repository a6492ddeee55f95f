//! Order entity models and DTOs.

use hostelhub_core::ownership::LineItem;
use hostelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_id: DbId,
    pub shipping_full_name: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub shipping_phone: String,
    /// Sum of snapshotted item price x quantity, whole currency units.
    pub total_amount: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order line item with its product and product owner resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItemDetail {
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    /// Unit price snapshotted at order time.
    pub price: i64,
    pub product_name: String,
    pub owner_id: DbId,
    pub owner_name: String,
}

impl LineItem for OrderItemDetail {
    fn owner_id(&self) -> DbId {
        self.owner_id
    }

    fn product_name(&self) -> &str {
        &self.product_name
    }
}

/// An order together with its (possibly supplier-filtered) line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
}

/// Shipping fields captured at order creation.
#[derive(Debug, Clone)]
pub struct ShippingInfo {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

/// A validated line item ready for insertion, price already snapshotted.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: DbId,
    pub quantity: i32,
    pub price: i64,
}
