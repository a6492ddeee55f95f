//! Repository for the `orders` and `order_items` tables.

use hostelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{NewOrderItem, Order, OrderItemDetail, OrderWithItems, ShippingInfo};

/// Column list for `orders` queries.
const COLUMNS: &str = "id, customer_id, shipping_full_name, shipping_address, shipping_city, \
    shipping_postal_code, shipping_phone, total_amount, payment_method, status, \
    created_at, updated_at";

/// Column list for item queries joining the product and its owner.
const ITEM_COLUMNS: &str = "i.order_id, i.product_id, i.quantity, i.price, \
    h.name AS product_name, h.owner_id, u.full_name AS owner_name";

/// FROM/JOIN clause shared by all item queries.
const ITEM_FROM: &str = "FROM order_items i \
    JOIN hostels h ON h.id = i.product_id \
    JOIN users u ON u.id = h.owner_id";

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert an order and its line items in a single transaction,
    /// returning the created order row.
    pub async fn create(
        pool: &PgPool,
        customer_id: DbId,
        shipping: &ShippingInfo,
        items: &[NewOrderItem],
        total_amount: i64,
    ) -> Result<Order, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO orders \
                (customer_id, shipping_full_name, shipping_address, shipping_city, \
                 shipping_postal_code, shipping_phone, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(customer_id)
            .bind(&shipping.full_name)
            .bind(&shipping.address)
            .bind(&shipping.city)
            .bind(&shipping.postal_code)
            .bind(&shipping.phone)
            .bind(total_amount)
            .fetch_one(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(order)
    }

    /// Find an order by id.
    pub async fn find_by_id(pool: &PgPool, order_id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }

    /// List an order's line items with each product's owner resolved.
    pub async fn list_items(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<OrderItemDetail>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} {ITEM_FROM} WHERE i.order_id = $1 ORDER BY i.id");
        sqlx::query_as::<_, OrderItemDetail>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Persist a new status value for an order.
    pub async fn update_status(
        pool: &PgPool,
        order_id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(order_id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List a customer's orders with all line items, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders WHERE customer_id = $1 ORDER BY created_at DESC"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await?;

        Self::attach_items(pool, orders, None).await
    }

    /// List orders containing at least one item owned by the supplier,
    /// newest first. Each order's items are filtered down to the
    /// supplier's own products.
    pub async fn list_for_supplier(
        pool: &PgPool,
        supplier_id: DbId,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders o \
             WHERE EXISTS (\
                 SELECT 1 FROM order_items i \
                 JOIN hostels h ON h.id = i.product_id \
                 WHERE i.order_id = o.id AND h.owner_id = $1\
             ) \
             ORDER BY created_at DESC"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(supplier_id)
            .fetch_all(pool)
            .await?;

        Self::attach_items(pool, orders, Some(supplier_id)).await
    }

    /// Fetch the items for a batch of orders in one query and group them,
    /// optionally restricted to a single product owner.
    async fn attach_items(
        pool: &PgPool,
        orders: Vec<Order>,
        owner_filter: Option<DbId>,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let order_ids: Vec<DbId> = orders.iter().map(|o| o.id).collect();

        let filter = if owner_filter.is_some() {
            "AND h.owner_id = $2"
        } else {
            ""
        };
        let query = format!(
            "SELECT {ITEM_COLUMNS} {ITEM_FROM} \
             WHERE i.order_id = ANY($1) {filter} \
             ORDER BY i.order_id, i.id"
        );
        let mut items_query = sqlx::query_as::<_, OrderItemDetail>(&query).bind(&order_ids);
        if let Some(owner_id) = owner_filter {
            items_query = items_query.bind(owner_id);
        }
        let items = items_query.fetch_all(pool).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let order_items = items
                    .iter()
                    .filter(|item| item.order_id == order.id)
                    .cloned()
                    .collect();
                OrderWithItems {
                    order,
                    items: order_items,
                }
            })
            .collect())
    }
}
