//! Integration tests for the `/orders` routes.
//!
//! Pipeline tests (authentication, role gating, input validation) reject
//! before any query runs. Workflow tests use `#[sqlx::test]` fixtures and
//! cover the multi-supplier paths end to end: per-supplier notification
//! fan-out, price snapshotting, and status-change dispatch.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{
    bearer, build_test_app, create_listing, create_user, json_request, response_json, test_app,
};
use hostelhub_core::listing::{HOSTEL_STATUS_APPROVED, LISTING_TYPE_MARKETPLACE};
use hostelhub_core::roles::{ROLE_STUDENT, ROLE_SUPPLIER};
use hostelhub_core::types::DbId;
use hostelhub_db::models::order::{NewOrderItem, ShippingInfo};
use hostelhub_db::repositories::{NotificationRepo, OrderRepo};

#[tokio::test]
async fn listing_customer_orders_requires_token() {
    let request = json_request("GET", "/api/v1/orders/customer", None, "");
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn supplier_listing_is_supplier_only() {
    let auth = bearer(7, ROLE_STUDENT);
    let request = json_request("GET", "/api/v1/orders/supplier", Some(&auth), "");
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Supplier role required");
}

#[tokio::test]
async fn create_order_rejects_empty_items() {
    let auth = bearer(7, ROLE_STUDENT);
    let body = serde_json::json!({
        "items": [],
        "shipping_info": {
            "full_name": "Bilal Ahmed",
            "address": "12 Canal Road",
            "city": "Lahore",
            "postal_code": "54000",
            "phone": "0321-7654321"
        }
    });
    let request = json_request("POST", "/api/v1/orders", Some(&auth), &body.to_string());
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Order must contain at least one item");
}

#[tokio::test]
async fn create_order_rejects_zero_quantity() {
    let auth = bearer(7, ROLE_STUDENT);
    let body = serde_json::json!({
        "items": [{"product_id": 1, "quantity": 0}],
        "shipping_info": {
            "full_name": "Bilal Ahmed",
            "address": "12 Canal Road",
            "city": "Lahore",
            "phone": "0321-7654321"
        }
    });
    let request = json_request("POST", "/api/v1/orders", Some(&auth), &body.to_string());
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("quantity must be at least 1"));
}

#[tokio::test]
async fn update_order_status_is_supplier_only() {
    let auth = bearer(7, ROLE_STUDENT);
    let request = json_request(
        "PUT",
        "/api/v1/orders/1/status",
        Some(&auth),
        r#"{"status":"Shipped"}"#,
    );
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Supplier role required");
}

#[tokio::test]
async fn update_order_status_rejects_unknown_status() {
    let auth = bearer(5, ROLE_SUPPLIER);
    let request = json_request(
        "PUT",
        "/api/v1/orders/1/status",
        Some(&auth),
        r#"{"status":"Dispatched"}"#,
    );
    let response = test_app().oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let message = json["error"].as_str().unwrap();
    assert!(message.contains("Invalid status 'Dispatched'"));
    assert!(message.contains("Processing"));
    assert!(message.contains("Shipped"));
    assert!(message.contains("Delivered"));
}

// ---------------------------------------------------------------------------
// Workflow tests (database-backed)
// ---------------------------------------------------------------------------

fn shipping_body() -> serde_json::Value {
    serde_json::json!({
        "full_name": "Bilal Ahmed",
        "address": "12 Canal Road",
        "city": "Lahore",
        "postal_code": "54000",
        "phone": "0321-7654321"
    })
}

/// Insert an order with one line item directly through the repository.
async fn seed_order(pool: &PgPool, customer: DbId, product: DbId, price: i64) -> DbId {
    let shipping = ShippingInfo {
        full_name: "Bilal Ahmed".into(),
        address: "12 Canal Road".into(),
        city: "Lahore".into(),
        postal_code: "54000".into(),
        phone: "0321-7654321".into(),
    };
    let items = [NewOrderItem {
        product_id: product,
        quantity: 1,
        price,
    }];
    OrderRepo::create(pool, customer, &shipping, &items, price)
        .await
        .expect("order insert should succeed")
        .id
}

/// An order spanning two suppliers dispatches exactly one notification
/// per supplier, each listing only that supplier's product names.
#[sqlx::test(migrations = "../db/migrations")]
async fn order_across_two_suppliers_notifies_each_with_own_products(pool: PgPool) {
    let customer = create_user(&pool, "customer_one", ROLE_STUDENT).await;
    let supplier_a = create_user(&pool, "supplier_a", ROLE_SUPPLIER).await;
    let supplier_b = create_user(&pool, "supplier_b", ROLE_SUPPLIER).await;
    let desk = create_listing(
        &pool,
        supplier_a,
        "Desk",
        1000,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;
    let lamp = create_listing(
        &pool,
        supplier_a,
        "Lamp",
        500,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;
    let chair = create_listing(
        &pool,
        supplier_b,
        "Chair",
        2000,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;

    let auth = bearer(customer, ROLE_STUDENT);
    let body = serde_json::json!({
        "items": [
            {"product_id": desk, "quantity": 1},
            {"product_id": lamp, "quantity": 2},
            {"product_id": chair, "quantity": 1}
        ],
        "shipping_info": shipping_body()
    });
    let request = json_request("POST", "/api/v1/orders", Some(&auth), &body.to_string());
    let response = build_test_app(pool.clone()).oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["total_amount"], 1000 + 2 * 500 + 2000);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 3);

    let inbox_a = NotificationRepo::list_for_user(&pool, supplier_a, 100)
        .await
        .unwrap();
    assert_eq!(inbox_a.len(), 1);
    assert_eq!(inbox_a[0].severity, "info");
    assert!(inbox_a[0].message.contains("Desk"));
    assert!(inbox_a[0].message.contains("Lamp"));
    assert!(!inbox_a[0].message.contains("Chair"));

    let inbox_b = NotificationRepo::list_for_user(&pool, supplier_b, 100)
        .await
        .unwrap();
    assert_eq!(inbox_b.len(), 1);
    assert!(inbox_b[0].message.contains("Chair"));
    assert!(!inbox_b[0].message.contains("Desk"));

    let customer_inbox = NotificationRepo::list_for_user(&pool, customer, 100)
        .await
        .unwrap();
    assert!(customer_inbox.is_empty(), "creation never notifies the customer");
}

/// Prices are snapshotted at order time; changing the product afterwards
/// leaves the stored total and item prices untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn order_total_is_immune_to_later_price_changes(pool: PgPool) {
    let customer = create_user(&pool, "customer_one", ROLE_STUDENT).await;
    let supplier = create_user(&pool, "supplier_a", ROLE_SUPPLIER).await;
    let desk = create_listing(
        &pool,
        supplier,
        "Desk",
        1000,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;

    let auth = bearer(customer, ROLE_STUDENT);
    let body = serde_json::json!({
        "items": [{"product_id": desk, "quantity": 3}],
        "shipping_info": shipping_body()
    });
    let request = json_request("POST", "/api/v1/orders", Some(&auth), &body.to_string());
    let response = build_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    sqlx::query("UPDATE hostels SET price = 9999 WHERE id = $1")
        .bind(desk)
        .execute(&pool)
        .await
        .unwrap();

    let request = json_request("GET", "/api/v1/orders/customer", Some(&auth), "");
    let response = build_test_app(pool.clone()).oneshot(request).await.unwrap();
    let (status, json) = response_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let order = &json["data"][0];
    assert_eq!(order["total_amount"], 3000);
    assert_eq!(order["items"][0]["price"], 1000);
}

/// The first status change notifies the customer; re-setting the same
/// value returns 200 but dispatches nothing further.
#[sqlx::test(migrations = "../db/migrations")]
async fn order_status_reset_does_not_notify_again(pool: PgPool) {
    let customer = create_user(&pool, "customer_one", ROLE_STUDENT).await;
    let supplier = create_user(&pool, "supplier_a", ROLE_SUPPLIER).await;
    let desk = create_listing(
        &pool,
        supplier,
        "Desk",
        1000,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;
    let order_id = seed_order(&pool, customer, desk, 1000).await;

    let auth = bearer(supplier, ROLE_SUPPLIER);
    let uri = format!("/api/v1/orders/{order_id}/status");

    for _ in 0..2 {
        let request = json_request("PUT", &uri, Some(&auth), r#"{"status":"Processing"}"#);
        let response = build_test_app(pool.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let order = OrderRepo::find_by_id(&pool, order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.status, "Processing");

    let customer_inbox = NotificationRepo::list_for_user(&pool, customer, 100)
        .await
        .unwrap();
    assert_eq!(customer_inbox.len(), 1);
    assert_eq!(customer_inbox[0].severity, "info");
    assert!(customer_inbox[0].message.contains("Desk"));
}

/// A price x quantity product that would overflow the total is rejected
/// with a validation error and writes nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn order_total_overflow_is_rejected(pool: PgPool) {
    let customer = create_user(&pool, "customer_one", ROLE_STUDENT).await;
    let supplier = create_user(&pool, "supplier_a", ROLE_SUPPLIER).await;
    let bullion = create_listing(
        &pool,
        supplier,
        "Bullion",
        i64::MAX,
        LISTING_TYPE_MARKETPLACE,
        HOSTEL_STATUS_APPROVED,
    )
    .await;

    let auth = bearer(customer, ROLE_STUDENT);
    let body = serde_json::json!({
        "items": [{"product_id": bullion, "quantity": 2}],
        "shipping_info": shipping_body()
    });
    let request = json_request("POST", "/api/v1/orders", Some(&auth), &body.to_string());
    let response = build_test_app(pool.clone()).oneshot(request).await.unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Order total exceeds the supported range");

    let orders = OrderRepo::list_for_customer(&pool, customer).await.unwrap();
    assert!(orders.is_empty(), "no order row may be written");
    let supplier_inbox = NotificationRepo::list_for_user(&pool, supplier, 100)
        .await
        .unwrap();
    assert!(supplier_inbox.is_empty());
}
