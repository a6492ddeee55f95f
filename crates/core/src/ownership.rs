//! Ownership resolver for order line items.
//!
//! An order may span products owned by several distinct suppliers. These
//! helpers derive the distinct owner set (for creation-time fan-out and
//! status-update authorization) and per-owner product-name lists (so each
//! supplier's notification mentions only their own products).

use crate::types::DbId;

/// Seam between the resolver and the DB layer's populated order items.
pub trait LineItem {
    /// The user who owns the referenced product.
    fn owner_id(&self) -> DbId;
    /// The referenced product's display name.
    fn product_name(&self) -> &str;
}

/// Fallback used when an owner's items resolve to no product names.
const UNNAMED_PRODUCTS: &str = "your products";

/// Distinct owning users across the items, in first-seen order.
pub fn distinct_owners<I: LineItem>(items: &[I]) -> Vec<DbId> {
    let mut owners = Vec::new();
    for item in items {
        if !owners.contains(&item.owner_id()) {
            owners.push(item.owner_id());
        }
    }
    owners
}

/// The subset of items owned by `owner_id`.
pub fn items_owned_by<I: LineItem>(items: &[I], owner_id: DbId) -> Vec<&I> {
    items
        .iter()
        .filter(|item| item.owner_id() == owner_id)
        .collect()
}

/// Whether `owner_id` owns at least one of the items.
pub fn owns_any<I: LineItem>(items: &[I], owner_id: DbId) -> bool {
    items.iter().any(|item| item.owner_id() == owner_id)
}

/// Comma-joined names of the products owned by `owner_id`.
pub fn product_names_owned_by<I: LineItem>(items: &[I], owner_id: DbId) -> String {
    let names: Vec<&str> = items_owned_by(items, owner_id)
        .into_iter()
        .map(|item| item.product_name())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        UNNAMED_PRODUCTS.to_string()
    } else {
        names.join(", ")
    }
}

/// Comma-joined names of all products in the order, owner-agnostic.
pub fn all_product_names<I: LineItem>(items: &[I]) -> String {
    let names: Vec<&str> = items
        .iter()
        .map(LineItem::product_name)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        UNNAMED_PRODUCTS.to_string()
    } else {
        names.join(", ")
    }
}
