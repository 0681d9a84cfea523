//! Order records.
//!
//! Each ordered item carries a denormalized copy of the product fields at
//! time of order — there is no live reference back to the products
//! collection, so later product edits never rewrite order history.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::id::ObjectId;

/// Snapshot of a product as it was when ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedProduct {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One line of an order: a product snapshot and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedItem {
    pub product: OrderedProduct,
    pub quantity: u32,
}

/// A stored order, always owned by the customer who placed it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub items: Vec<OrderedItem>,
}

impl Order {
    /// Construct an order for the given customer.
    ///
    /// The owner is always the caller — a `customerId` in the payload is
    /// dropped by the deserializer and can never reassign ownership.
    pub fn create(payload: NewOrder, customer_id: &str) -> Result<Order, StoreError> {
        payload.validate()?;
        Ok(Order {
            id: ObjectId::new(),
            customer_id: customer_id.to_string(),
            items: payload.items,
        })
    }
}

/// Order creation body.
#[derive(Debug, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub items: Vec<OrderedItem>,
}

impl NewOrder {
    fn validate(&self) -> Result<(), StoreError> {
        if self.items.is_empty() {
            return Err(StoreError::validation("order must contain at least one item"));
        }
        for item in &self.items {
            if item.quantity < 1 {
                return Err(StoreError::validation("item quantity must be at least 1"));
            }
            if item.product.name.trim().is_empty() {
                return Err(StoreError::validation("item product name is required"));
            }
            if !(item.product.price.is_finite() && item.product.price > 0.0) {
                return Err(StoreError::validation(
                    "item product price must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}
