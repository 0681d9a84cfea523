//! Product records: creation payloads and partial updates.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::id::ObjectId;

/// A stored product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// Price of one product in euros; euros and cents share the float with
    /// cents after the decimal point.
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn create(payload: NewProduct) -> Result<Product, StoreError> {
        let product = Product {
            id: ObjectId::new(),
            name: payload.name.trim().to_string(),
            price: payload.price,
            image: normalize_optional(payload.image),
            description: normalize_optional(payload.description),
        };
        product.validate()?;
        Ok(product)
    }

    /// Apply a partial update to a copy, re-validating the whole document.
    /// The stored document is only replaced once the result validates.
    pub fn updated(&self, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name.trim().to_string();
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(image) = patch.image {
            next.image = normalize_optional(Some(image));
        }
        if let Some(description) = patch.description {
            next.description = normalize_optional(Some(description));
        }
        next.validate()?;
        Ok(next)
    }

    fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() {
            return Err(StoreError::validation("name is required"));
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(StoreError::validation("price must be greater than zero"));
        }
        Ok(())
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Product creation body.
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial product update body; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}
