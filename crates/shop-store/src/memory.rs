//! In-memory document stores.
//!
//! Each collection is a `DashMap` keyed by document id, wrapped in an
//! `Arc` so handles clone cheaply and every clone sees the same data.
//! Reads clone documents out; per-key consistency (atomic existence check
//! on remove, single-writer update) comes from the map's sharded locks.
//!
//! Handles are injected through `AppState`, never reached through a
//! global, so tests build isolated stores per case.

use std::sync::Arc;

use dashmap::DashMap;

use crate::error::StoreError;
use crate::order::Order;
use crate::product::Product;
use crate::user::User;

/// User accounts, addressable by id and by login email.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<DashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.inner.get(id).map(|entry| entry.clone())
    }

    /// Case-sensitive equality on the stored (lowercased) email.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.clone())
    }

    /// Insert a new account, enforcing email uniqueness.
    pub fn insert(&self, user: User) -> Result<User, StoreError> {
        if self.find_by_email(&user.email).is_some() {
            return Err(StoreError::DuplicateEmail);
        }
        self.inner.insert(user.id.to_string(), user.clone());
        Ok(user)
    }

    /// Replace a stored account in place. Returns the stored value, or
    /// `None` when the id is unknown.
    pub fn update<F>(&self, id: &str, mutate: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        self.inner.get_mut(id).map(|mut entry| {
            mutate(&mut entry);
            entry.clone()
        })
    }

    pub fn remove(&self, id: &str) -> Option<User> {
        self.inner.remove(id).map(|(_, user)| user)
    }

    pub fn list(&self) -> Vec<User> {
        self.inner.iter().map(|entry| entry.clone()).collect()
    }
}

/// The product catalog.
#[derive(Clone, Default)]
pub struct ProductStore {
    inner: Arc<DashMap<String, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.inner.get(id).map(|entry| entry.clone())
    }

    pub fn insert(&self, product: Product) -> Product {
        self.inner.insert(product.id.to_string(), product.clone());
        product
    }

    /// Replace a stored product wholesale (the caller validated the new
    /// value first). Returns `None` when the id is unknown.
    pub fn replace(&self, id: &str, product: Product) -> Option<Product> {
        self.inner.get_mut(id).map(|mut entry| {
            *entry = product.clone();
            product
        })
    }

    pub fn remove(&self, id: &str) -> Option<Product> {
        self.inner.remove(id).map(|(_, product)| product)
    }

    pub fn list(&self) -> Vec<Product> {
        self.inner.iter().map(|entry| entry.clone()).collect()
    }
}

/// Placed orders.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: Arc<DashMap<String, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.inner.get(id).map(|entry| entry.clone())
    }

    pub fn insert(&self, order: Order) -> Order {
        self.inner.insert(order.id.to_string(), order.clone());
        order
    }

    pub fn list(&self) -> Vec<Order> {
        self.inner.iter().map(|entry| entry.clone()).collect()
    }

    /// The ownership filter: only orders whose `customerId` equals the
    /// given id.
    pub fn list_by_customer(&self, customer_id: &str) -> Vec<Order> {
        self.inner
            .iter()
            .filter(|entry| entry.customer_id == customer_id)
            .map(|entry| entry.clone())
            .collect()
    }
}
