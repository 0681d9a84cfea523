//! # shop-store — Document Records and In-Memory Stores
//!
//! The persistence layer of the webshop backend: document shapes for
//! users, products, and orders, their validation rules, salted password
//! digests, and concurrent in-memory collections.
//!
//! Store handles are cheaply cloneable (`Arc` + `DashMap` inside) and are
//! always passed explicitly — there is no process-global connection, so
//! tests build isolated stores per case.
//!
//! Wire shapes follow the document store's conventions: `_id` holds a
//! 24-character lowercase-hex identifier, orders carry a denormalized copy
//! of the product fields at time of order, and password digests are never
//! serialized.

pub mod error;
pub mod id;
pub mod memory;
pub mod order;
pub mod password;
pub mod product;
pub mod user;

pub use error::StoreError;
pub use id::ObjectId;
pub use memory::{OrderStore, ProductStore, UserStore};
pub use order::{NewOrder, Order, OrderedItem, OrderedProduct};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{Registration, User};
