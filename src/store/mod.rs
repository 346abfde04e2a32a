// src/store/mod.rs
//
// Persistence seam for products. Handlers only see the trait; the
// Postgres implementation backs the real service and the in-memory one
// backs tests and DATABASE_URL-less development.
pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::Product;

/// Complete attribute set required to insert a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub price: f64,
}

/// Partial attribute set for updates; absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, AppError>;
    async fn insert(&self, product: NewProduct) -> Result<Product, AppError>;
    /// Returns `None` when no product has the given id.
    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, AppError>;
    /// Returns `false` when no product had the given id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
