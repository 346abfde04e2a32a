// src/store/postgres.rs
use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};

use super::{NewProduct, ProductChanges, ProductStore};
use crate::error::AppError;
use crate::models::product::Product;

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, code,
                    price::FLOAT8 AS price,
                    created_at
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, code,
                    price::FLOAT8 AS price,
                    created_at
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, code, price)
             VALUES ($1, $2, $3) RETURNING id, name, code,
                    price::FLOAT8 AS price,
                    created_at",
        )
        .bind(&product.name)
        .bind(&product.code)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Product code already in use"))?;
        Ok(product)
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET
             name = COALESCE($1, name),
             code = COALESCE($2, code),
             price = COALESCE($3, price)
             WHERE id = $4 RETURNING id, name, code,
                    price::FLOAT8 AS price,
                    created_at",
        )
        .bind(changes.name)
        .bind(changes.code)
        .bind(changes.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Product code already in use"))?;
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
