// src/store/memory.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{NewProduct, ProductChanges, ProductStore};
use crate::error::AppError;
use crate::models::product::Product;

/// In-memory product store. Mirrors the Postgres schema's behavior,
/// including the unique index on `code`.
pub struct InMemoryProductStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Product store lock poisoned"))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn code_taken(&self, code: &str, except_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|p| p.code == code && Some(p.id) != except_id)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.lock()?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        let inner = self.lock()?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.lock()?;
        if inner.code_taken(&product.code, None) {
            return Err(AppError::conflict("Product code already in use"));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let row = Product {
            id,
            name: product.name,
            code: product.code,
            price: product.price,
            created_at: Some(Utc::now()),
        };
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, AppError> {
        let mut inner = self.lock()?;
        if !inner.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(code) = &changes.code {
            if inner.code_taken(code, Some(id)) {
                return Err(AppError::conflict("Product code already in use"));
            }
        }
        let row = inner.rows.get_mut(&id).map(|row| {
            if let Some(name) = changes.name {
                row.name = name;
            }
            if let Some(code) = changes.code {
                row.code = code;
            }
            if let Some(price) = changes.price {
                row.price = price;
            }
            row.clone()
        });
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.lock()?;
        Ok(inner.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            code: "W-100".to_string(),
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let store = InMemoryProductStore::new();
        let a = store.insert(widget()).await.unwrap();
        let b = store
            .insert(NewProduct {
                code: "W-200".to_string(),
                ..widget()
            })
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = InMemoryProductStore::new();
        let created = store.insert(widget()).await.unwrap();
        let updated = store
            .update(
                created.id,
                ProductChanges {
                    price: Some(12.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.code, "W-100");
        assert_eq!(updated.price, 12.5);
    }

    #[tokio::test]
    async fn missing_ids_do_not_mutate_anything() {
        let store = InMemoryProductStore::new();
        store.insert(widget()).await.unwrap();
        assert!(store.find(42).await.unwrap().is_none());
        assert!(store
            .update(42, ProductChanges::default())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete(42).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_codes_are_rejected() {
        let store = InMemoryProductStore::new();
        let first = store.insert(widget()).await.unwrap();
        assert!(matches!(
            store.insert(widget()).await,
            Err(AppError::Conflict(_))
        ));
        let second = store
            .insert(NewProduct {
                code: "W-200".to_string(),
                ..widget()
            })
            .await
            .unwrap();
        // Renaming to an existing code is also a conflict, keeping your own is not.
        assert!(matches!(
            store
                .update(
                    second.id,
                    ProductChanges {
                        code: Some("W-100".to_string()),
                        ..Default::default()
                    },
                )
                .await,
            Err(AppError::Conflict(_))
        ));
        assert!(store
            .update(
                first.id,
                ProductChanges {
                    code: Some("W-100".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = InMemoryProductStore::new();
        let created = store.insert(widget()).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.find(created.id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }
}
