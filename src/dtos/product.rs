// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::{NewProduct, ProductChanges};

/// Request body for create/update. Attributes live under the `product`
/// key; anything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub product: ProductParams,
}

/// The allow-listed product attributes. Only these three fields are ever
/// read from a request body; unknown keys are dropped during
/// deserialization and an `id` supplied by the client never gets here.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProductParams {
    pub name: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
}

impl ProductParams {
    /// Field-level checks applied to whatever subset is present.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name must not be blank"));
            }
        }
        if let Some(code) = &self.code {
            if code.trim().is_empty() {
                return Err(AppError::validation("Code must not be blank"));
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(AppError::validation("Price must be a non-negative number"));
            }
        }
        Ok(())
    }

    /// Create requires the full attribute set.
    pub fn into_new(self) -> Result<NewProduct, AppError> {
        self.validate()?;
        let name = self.name.ok_or_else(|| AppError::validation("Name required"))?;
        let code = self.code.ok_or_else(|| AppError::validation("Code required"))?;
        let price = self.price.ok_or_else(|| AppError::validation("Price required"))?;
        Ok(NewProduct { name, code, price })
    }

    /// Update applies whatever subset was sent.
    pub fn into_changes(self) -> Result<ProductChanges, AppError> {
        self.validate()?;
        Ok(ProductChanges {
            name: self.name,
            code: self.code,
            price: self.price,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub created_at: Option<String>,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            code: product.code,
            price: product.price,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_dropped() {
        let body = serde_json::json!({
            "product": {
                "name": "Widget",
                "code": "W-100",
                "price": 9.99,
                "id": 999,
                "admin": true
            },
            "utm_source": "newsletter"
        });
        let payload: ProductPayload = serde_json::from_value(body).unwrap();
        let new = payload.product.into_new().unwrap();
        assert_eq!(new.name, "Widget");
        assert_eq!(new.code, "W-100");
        assert_eq!(new.price, 9.99);
    }

    #[test]
    fn create_requires_all_attributes() {
        let payload: ProductPayload =
            serde_json::from_value(serde_json::json!({"product": {"name": "Widget"}})).unwrap();
        assert!(matches!(
            payload.product.into_new(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn update_accepts_a_subset() {
        let payload: ProductPayload =
            serde_json::from_value(serde_json::json!({"product": {"price": 12.5}})).unwrap();
        let changes = payload.product.into_changes().unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.code, None);
        assert_eq!(changes.price, Some(12.5));
    }

    #[test]
    fn rejects_blank_name_and_negative_price() {
        let blank = ProductParams {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let negative = ProductParams {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = ProductParams {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn missing_product_key_is_an_error() {
        let result: Result<ProductPayload, _> =
            serde_json::from_value(serde_json::json!({"name": "Widget"}));
        assert!(result.is_err());
    }
}
