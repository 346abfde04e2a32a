use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
}
