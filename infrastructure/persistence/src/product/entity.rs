use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::product::model::{Image, Product};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub categories: Vec<String>,
    pub summary: String,
    pub expired_date: DateTime<Utc>,
    pub added_date: DateTime<Utc>,
    pub price: BigDecimal,
    pub sku: String,
    pub name: String,
    pub supplier_id: Uuid,
    pub images: Json<Vec<Image>>,
    pub stock: i32,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.categories.into_iter().collect(),
            self.summary,
            self.expired_date,
            self.added_date,
            self.price.to_f64().unwrap_or_default(),
            self.sku,
            self.name,
            self.supplier_id,
            self.images.0,
            self.stock,
            self.updated_at,
        )
    }
}
