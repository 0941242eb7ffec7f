use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub categories: Vec<String>,
    pub summary: String,
    pub expired_date: DateTime<Utc>,
    pub price: f64,
    pub sku: String,
    pub name: String,
    pub supplier_id: Uuid,
    pub image_file_names: Vec<String>,
    pub stock: i32,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
