use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::services::ProductCatalogService;
use business::domain::product::model::{Image, Product};

use crate::client::CatalogClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    id: Uuid,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    summary: String,
    expired_date: DateTime<Utc>,
    added_date: DateTime<Utc>,
    price: f64,
    sku: String,
    name: String,
    supplier_id: Uuid,
    #[serde(default)]
    images: Vec<Image>,
    stock: i32,
    updated_at: DateTime<Utc>,
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Product::from_repository(
            payload.id,
            payload.categories.into_iter().collect(),
            payload.summary,
            payload.expired_date,
            payload.added_date,
            payload.price,
            payload.sku,
            payload.name,
            payload.supplier_id,
            payload.images,
            payload.stock,
            payload.updated_at,
        )
    }
}

/// Fetches the storefront catalog from `GET /api/products`.
pub struct ProductCatalogHttp {
    client: CatalogClient,
}

impl ProductCatalogHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "unexpected status {}",
                status
            )));
        }

        let payload = response
            .json::<Vec<ProductPayload>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;
        Ok(payload.into_iter().map(Product::from).collect())
    }
}
