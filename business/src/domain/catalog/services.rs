use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::CatalogError;

/// Service port for the remote product catalog the storefront browses.
///
/// One call returns the whole collection; no paging parameters are sent.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError>;
}
