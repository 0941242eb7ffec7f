use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::supplier::repository::SupplierRepository;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub supplier_repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            categories: params.categories,
            summary: params.summary,
            expired_date: params.expired_date,
            price: params.price,
            sku: params.sku,
            name: params.name,
            supplier_id: params.supplier_id,
            image_file_names: params.image_file_names,
            stock: params.stock,
        })?;

        self.supplier_repository
            .get_by_id(product.supplier_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::SupplierNotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository.save(&product).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to save product {}: {}", product.id, e));
            match e {
                RepositoryError::Duplicated => ProductError::SkuDuplicated,
                other => ProductError::Repository(other),
            }
        })?;

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
