use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::supplier::repository::SupplierRepository;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub supplier_repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = existing.revise(NewProductProps {
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

        if updated_product.supplier_id != existing.supplier_id {
            self.supplier_repository
                .get_by_id(updated_product.supplier_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ProductError::SupplierNotFound,
                    other => ProductError::Repository(other),
                })?;
        }

        self.repository
            .save(&updated_product)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to save product {}: {}",
                    updated_product.id, e
                ));
                match e {
                    RepositoryError::Duplicated => ProductError::SkuDuplicated,
                    other => ProductError::Repository(other),
                }
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::model::Supplier;
    use chrono::Utc;
    use mockall::mock;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub SupplierRepo {}

        #[async_trait]
        impl SupplierRepository for SupplierRepo {
            async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Supplier, RepositoryError>;
            async fn save(&self, supplier: &Supplier) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing(id: Uuid, supplier_id: Uuid) -> Product {
        let added = Utc::now() - chrono::Duration::days(3);
        Product::from_repository(
            id,
            BTreeSet::from(["Pantry".to_string()]),
            "Arborio rice".to_string(),
            Utc::now(),
            added,
            2.8,
            "RICE-1KG".to_string(),
            "Rice".to_string(),
            supplier_id,
            Vec::new(),
            15,
            added,
        )
    }

    fn params(id: Uuid, supplier_id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            categories: vec!["Pantry".to_string(), "Grains".to_string()],
            summary: "Arborio rice for risotto".to_string(),
            expired_date: Utc::now(),
            price: 3.1,
            sku: "RICE-1KG".to_string(),
            name: "Risotto rice".to_string(),
            supplier_id,
            image_file_names: Vec::new(),
            stock: 12,
        }
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let id = Uuid::new_v4();
        let supplier_id = Uuid::new_v4();
        let original = existing(id, supplier_id);
        let added_date = original.added_date;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(original.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut supplier_repo = MockSupplierRepo::new();
        supplier_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            supplier_repository: Arc::new(supplier_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id, supplier_id)).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Risotto rice");
        assert_eq!(product.added_date, added_date);
        assert_eq!(product.categories.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            supplier_repository: Arc::new(MockSupplierRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), Uuid::new_v4()))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_price() {
        let id = Uuid::new_v4();
        let supplier_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing(id, supplier_id)));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            supplier_repository: Arc::new(MockSupplierRepo::new()),
            logger: mock_logger(),
        };

        let mut invalid = params(id, supplier_id);
        invalid.price = -3.0;
        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_check_new_supplier_exists() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing(id, Uuid::new_v4())));
        mock_repo.expect_save().never();
        let mut supplier_repo = MockSupplierRepo::new();
        supplier_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            supplier_repository: Arc::new(supplier_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id, Uuid::new_v4())).await;

        assert!(matches!(result.unwrap_err(), ProductError::SupplierNotFound));
    }
}
