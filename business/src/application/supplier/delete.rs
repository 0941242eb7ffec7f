use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::delete::{DeleteSupplierParams, DeleteSupplierUseCase};

pub struct DeleteSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteSupplierUseCase for DeleteSupplierUseCaseImpl {
    async fn execute(&self, params: DeleteSupplierParams) -> Result<(), SupplierError> {
        self.logger
            .info(&format!("Deleting supplier: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SupplierError::NotFound,
                other => SupplierError::Repository(other),
            })?;

        if let Err(e) = self.repository.delete(params.id).await {
            self.logger
                .error(&format!("Failed to delete supplier {}: {}", params.id, e));
            return Err(e.into());
        }

        self.logger
            .info(&format!("Supplier deleted: {}", params.id));
        Ok(())
    }
}
