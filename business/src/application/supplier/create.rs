use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::create::{CreateSupplierParams, CreateSupplierUseCase};

pub struct CreateSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSupplierUseCase for CreateSupplierUseCaseImpl {
    async fn execute(&self, params: CreateSupplierParams) -> Result<Supplier, SupplierError> {
        self.logger
            .info(&format!("Creating supplier: {}", params.name));

        let supplier = Supplier::new(params.name, params.address, params.phone)?;
        if let Err(e) = self.repository.save(&supplier).await {
            self.logger
                .error(&format!("Failed to save supplier {}: {}", supplier.id, e));
            return Err(e.into());
        }

        self.logger
            .info(&format!("Supplier created: {}", supplier.id));
        Ok(supplier)
    }
}
