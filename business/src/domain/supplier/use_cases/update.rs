use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

pub struct UpdateSupplierParams {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[async_trait]
pub trait UpdateSupplierUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSupplierParams) -> Result<Supplier, SupplierError>;
}
