use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Supplier;

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Supplier, RepositoryError>;
    async fn save(&self, supplier: &Supplier) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
