#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier.name_empty")]
    NameEmpty,
    #[error("supplier.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
