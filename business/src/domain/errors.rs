/// Failures reported by storage ports, shared by every domain area.
///
/// `Duplicated` is raised when a unique key (such as a product SKU) is already
/// taken; `Persistence` covers local key/value stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
