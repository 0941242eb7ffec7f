#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_product")]
    InvalidProduct,
    #[error("cart.serialization")]
    Serialization(#[from] serde_json::Error),
    #[error("cart.storage")]
    Storage(#[from] crate::domain::errors::RepositoryError),
}
