#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.sku_empty")]
    SkuEmpty,
    #[error("product.sku_duplicated")]
    SkuDuplicated,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_stock")]
    InvalidStock,
    #[error("product.invalid_image")]
    InvalidImage,
    #[error("product.supplier_not_found")]
    SupplierNotFound,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
