#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable(String),
    #[error("catalog.invalid_response")]
    InvalidResponse(String),
}
