use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::supplier::model::Supplier;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupplierRequest {
    /// Supplier name (cannot be empty)
    pub name: String,
    /// Postal address; blank values are stored as absent
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    /// Contact phone; blank values are stored as absent
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id.to_string(),
            name: supplier.name,
            address: supplier.address,
            phone: supplier.phone,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}
