use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::supplier::model::Supplier;

#[derive(Debug, FromRow)]
pub struct SupplierEntity {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplierEntity {
    pub fn into_domain(self) -> Supplier {
        Supplier::from_repository(
            self.id,
            self.name,
            self.address,
            self.phone,
            self.created_at,
            self.updated_at,
        )
    }
}
