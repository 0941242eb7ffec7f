use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::supplier::model::Supplier;
use business::domain::supplier::repository::SupplierRepository;

use super::entity::SupplierEntity;
use crate::db::map_query_error;

pub struct SupplierRepositoryPostgres {
    pool: PgPool,
}

impl SupplierRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for SupplierRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError> {
        let entities = sqlx::query_as::<_, SupplierEntity>(
            "SELECT id, name, address, phone, created_at, updated_at FROM suppliers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            "SELECT id, name, address, phone, created_at, updated_at FROM suppliers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO suppliers (id, name, address, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.address)
        .bind(&supplier.phone)
        .bind(supplier.created_at)
        .bind(supplier.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(())
    }
}
