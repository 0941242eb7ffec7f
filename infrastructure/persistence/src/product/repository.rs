use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::db::map_query_error;

const SELECT_COLUMNS: &str = "SELECT id, categories, summary, expired_date, added_date, price, sku, name, supplier_id, images, stock, updated_at FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} ORDER BY added_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_query_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let price = BigDecimal::from_f64(product.price).ok_or(RepositoryError::Persistence)?;
        let categories: Vec<String> = product.categories.iter().cloned().collect();

        sqlx::query(
            r#"INSERT INTO products (id, categories, summary, expired_date, added_date, price, sku, name, supplier_id, images, stock, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                categories = EXCLUDED.categories,
                summary = EXCLUDED.summary,
                expired_date = EXCLUDED.expired_date,
                price = EXCLUDED.price,
                sku = EXCLUDED.sku,
                name = EXCLUDED.name,
                supplier_id = EXCLUDED.supplier_id,
                images = EXCLUDED.images,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(categories)
        .bind(&product.summary)
        .bind(product.expired_date)
        .bind(product.added_date)
        .bind(price)
        .bind(&product.sku)
        .bind(&product.name)
        .bind(product.supplier_id)
        .bind(Json(product.images.clone()))
        .bind(product.stock)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(())
    }
}
