use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::{Image, Product};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Stock keeping unit, unique across the catalog
    pub sku: String,
    /// Short description
    #[oai(default)]
    pub summary: String,
    /// Category labels; duplicates are collapsed
    #[oai(default)]
    pub categories: Vec<String>,
    /// Unit price, finite and not negative
    pub price: f64,
    /// Units in stock, not negative
    pub stock: i32,
    pub expired_date: DateTime<Utc>,
    /// Supplier that provides the product
    pub supplier_id: Uuid,
    /// File names of the product images (1..=255 characters each)
    #[oai(default)]
    pub image_file_names: Vec<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: String,
    pub file_name: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id.to_string(),
            file_name: image.file_name,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub categories: Vec<String>,
    pub summary: String,
    pub expired_date: DateTime<Utc>,
    /// Date the product entered the catalog
    pub added_date: DateTime<Utc>,
    pub price: f64,
    pub sku: String,
    pub name: String,
    pub supplier_id: String,
    pub images: Vec<ImageResponse>,
    pub stock: i32,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            categories: product.categories.into_iter().collect(),
            summary: product.summary,
            expired_date: product.expired_date,
            added_date: product.added_date,
            price: product.price,
            sku: product.sku,
            name: product.name,
            supplier_id: product.supplier_id.to_string(),
            images: product.images.into_iter().map(ImageResponse::from).collect(),
            stock: product.stock,
            updated_at: product.updated_at,
        }
    }
}
