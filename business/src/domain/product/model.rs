use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

pub const IMAGE_FILE_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Uuid,
    pub file_name: String,
}

impl Image {
    pub fn new(file_name: String) -> Result<Self, ProductError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() || trimmed.chars().count() > IMAGE_FILE_NAME_MAX_LEN {
            return Err(ProductError::InvalidImage);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            file_name: trimmed.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub categories: BTreeSet<String>,
    pub summary: String,
    pub expired_date: DateTime<Utc>,
    pub added_date: DateTime<Utc>,
    pub price: f64,
    pub sku: String,
    pub name: String,
    pub supplier_id: Uuid,
    pub images: Vec<Image>,
    pub stock: i32,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub categories: Vec<String>,
    pub summary: String,
    pub expired_date: DateTime<Utc>,
    pub price: f64,
    pub sku: String,
    pub name: String,
    pub supplier_id: Uuid,
    pub image_file_names: Vec<String>,
    pub stock: i32,
}

impl NewProductProps {
    fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.sku.trim().is_empty() {
            return Err(ProductError::SkuEmpty);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }
        if self.stock < 0 {
            return Err(ProductError::InvalidStock);
        }
        Ok(())
    }

    fn categories(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the image list, reusing the id of any `existing` image whose
    /// file name is listed again. Each existing image is reused at most once.
    fn images(&self, existing: &[Image]) -> Result<Vec<Image>, ProductError> {
        let mut unclaimed: Vec<&Image> = existing.iter().collect();
        self.image_file_names
            .iter()
            .cloned()
            .map(|file_name| -> Result<Image, ProductError> {
                let mut image = Image::new(file_name)?;
                if let Some(pos) = unclaimed
                    .iter()
                    .position(|old| old.file_name == image.file_name)
                {
                    image.id = unclaimed.swap_remove(pos).id;
                }
                Ok(image)
            })
            .collect()
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        props.validate()?;
        let images = props.images(&[])?;
        let categories = props.categories();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            categories,
            summary: props.summary,
            expired_date: props.expired_date,
            added_date: now,
            price: props.price,
            sku: props.sku.trim().to_string(),
            name: props.name,
            supplier_id: props.supplier_id,
            images,
            stock: props.stock,
            updated_at: now,
        })
    }

    /// Applies a full replacement of the editable fields, keeping identity and
    /// the date the product was added.
    pub fn revise(&self, props: NewProductProps) -> Result<Self, ProductError> {
        props.validate()?;
        let images = props.images(&self.images)?;
        let categories = props.categories();

        Ok(Self {
            id: self.id,
            categories,
            summary: props.summary,
            expired_date: props.expired_date,
            added_date: self.added_date,
            price: props.price,
            sku: props.sku.trim().to_string(),
            name: props.name,
            supplier_id: props.supplier_id,
            images,
            stock: props.stock,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        categories: BTreeSet<String>,
        summary: String,
        expired_date: DateTime<Utc>,
        added_date: DateTime<Utc>,
        price: f64,
        sku: String,
        name: String,
        supplier_id: Uuid,
        images: Vec<Image>,
        stock: i32,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            categories,
            summary,
            expired_date,
            added_date,
            price,
            sku,
            name,
            supplier_id,
            images,
            stock,
            updated_at,
        }
    }
}
