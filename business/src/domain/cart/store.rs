use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

use super::errors::CartError;
use super::model::CartLine;

/// String key/value storage scoped to one storefront origin.
///
/// Reads and writes are synchronous; implementations serialize access
/// internally.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}

/// Cart persistence: one JSON-encoded [`CartLine`] per product id.
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self { storage, logger }
    }

    /// Returns the stored line for `product_id`.
    ///
    /// A missing key, an unreadable store and a malformed value all read as
    /// "no entry".
    pub fn get(&self, product_id: &str) -> Option<CartLine> {
        let raw = match self.storage.get(product_id) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read cart entry {}: {}", product_id, e));
                return None;
            }
        };

        match serde_json::from_str::<CartLine>(&raw) {
            Ok(line) => Some(line),
            Err(e) => {
                self.logger.warn(&format!(
                    "Ignoring malformed cart entry {}: {}",
                    product_id, e
                ));
                None
            }
        }
    }

    /// Stores `line` under `product_id`, replacing any previous entry.
    pub fn put(&self, product_id: &str, line: &CartLine) -> Result<(), CartError> {
        let raw = serde_json::to_string(line)?;
        self.storage.set(product_id, &raw)?;
        self.logger.debug(&format!(
            "Cart entry {} stored with quantity {}",
            product_id, line.quantity
        ));
        Ok(())
    }
}
