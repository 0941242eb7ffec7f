use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use business::domain::cart::store::KeyValueStore;
use business::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage.malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable store kept in one JSON object file.
///
/// The file is the only state: every `get` reads it and every `set` reads,
/// merges one key and rewrites it through a sibling temp file, so several
/// handles or processes on the same path see each other's lines. The mutex
/// serializes handles within a process; concurrent writers in different
/// processes can still race between read and rename.
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Opens the store at `path`. A missing file is an empty store; a file
    /// that is not a JSON object of strings is rejected.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = read_entries(&path)?;

        tracing::debug!(
            "Opened storage file {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(e.into()),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let mut entries = read_entries(&self.path).map_err(|e| {
            tracing::error!("Failed to read storage file {}: {e}", self.path.display());
            RepositoryError::Persistence
        })?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;

        let result = read_entries(&self.path).and_then(|mut entries| {
            entries.insert(key.to_string(), value.to_string());
            self.write_entries(&entries)
        });
        result.map_err(|e| {
            tracing::error!("Failed to write storage file {}: {e}", self.path.display());
            RepositoryError::Persistence
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use business::application::storefront::detail::ProductDetail;
    use business::domain::cart::store::CartStore;
    use business::domain::logger::Logger;
    use business::domain::product::model::Product;
    use chrono::Utc;
    use uuid::Uuid;

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    #[test]
    fn should_start_empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let store = FileKeyValueStore::open(&path).unwrap();

        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn should_persist_values_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        {
            let store = FileKeyValueStore::open(&path).unwrap();
            store.set("a", "1").unwrap();
            store.set("b", "2").unwrap();
            store.set("a", "3").unwrap();
        }

        let reopened = FileKeyValueStore::open(&path).unwrap();

        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn should_share_lines_between_handles_on_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let first = FileKeyValueStore::open(&path).unwrap();
        let second = FileKeyValueStore::open(&path).unwrap();

        first.set("product-a", "1").unwrap();
        assert_eq!(second.get("product-a").unwrap().as_deref(), Some("1"));
        second.set("product-b", "2").unwrap();

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get("product-a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("product-b").unwrap().as_deref(), Some("2"));
        assert_eq!(first.get("product-b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn should_create_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cart.json");
        let store = FileKeyValueStore::open(&path).unwrap();

        store.set("a", "1").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn should_reject_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "[not an object").unwrap();

        let result = FileKeyValueStore::open(&path);

        assert!(matches!(result, Err(StorageError::Malformed(_))));
    }

    #[test]
    fn should_refuse_to_overwrite_file_corrupted_after_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let store = FileKeyValueStore::open(&path).unwrap();
        fs::write(&path, "{broken").unwrap();

        assert_eq!(store.get("a"), Err(RepositoryError::Persistence));
        assert_eq!(store.set("a", "1"), Err(RepositoryError::Persistence));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{broken");
    }

    #[test]
    fn should_restore_cart_quantity_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let logger: Arc<dyn Logger> = Arc::new(SilentLogger);
        let now = Utc::now();
        let product = Product::from_repository(
            Uuid::new_v4(),
            BTreeSet::new(),
            "House blend".to_string(),
            now,
            now,
            9.99,
            "sku-1".to_string(),
            "Coffee".to_string(),
            Uuid::new_v4(),
            Vec::new(),
            20,
            now,
        );

        {
            let storage = Arc::new(FileKeyValueStore::open(&path).unwrap());
            let cart = CartStore::new(storage, logger.clone());
            let mut detail = ProductDetail::open(product.clone(), cart, logger.clone());
            detail.change_value(true);
            detail.change_value(true);
            detail.add_to_cart().unwrap();
        }

        let storage = Arc::new(FileKeyValueStore::open(&path).unwrap());
        let cart = CartStore::new(storage, logger.clone());
        let reloaded = ProductDetail::open(product.clone(), cart.clone(), logger);

        assert_eq!(reloaded.quantity(), 3);
        let line = cart.get(&product.id.to_string()).unwrap();
        assert_eq!(line.unit_price, 9.99);
    }
}
