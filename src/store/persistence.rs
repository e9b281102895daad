//! Persistence layer for config rows

use crate::error::StorageError;
use crate::store::{ConfigRowStore, PersistedConfigRow};
use async_trait::async_trait;
use std::path::Path;

/// Separates namespace and key inside a sled key.
const KEY_SEPARATOR: u8 = 0;

/// Sled-based implementation of ConfigRowStore
#[derive(Clone)]
pub struct SledConfigStore {
    db: sled::Db,
}

impl SledConfigStore {
    /// Open (or create) a store at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|e| StorageError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self { db })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    fn row_key(namespace: &str, key: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(namespace.len() + key.len() + 1);
        out.extend_from_slice(namespace.as_bytes());
        out.push(KEY_SEPARATOR);
        out.extend_from_slice(key.as_bytes());
        out
    }

    /// Insert or replace a row.
    pub fn put(&self, row: &PersistedConfigRow) -> Result<(), StorageError> {
        let value = bincode::serialize(row)
            .map_err(|e| StorageError::Write(format!("Failed to serialize config row: {}", e)))?;

        self.db
            .insert(Self::row_key(&row.namespace, &row.key), value)
            .map_err(|e| StorageError::Write(format!("Failed to put config row: {}", e)))?;
        Ok(())
    }

    /// Remove a row. Returns whether it existed.
    pub fn remove(&self, namespace: &str, key: &str) -> Result<bool, StorageError> {
        let previous = self
            .db
            .remove(Self::row_key(namespace, key))
            .map_err(|e| StorageError::Write(format!("Failed to remove config row: {}", e)))?;
        Ok(previous.is_some())
    }

    /// Synchronous scan of every row.
    pub fn list_all(&self) -> Result<Vec<PersistedConfigRow>, StorageError> {
        let mut rows = Vec::new();
        for item in self.db.iter() {
            let (_, value) = item
                .map_err(|e| StorageError::Query(format!("Failed to iterate store: {}", e)))?;
            let row: PersistedConfigRow = bincode::deserialize(&value).map_err(|e| {
                StorageError::CorruptRecord(format!("Failed to deserialize config row: {}", e))
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db
            .flush()
            .map_err(|e| StorageError::Write(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl ConfigRowStore for SledConfigStore {
    async fn find_all(&self) -> Result<Vec<PersistedConfigRow>, StorageError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.list_all())
            .await
            .map_err(|e| StorageError::Query(format!("Config store scan task failed: {}", e)))?
    }
}
