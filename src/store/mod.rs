//! Config Row Store
//!
//! Read contract for persisted configuration rows, plus the in-memory and
//! sled-backed implementations.

pub mod persistence;

pub use persistence::SledConfigStore;

use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One persisted configuration slot. `value` is a JSON-encoded scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfigRow {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

impl PersistedConfigRow {
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Config row store interface
#[async_trait]
pub trait ConfigRowStore: Send + Sync {
    /// Fetch every persisted configuration row.
    async fn find_all(&self) -> Result<Vec<PersistedConfigRow>, StorageError>;
}

#[async_trait]
impl<T: ConfigRowStore + ?Sized> ConfigRowStore for Arc<T> {
    async fn find_all(&self) -> Result<Vec<PersistedConfigRow>, StorageError> {
        (**self).find_all().await
    }
}

/// In-memory row store. Rows are kept in `(namespace, key)` order.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    rows: RwLock<BTreeMap<(String, String), String>>,
    unavailable: AtomicBool,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = PersistedConfigRow>) -> Self {
        let store = Self::new();
        for row in rows {
            store.put(row);
        }
        store
    }

    /// Insert or replace a row.
    pub fn put(&self, row: PersistedConfigRow) {
        let mut rows = self.rows.write();
        rows.insert((row.namespace, row.key), row.value);
    }

    pub fn remove(&self, namespace: &str, key: &str) -> bool {
        let mut rows = self.rows.write();
        rows.remove(&(namespace.to_string(), key.to_string())).is_some()
    }

    /// Make subsequent queries fail as if the backing store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConfigRowStore for MemoryConfigStore {
    async fn find_all(&self) -> Result<Vec<PersistedConfigRow>, StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }

        let rows = self.rows.read();
        Ok(rows
            .iter()
            .map(|((namespace, key), value)| PersistedConfigRow {
                namespace: namespace.clone(),
                key: key.clone(),
                value: value.clone(),
            })
            .collect())
    }
}
