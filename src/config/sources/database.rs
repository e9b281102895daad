//! Database source: persisted rows decoded into a configuration tree.

use crate::error::{LoadError, MalformedReason};
use crate::store::{ConfigRowStore, PersistedConfigRow};
use crate::types::{ConfigTree, ConfigValue};
use tracing::debug;

/// Fetch every persisted row and rebuild the tree.
///
/// Store failures and undecodable values are both fatal to the load.
pub async fn load(store: &dyn ConfigRowStore) -> Result<ConfigTree, LoadError> {
    let rows = store.find_all().await?;
    let row_count = rows.len();

    let mut tree = ConfigTree::new();
    for row in rows {
        let value = decode_value(&row)?;
        tree.insert(row.namespace, row.key, value);
    }

    debug!(rows = row_count, tree = ?tree, "Loaded configuration from database");
    Ok(tree)
}

/// Decode one row's stored JSON scalar.
///
/// An empty string decodes to `Null`: older rows used `""` to mean unset.
pub fn decode_value(row: &PersistedConfigRow) -> Result<ConfigValue, LoadError> {
    let malformed = |reason| LoadError::MalformedStoredValue {
        namespace: row.namespace.clone(),
        key: row.key.clone(),
        reason,
    };

    let json: serde_json::Value = serde_json::from_str(&row.value)
        .map_err(|e| malformed(MalformedReason::InvalidJson(e)))?;

    match ConfigValue::from_json(json).map_err(|e| malformed(MalformedReason::NotScalar(e)))? {
        ConfigValue::String(s) if s.is_empty() => Ok(ConfigValue::Null),
        value => Ok(value),
    }
}
