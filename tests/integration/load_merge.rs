//! Integration tests for the full load: templates, database rows and
//! environment together.

use growi_config::config::{ConfigLoader, DefaultTemplates, MapEnv, StaticTemplates};
use growi_config::error::{LoadError, StorageError};
use growi_config::store::{MemoryConfigStore, PersistedConfigRow};
use growi_config::types::{ConfigValue, NamespaceValues};
use std::sync::Arc;

fn values(pairs: &[(&str, ConfigValue)]) -> NamespaceValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn templates() -> StaticTemplates {
    StaticTemplates::new(
        values(&[("a", ConfigValue::from(1)), ("b", ConfigValue::from(2))]),
        values(&[
            ("markdown:isEnabledLinebreaks", ConfigValue::Bool(false)),
            ("markdown:xss:isEnabledPrevention", ConfigValue::Bool(true)),
        ]),
    )
}

#[tokio::test]
async fn test_db_overrides_template_per_key() {
    let store = MemoryConfigStore::with_rows([PersistedConfigRow::new("crowi", "b", "99")]);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    let loaded = loader.load().await.unwrap();
    assert_eq!(
        loaded.from_db.namespace("crowi"),
        Some(&values(&[("a", ConfigValue::from(1)), ("b", ConfigValue::from(99))]))
    );
}

#[tokio::test]
async fn test_missing_markdown_namespace_uses_template() {
    let store = MemoryConfigStore::with_rows([PersistedConfigRow::new("crowi", "a", "5")]);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    let loaded = loader.load().await.unwrap();
    assert_eq!(loaded.from_db.namespace("markdown"), Some(&templates().markdown()));
}

#[tokio::test]
async fn test_legacy_empty_string_row_is_unset() {
    let store = MemoryConfigStore::with_rows([PersistedConfigRow::new("crowi", "k", "\"\"")]);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    let loaded = loader.load().await.unwrap();
    assert_eq!(loaded.from_db.get("crowi", "k"), Some(&ConfigValue::Null));
}

#[tokio::test]
async fn test_results_are_independent() {
    let store = MemoryConfigStore::with_rows([PersistedConfigRow::new(
        "crowi",
        "security:passport-saml:issuer",
        "\"db-issuer\"",
    )]);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    let loaded = loader.load().await.unwrap();
    let from_db_before = loaded.from_db.clone();

    let mut from_env_vars = loaded.from_env_vars;
    from_env_vars.insert(
        "crowi",
        "security:passport-saml:issuer",
        ConfigValue::from("changed"),
    );

    assert_eq!(loaded.from_db, from_db_before);
    assert_eq!(
        loaded.from_db.get("crowi", "security:passport-saml:issuer"),
        Some(&ConfigValue::from("db-issuer"))
    );
}

#[tokio::test]
async fn test_each_load_is_a_fresh_snapshot() {
    let store = Arc::new(MemoryConfigStore::new());
    let loader = ConfigLoader::with_env(Arc::clone(&store), templates(), MapEnv::new());

    let first = loader.load().await.unwrap();
    store.put(PersistedConfigRow::new("crowi", "a", "7"));
    let second = loader.load().await.unwrap();

    assert_eq!(first.from_db.get("crowi", "a"), Some(&ConfigValue::from(1)));
    assert_eq!(second.from_db.get("crowi", "a"), Some(&ConfigValue::from(7)));
}

#[tokio::test]
async fn test_concurrent_loads_do_not_interfere() {
    let store = Arc::new(MemoryConfigStore::with_rows([PersistedConfigRow::new(
        "crowi", "b", "3",
    )]));
    let loader = Arc::new(ConfigLoader::with_env(
        Arc::clone(&store),
        templates(),
        MapEnv::new().with("SAML_ENABLED", "1"),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load().await.unwrap() })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    for loaded in &results[1..] {
        assert_eq!(loaded, &results[0]);
    }
    assert_eq!(
        results[0].from_env_vars.get("crowi", "security:passport-saml:isEnabled"),
        Some(&ConfigValue::Bool(true))
    );
}

#[tokio::test]
async fn test_store_failure_aborts_load() {
    let store = MemoryConfigStore::new();
    store.set_unavailable(true);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, LoadError::Persistence(StorageError::Unavailable(_))));
}

#[tokio::test]
async fn test_malformed_row_aborts_load() {
    let store = MemoryConfigStore::with_rows([PersistedConfigRow::new("markdown", "x", "not-json")]);
    let loader = ConfigLoader::with_env(store, templates(), MapEnv::new());

    match loader.load().await.unwrap_err() {
        LoadError::MalformedStoredValue { namespace, key, .. } => {
            assert_eq!(namespace, "markdown");
            assert_eq!(key, "x");
        }
        other => panic!("unexpected error: {}", other),
    }
}
