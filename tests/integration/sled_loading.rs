//! Integration tests for loading from the sled-backed store

use growi_config::config::{ConfigLoader, MapEnv, StaticTemplates};
use growi_config::store::{ConfigRowStore, PersistedConfigRow, SledConfigStore};
use growi_config::types::ConfigValue;
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_from_sled_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledConfigStore::new(temp_dir.path()).unwrap();
    store
        .put(&PersistedConfigRow::new("crowi", "app:title", "\"GROWI\""))
        .unwrap();
    store
        .put(&PersistedConfigRow::new("crowi", "app:confidential", "\"\""))
        .unwrap();
    store
        .put(&PersistedConfigRow::new("markdown", "markdown:isEnabledLinebreaks", "true"))
        .unwrap();

    let templates = StaticTemplates::from_json_str(
        r#"{
            "crowi": { "app:title": null, "app:fileUpload": false },
            "markdown": { "markdown:isEnabledLinebreaks": false, "markdown:isEnabledLinebreaksInComments": true }
        }"#,
        Path::new("inline"),
    )
    .unwrap();

    let loader = ConfigLoader::with_env(store, templates, MapEnv::new());
    let loaded = loader.load().await.unwrap();

    assert_eq!(
        loaded.from_db.get("crowi", "app:title"),
        Some(&ConfigValue::from("GROWI"))
    );
    assert_eq!(
        loaded.from_db.get("crowi", "app:confidential"),
        Some(&ConfigValue::Null)
    );
    assert_eq!(
        loaded.from_db.get("crowi", "app:fileUpload"),
        Some(&ConfigValue::Bool(false))
    );
    assert_eq!(
        loaded.from_db.get("markdown", "markdown:isEnabledLinebreaks"),
        Some(&ConfigValue::Bool(true))
    );
    assert_eq!(
        loaded
            .from_db
            .get("markdown", "markdown:isEnabledLinebreaksInComments"),
        Some(&ConfigValue::Bool(true))
    );
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = SledConfigStore::new(temp_dir.path()).unwrap();
        store
            .put(&PersistedConfigRow::new("crowi", "security:restrictGuestMode", "\"Deny\""))
            .unwrap();
        store.flush().unwrap();
    }

    let store = SledConfigStore::new(temp_dir.path()).unwrap();
    let rows = store.find_all().await.unwrap();
    assert_eq!(
        rows,
        vec![PersistedConfigRow::new(
            "crowi",
            "security:restrictGuestMode",
            "\"Deny\""
        )]
    );
}
