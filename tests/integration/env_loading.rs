//! Integration tests for loading from the process environment

use super::test_utils::with_env_vars;
use growi_config::config::{ConfigLoader, StaticTemplates, ENV_VAR_SCHEMA};
use growi_config::store::MemoryConfigStore;
use growi_config::types::ConfigValue;

fn loader() -> ConfigLoader<MemoryConfigStore, StaticTemplates> {
    ConfigLoader::new(MemoryConfigStore::new(), StaticTemplates::default())
}

#[test]
fn test_unset_environment_yields_schema_defaults() {
    let tree = with_env_vars(&[], || loader().load_from_env_vars());

    for spec in ENV_VAR_SCHEMA {
        assert_eq!(
            tree.get(spec.coordinate.namespace, spec.coordinate.key),
            Some(&spec.default),
            "default for {}",
            spec.env_name
        );
    }
}

#[test]
fn test_saml_enabled_without_entry_point() {
    let tree = with_env_vars(&[("SAML_ENABLED", "true")], || loader().load_from_env_vars());

    assert_eq!(
        tree.get("crowi", "security:passport-saml:isEnabled"),
        Some(&ConfigValue::Bool(true))
    );
    assert_eq!(
        tree.get("crowi", "security:passport-saml:entryPoint"),
        Some(&ConfigValue::Null)
    );
}

#[test]
fn test_boolean_variables_from_process() {
    for (raw, expected) in [
        ("true", true),
        ("TRUE", true),
        ("1", true),
        ("false", false),
        ("0", false),
        ("", false),
        ("yes", false),
    ] {
        let tree = with_env_vars(&[("SAML_USES_ONLY_ENV_VARS_FOR_SOME_OPTIONS", raw)], || {
            loader().load_from_env_vars()
        });
        assert_eq!(
            tree.get("crowi", "security:passport-saml:useOnlyEnvVarsForSomeOptions"),
            Some(&ConfigValue::Bool(expected)),
            "raw value {:?}",
            raw
        );
    }
}

#[test]
fn test_string_variables_are_verbatim() {
    let cert = "-----BEGIN CERTIFICATE-----\nMIIC\n-----END CERTIFICATE-----";
    let tree = with_env_vars(
        &[
            ("SAML_ENTRY_POINT", "https://idp.example.com/sso"),
            ("SAML_CERT", cert),
        ],
        || loader().load_from_env_vars(),
    );

    assert_eq!(
        tree.get("crowi", "security:passport-saml:entryPoint"),
        Some(&ConfigValue::from("https://idp.example.com/sso"))
    );
    assert_eq!(
        tree.get("crowi", "security:passport-saml:cert"),
        Some(&ConfigValue::from(cert))
    );
}

#[test]
fn test_pending_variables_stay_inactive() {
    let tree = with_env_vars(
        &[
            ("OAUTH_GOOGLE_CLIENT_ID", "client"),
            ("HACKMD_URI", "http://localhost:3010"),
        ],
        || loader().load_from_env_vars(),
    );

    assert!(tree.get("crowi", "security:passport-google:clientId").is_none());
    assert_eq!(tree.value_count(), ENV_VAR_SCHEMA.len());
}
