//! Environment variable schema: which variables override which slots.
//!
//! The table is additive. Adding a variable means adding one [`EnvVarSpec`]
//! here; the loader needs no changes.

use crate::config::coercion::ValueType;
use crate::types::{ConfigCoordinate, ConfigValue, CROWI_NAMESPACE};

/// One recognized environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarSpec {
    pub env_name: &'static str,
    pub coordinate: ConfigCoordinate,
    pub value_type: ValueType,
    pub default: ConfigValue,
}

const fn spec(
    env_name: &'static str,
    key: &'static str,
    value_type: ValueType,
    default: ConfigValue,
) -> EnvVarSpec {
    EnvVarSpec {
        env_name,
        coordinate: ConfigCoordinate::new(CROWI_NAMESPACE, key),
        value_type,
        default,
    }
}

/// Every active environment variable.
pub static ENV_VAR_SCHEMA: &[EnvVarSpec] = &[
    spec(
        "SAML_USES_ONLY_ENV_VARS_FOR_SOME_OPTIONS",
        "security:passport-saml:useOnlyEnvVarsForSomeOptions",
        ValueType::Boolean,
        ConfigValue::Bool(false),
    ),
    spec(
        "SAML_ENABLED",
        "security:passport-saml:isEnabled",
        ValueType::Boolean,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ENTRY_POINT",
        "security:passport-saml:entryPoint",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_CALLBACK_URI",
        "security:passport-saml:callbackUrl",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ISSUER",
        "security:passport-saml:issuer",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ATTR_MAPPING_ID",
        "security:passport-saml:attrMapId",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ATTR_MAPPING_USERNAME",
        "security:passport-saml:attrMapUsername",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ATTR_MAPPING_MAIL",
        "security:passport-saml:attrMapMail",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ATTR_MAPPING_FIRST_NAME",
        "security:passport-saml:attrMapFirstName",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_ATTR_MAPPING_LAST_NAME",
        "security:passport-saml:attrMapLastName",
        ValueType::String,
        ConfigValue::Null,
    ),
    spec(
        "SAML_CERT",
        "security:passport-saml:cert",
        ValueType::String,
        ConfigValue::Null,
    ),
];

/// Variables read during process bootstrap, before configuration exists.
/// They are never part of the schema.
pub const BOOTSTRAP_ENV_VARS: &[&str] = &[
    "MONGO_URI",
    "NODE_ENV",
    "PORT",
    "REDIS_URI",
    "SESSION_NAME",
    "PASSWORD_SEED",
    "SECRET_TOKEN",
];

/// Variables whose coordinates, types and defaults are not settled yet.
/// They must stay inactive until migrated into [`ENV_VAR_SCHEMA`].
pub const PENDING_ENV_VARS: &[&str] = &[
    "ELASTICSEARCH_URI",
    "FILE_UPLOAD",
    "HACKMD_URI",
    "HACKMD_URI_FOR_SERVER",
    "PLANTUML_URI",
    "BLOCKDIAG_URI",
    "OAUTH_GOOGLE_CLIENT_ID",
    "OAUTH_GOOGLE_CLIENT_SECRET",
    "OAUTH_GOOGLE_CALLBACK_URI",
    "OAUTH_GITHUB_CLIENT_ID",
    "OAUTH_GITHUB_CLIENT_SECRET",
    "OAUTH_GITHUB_CALLBACK_URI",
    "OAUTH_TWITTER_CONSUMER_KEY",
    "OAUTH_TWITTER_CONSUMER_SECRET",
    "OAUTH_TWITTER_CALLBACK_URI",
];

/// Find the schema entry for an environment variable name.
pub fn lookup(env_name: &str) -> Option<&'static EnvVarSpec> {
    ENV_VAR_SCHEMA.iter().find(|s| s.env_name == env_name)
}
