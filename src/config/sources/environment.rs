//! Environment variable source: schema-driven, typed overrides.

use crate::config::schema::{EnvVarSpec, ENV_VAR_SCHEMA};
use crate::types::ConfigTree;
use std::collections::HashMap;
use std::ffi::OsString;
use tracing::{debug, warn};

/// Read-only view of an environment.
pub trait EnvSource {
    /// Raw value of `name`, if the variable is set.
    fn var_os(&self, name: &str) -> Option<OsString>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// Map-backed environment for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build the environment tree from the full schema.
pub fn load(env: &dyn EnvSource) -> ConfigTree {
    load_with_schema(env, ENV_VAR_SCHEMA)
}

/// Build the environment tree from `schema`. Absent variables take the
/// schema default; present ones are coerced by their declared type.
pub fn load_with_schema(env: &dyn EnvSource, schema: &[EnvVarSpec]) -> ConfigTree {
    let mut tree = ConfigTree::new();

    for spec in schema {
        let value = match env.var_os(spec.env_name) {
            None => spec.default.clone(),
            Some(raw) => {
                let raw = match raw.into_string() {
                    Ok(raw) => raw,
                    Err(raw) => {
                        warn!(
                            env_var = spec.env_name,
                            "Environment variable is not valid UTF-8, decoding lossily"
                        );
                        raw.to_string_lossy().into_owned()
                    }
                };
                let value = spec.value_type.parse(&raw);
                if value.is_invalid_number() {
                    warn!(
                        env_var = spec.env_name,
                        coordinate = %spec.coordinate,
                        "Environment variable is not a number"
                    );
                }
                value
            }
        };

        tree.insert(spec.coordinate.namespace, spec.coordinate.key, value);
    }

    debug!(tree = ?tree, "Loaded configuration from environment variables");
    tree
}
