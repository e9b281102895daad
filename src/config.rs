//! Configuration System
//!
//! Resolves the application configuration from two independent sources: rows
//! persisted in the config store and environment variables described by a
//! static schema. Database values are overlaid on the default templates; the
//! environment tree is returned separately so callers choose the precedence.

use crate::error::LoadError;
use crate::store::ConfigRowStore;
use crate::types::ConfigTree;
use serde::Serialize;
use tracing::info;

pub mod coercion;
pub mod merge;
pub mod schema;
pub mod sources;
pub mod templates;

pub use coercion::ValueType;
pub use schema::{EnvVarSpec, ENV_VAR_SCHEMA};
pub use sources::environment::{EnvSource, MapEnv, ProcessEnv};
pub use templates::{DefaultTemplates, StaticTemplates};

/// Result of a full load: both trees, independently owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedConfig {
    /// Database values overlaid on the default templates.
    #[serde(rename = "fromDB")]
    pub from_db: ConfigTree,
    /// Schema-driven values from the environment.
    pub from_env_vars: ConfigTree,
}

/// Loads configuration from a row store, default templates and an
/// environment.
pub struct ConfigLoader<S, T, E = ProcessEnv> {
    store: S,
    templates: T,
    env: E,
}

impl<S, T> ConfigLoader<S, T, ProcessEnv>
where
    S: ConfigRowStore,
    T: DefaultTemplates,
{
    /// Loader reading the current process environment.
    pub fn new(store: S, templates: T) -> Self {
        Self {
            store,
            templates,
            env: ProcessEnv,
        }
    }
}

impl<S, T, E> ConfigLoader<S, T, E>
where
    S: ConfigRowStore,
    T: DefaultTemplates,
    E: EnvSource,
{
    /// Loader reading an explicit environment.
    pub fn with_env(store: S, templates: T, env: E) -> Self {
        Self {
            store,
            templates,
            env,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load both sources and merge the database tree with the templates.
    pub async fn load(&self) -> Result<LoadedConfig, LoadError> {
        let from_db = self.load_from_db().await?;
        let from_env_vars = self.load_from_env_vars();

        let from_db = merge::overlay_on_templates(self.templates.to_tree(), from_db);

        info!(
            db_namespaces = from_db.len(),
            db_values = from_db.value_count(),
            env_values = from_env_vars.value_count(),
            "Configuration loaded"
        );

        Ok(LoadedConfig {
            from_db,
            from_env_vars,
        })
    }

    /// Persisted values only, without templates.
    pub async fn load_from_db(&self) -> Result<ConfigTree, LoadError> {
        sources::database::load(&self.store).await
    }

    /// Environment values for every schema entry.
    pub fn load_from_env_vars(&self) -> ConfigTree {
        sources::environment::load(&self.env)
    }
}
